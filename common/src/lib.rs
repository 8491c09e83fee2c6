//! Helpers shared by every day: reading the puzzle input and coloring
//! terminal visualizations.

pub mod input;
pub mod output;

pub use input::Args;
pub use output::{Palette, TerminalColor};
