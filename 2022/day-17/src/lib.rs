pub mod chamber;
pub mod part1;
pub mod part2;

pub use chamber::visualize;
