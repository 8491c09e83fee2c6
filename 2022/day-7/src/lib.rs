pub mod filesystem;
pub mod part1;
pub mod part2;

pub use filesystem::visualize;
