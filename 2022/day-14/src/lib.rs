pub mod cave;
pub mod part1;
pub mod part2;

pub use cave::visualize;
