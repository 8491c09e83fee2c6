pub mod part1;
pub mod part2;
pub mod rope;

pub use rope::visualize;
