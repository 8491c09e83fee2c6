pub mod heightmap;
pub mod part1;
pub mod part2;

pub use heightmap::visualize;
