pub mod device;
pub mod part1;
pub mod part2;

pub use device::visualize;
