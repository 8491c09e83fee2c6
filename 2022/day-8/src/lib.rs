pub mod forest;
pub mod part1;
pub mod part2;
