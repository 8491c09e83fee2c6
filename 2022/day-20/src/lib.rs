pub mod mixing;
pub mod part1;
pub mod part2;
