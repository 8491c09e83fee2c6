pub mod packet;
pub mod part1;
pub mod part2;
