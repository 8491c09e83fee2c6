pub mod riddle;
pub mod part1;
pub mod part2;
