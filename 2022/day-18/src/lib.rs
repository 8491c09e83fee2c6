pub mod droplet;
pub mod part1;
pub mod part2;
