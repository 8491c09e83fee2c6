use aoc2022_day_15::*;

const INPUT: &str = include_str!("../example.txt");

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process_with(divan::black_box(INPUT), 10).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process_with(divan::black_box(INPUT), 20).unwrap();
}
