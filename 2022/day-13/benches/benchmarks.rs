use aoc2022_day_13::*;

const INPUT: &str = include_str!("../example.txt");

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(INPUT)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(INPUT)).unwrap();
}
