use aoc2022_day_17::*;

const INPUT: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

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
