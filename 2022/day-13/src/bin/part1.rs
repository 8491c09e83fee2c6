use aoc_common::Args;
use miette::*;

use aoc2022_day_13::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::from_cli();
    let input = args.read_input()?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
