use aoc_common::Args;
use miette::*;

use aoc2022_day_13::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::from_cli();
    let input = args.read_input()?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
