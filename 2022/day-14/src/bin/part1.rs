use aoc_common::{Args, Palette};
use miette::*;

use aoc2022_day_14::{part1, visualize};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::from_cli();
    let input = args.read_input()?;
    if args.visualize {
        print!("{}", visualize(&input, &Palette::detect())?);
    }
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
