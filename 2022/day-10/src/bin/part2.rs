use aoc_common::{Args, Palette};
use miette::*;

use aoc2022_day_10::{part2, visualize};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::from_cli();
    let input = args.read_input()?;
    if args.visualize {
        print!("{}", visualize(&input, &Palette::detect())?);
        return Ok(());
    }
    let result = part2::process(&input)?;
    println!("Result:\n{}", result);
    Ok(())
}
