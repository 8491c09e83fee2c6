use crate::device::{program, render, Trace};
use aoc_common::Palette;
use miette::*;

/// The six CRT rows as plain text.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let trace = Trace::run(&program(input)?)?;
    Ok(render(&trace, &Palette::plain()).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        let expected = "##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
