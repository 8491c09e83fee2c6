use crate::device::{program, Trace};
use miette::*;

const SAMPLED_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let trace = Trace::run(&program(input)?)?;
    Ok(trace.signal_strength(SAMPLED_CYCLES).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("13140", process(input)?);
        Ok(())
    }

    #[test]
    fn program_ending_early() -> Result<()> {
        // only cycle 20 is reached, with X = 1 + 18
        let input = format!("addx 18\n{}", "noop\n".repeat(18));
        assert_eq!("380", process(&input)?);
        Ok(())
    }
}
