use crate::chamber::{parse, Chamber};
use indicatif::ProgressBar;
use miette::*;

pub const ROCKS: u64 = 2022;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut chamber = Chamber::new(parse(input)?);
    let height = chamber.height_after(ROCKS, &ProgressBar::hidden());
    Ok(height.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";
        assert_eq!("3068", process(input)?);
        Ok(())
    }
}
