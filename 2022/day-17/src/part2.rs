use crate::chamber::{parse, Chamber};
use indicatif::{ProgressBar, ProgressStyle};
use miette::*;

const ROCKS: u64 = 1_000_000_000_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut chamber = Chamber::new(parse(input)?);

    let progress = ProgressBar::new(ROCKS).with_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len} rocks")
            .into_diagnostic()?,
    );
    let height = chamber.height_after(ROCKS, &progress);
    progress.finish_and_clear();

    Ok(height.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";
        assert_eq!("1514285714288", process(input)?);
        Ok(())
    }
}
