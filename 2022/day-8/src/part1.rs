use crate::forest::parse;
use itertools::iproduct;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let forest = parse(input)?;

    let visible = iproduct!(0..forest.height, 0..forest.width)
        .filter(|&(y, x)| forest.is_visible(x, y))
        .count();

    Ok(visible.to_string())
}
