use crate::rope::{parser, simulate};
use chumsky::Parser;
use miette::*;

pub const KNOTS: usize = 10;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let motions = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let rope = simulate(&motions, KNOTS)?;
    Ok(rope.visited().to_string())
}
