use crate::assignment::parser;
use chumsky::prelude::*;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pairs = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let count = pairs
        .iter()
        .filter(|(a, b)| a.contains(b) || b.contains(a))
        .count();

    Ok(count.to_string())
}
