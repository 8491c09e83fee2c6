use crate::supplies::{parse, Crane};
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (mut supplies, steps) = parse(input)?;

    for step in &steps {
        supplies.rearrange(step, Crane::CrateMover9000)?;
    }

    Ok(supplies.top_crates())
}
