use crate::troop::{parse, Relief};
use miette::*;

const ROUNDS: usize = 10_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut troop = parse(input)?;
    troop.rounds(ROUNDS, Relief::Worried)?;
    Ok(troop.monkey_business().to_string())
}
