use crate::sensor::{gap, parse};
use miette::*;
use rayon::prelude::*;

const BOUND: i64 = 4_000_000;
const FREQUENCY_FACTOR: i64 = 4_000_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, BOUND)
}

/// Tuning frequency of the one cell with both coordinates in `0..=bound`
/// that no sensor covers.
pub fn process_with(input: &str, bound: i64) -> Result<String> {
    let sensors = parse(input)?;

    let (x, y) = (0..=bound)
        .into_par_iter()
        .find_map_any(|y| gap(&sensors, y, bound).map(|x| (x, y)))
        .ok_or_else(|| miette!("Every position in 0..={bound} is covered"))?;
    tracing::debug!(x, y, "distress beacon found");

    Ok((x * FREQUENCY_FACTOR + y).to_string())
}
