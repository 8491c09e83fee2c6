use crate::forest::parse;
use miette::*;
use rayon::prelude::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let forest = parse(input)?;

    let best = (0..forest.height)
        .into_par_iter()
        .flat_map_iter(|y| (0..forest.width).map(move |x| (x, y)))
        .map(|(x, y)| forest.scenic_score(x, y))
        .max()
        .unwrap_or(0);

    Ok(best.to_string())
}
