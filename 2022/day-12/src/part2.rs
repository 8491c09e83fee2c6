use crate::heightmap::parse;
use miette::*;
use rayon::prelude::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map = parse(input)?;
    let starts: Vec<_> = map.lowest().collect();
    tracing::debug!(starts = starts.len(), "searching from every lowest square");

    let fewest = starts
        .par_iter()
        .filter_map(|&start| map.shortest_path(start))
        .map(|path| path.len() - 1)
        .min()
        .ok_or_else(|| miette!("The goal cannot be reached from any square at elevation 'a'"))?;

    Ok(fewest.to_string())
}
