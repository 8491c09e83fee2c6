use itertools::Itertools;
use miette::*;

/// Number of characters read once the last `size` of them are all different.
pub fn marker_end(signal: &str, size: usize) -> Result<usize> {
    ensure!(size > 0, "Marker size must be positive");

    signal
        .trim()
        .as_bytes()
        .windows(size)
        .position(|window| window.iter().all_unique())
        .map(|start| start + size)
        .ok_or_else(|| miette!("No {size} character marker in the datastream"))
}
