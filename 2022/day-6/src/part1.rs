use crate::signal::marker_end;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(marker_end(input, 4)?.to_string())
}
