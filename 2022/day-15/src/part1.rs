use crate::sensor::{excluded, parse};
use miette::*;

const ROW: i64 = 2_000_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, ROW)
}

/// Positions on `row` where no beacon can be.
pub fn process_with(input: &str, row: i64) -> Result<String> {
    let sensors = parse(input)?;
    Ok(excluded(&sensors, row).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("26", process_with(input, 10)?);
        Ok(())
    }
}
