use crate::packet::pairs;
use chumsky::Parser;
use miette::*;
use std::cmp::Ordering;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pairs = pairs()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let sum: usize = pairs
        .iter()
        .enumerate()
        .filter(|(_, (left, right))| left.cmp(right) != Ordering::Greater)
        .map(|(index, _)| index + 1)
        .sum();

    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("13", process(input)?);
        Ok(())
    }
}
