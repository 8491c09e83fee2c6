use crate::cave::parse;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut cave = parse(input)?;
    Ok(cave.fill().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9";
        assert_eq!("24", process(input)?);
        Ok(())
    }
}
