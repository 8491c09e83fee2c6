use crate::riddle::parse;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let riddle = parse(input)?;
    Ok(riddle.solve_for_human()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("301", process(input)?);
        Ok(())
    }
}
