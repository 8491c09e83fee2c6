use crate::riddle::{parse, ROOT};
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let riddle = parse(input)?;
    Ok(riddle.yell(ROOT, None)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("152", process(input)?);
        Ok(())
    }
}
