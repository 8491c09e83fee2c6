use crate::assignment::parser;
use chumsky::prelude::*;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pairs = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let count = pairs.iter().filter(|(a, b)| a.overlaps(b)).count();

    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
";
        assert_eq!("4", process(input)?);
        Ok(())
    }
}
