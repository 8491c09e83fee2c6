use crate::troop::{parse, Relief};
use miette::*;

const ROUNDS: usize = 20;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut troop = parse(input)?;
    troop.rounds(ROUNDS, Relief::Calm)?;
    Ok(troop.monkey_business().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("10605", process(input)?);
        Ok(())
    }
}
