use crate::game::{parser, Column, Shape};
use chumsky::prelude::*;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rounds = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let score: u32 = rounds
        .iter()
        .map(|&(opponent, column)| {
            let mine = match column {
                Column::X => Shape::Rock,
                Column::Y => Shape::Paper,
                Column::Z => Shape::Scissors,
            };
            mine.score() + mine.play(opponent).score()
        })
        .sum();

    Ok(score.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "A Y
B X
C Z";
        assert_eq!("15", process(input)?);
        Ok(())
    }
}
