use crate::game::{parser, Column, Outcome, Shape};
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
            let outcome = match column {
                Column::X => Outcome::Lose,
                Column::Y => Outcome::Draw,
                Column::Z => Outcome::Win,
            };
            Shape::for_outcome(opponent, outcome).score() + outcome.score()
        })
        .sum();

    Ok(score.to_string())
}
