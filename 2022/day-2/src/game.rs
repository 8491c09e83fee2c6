use chumsky::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    pub fn score(self) -> u32 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape this one defeats.
    pub fn beats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape that defeats this one.
    pub fn beaten_by(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }

    pub fn play(self, opponent: Shape) -> Outcome {
        if self == opponent {
            Outcome::Draw
        } else if self.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// What to throw against `opponent` to get `outcome`.
    pub fn for_outcome(opponent: Shape, outcome: Outcome) -> Shape {
        match outcome {
            Outcome::Lose => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.beaten_by(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    pub fn score(self) -> u32 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

/// Second column of the strategy guide. Its meaning depends on the part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    X,
    Y,
    Z,
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(Shape, Column)>, extra::Err<Rich<'a, char>>> {
    let opponent = choice((
        just('A').to(Shape::Rock),
        just('B').to(Shape::Paper),
        just('C').to(Shape::Scissors),
    ));
    let column = choice((
        just('X').to(Column::X),
        just('Y').to(Column::Y),
        just('Z').to(Column::Z),
    ));

    opponent
        .then_ignore(just(' '))
        .then(column)
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}
