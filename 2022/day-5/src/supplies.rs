use miette::*;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{self, anychar, multispace0, multispace1, newline, space0, space1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

/// Which crane does the lifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crane {
    /// Moves one crate at a time, so a moved pile ends up reversed.
    CrateMover9000,
    /// Moves the whole pile at once.
    CrateMover9001,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub count: usize,
    /// 1-based stack number
    pub from: usize,
    /// 1-based stack number
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplies {
    // index 0 of each stack is its bottom crate
    stacks: Vec<Vec<char>>,
}

impl Supplies {
    fn stack_index(&self, number: usize) -> Result<usize> {
        ensure!(
            (1..=self.stacks.len()).contains(&number),
            "Invalid stack {} out of {}",
            number,
            self.stacks.len()
        );
        Ok(number - 1)
    }

    pub fn rearrange(&mut self, step: &Move, crane: Crane) -> Result<()> {
        let from = self.stack_index(step.from)?;
        let to = self.stack_index(step.to)?;

        let source = &mut self.stacks[from];
        ensure!(
            source.len() >= step.count,
            "Too many crates requested from stack {}: {} out of {}",
            step.from,
            step.count,
            source.len()
        );

        let mut pile = source.split_off(source.len() - step.count);
        if crane == Crane::CrateMover9000 {
            pile.reverse();
        }
        self.stacks[to].extend(pile);

        Ok(())
    }

    /// The crate on top of every stack; an empty stack shows as a space.
    pub fn top_crates(&self) -> String {
        self.stacks
            .iter()
            .map(|stack| stack.last().copied().unwrap_or(' '))
            .collect()
    }
}

fn crate_slot(input: &str) -> IResult<&str, Option<char>> {
    alt((
        map(delimited(complete::char('['), anychar, complete::char(']')), Some),
        map(tag("   "), |_| None),
    ))(input)
}

fn crate_row(input: &str) -> IResult<&str, Vec<Option<char>>> {
    separated_list1(complete::char(' '), crate_slot)(input)
}

fn stack_numbers(input: &str) -> IResult<&str, Vec<u32>> {
    delimited(space0, separated_list1(space1, complete::u32), space0)(input)
}

fn step(input: &str) -> IResult<&str, Move> {
    let (input, (count, from, to)) = tuple((
        preceded(tag("move "), complete::u32),
        preceded(tag(" from "), complete::u32),
        preceded(tag(" to "), complete::u32),
    ))(input)?;

    Ok((
        input,
        Move {
            count: count as usize,
            from: from as usize,
            to: to as usize,
        },
    ))
}

fn drawing_and_steps(
    input: &str,
) -> IResult<&str, (Vec<Vec<Option<char>>>, Vec<u32>, Vec<Move>)> {
    let (input, rows) = terminated(separated_list1(newline, crate_row), newline)(input)?;
    let (input, numbers) = terminated(stack_numbers, multispace1)(input)?;
    let (input, steps) = terminated(separated_list1(newline, step), multispace0)(input)?;
    Ok((input, (rows, numbers, steps)))
}

/// Parses the crate drawing and the rearrangement procedure.
#[tracing::instrument(skip(input))]
pub fn parse(input: &str) -> Result<(Supplies, Vec<Move>)> {
    let (_, (rows, numbers, steps)) = all_consuming(drawing_and_steps)(input)
        .map_err(|e| miette!("Parse failed: {e}"))?;

    let mut stacks = vec![Vec::new(); numbers.len()];
    for row in rows.iter().rev() {
        for (index, slot) in row.iter().enumerate() {
            let Some(label) = slot else { continue };
            stacks
                .get_mut(index)
                .ok_or_else(|| miette!("Crate '{}' drawn outside of {} stacks", label, numbers.len()))?
                .push(*label);
        }
    }
    tracing::debug!(stacks = stacks.len(), steps = steps.len(), "parsed supplies");

    Ok((Supplies { stacks }, steps))
}
