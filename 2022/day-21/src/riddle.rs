use miette::*;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{self, alpha1, line_ending, multispace0, one_of, space1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, separated_pair, terminated, tuple},
    IResult,
};
use std::collections::HashMap;

pub const ROOT: &str = "root";
pub const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn apply(self, left: i64, right: i64) -> Result<i64> {
        let value = match self {
            Op::Add => left.checked_add(right),
            Op::Sub => left.checked_sub(right),
            Op::Mul => left.checked_mul(right),
            Op::Div => return exact_div(left, right),
        };
        value.ok_or_else(|| miette!("Overflow computing {left} {self} {right}"))
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        };
        write!(f, "{symbol}")
    }
}

fn exact_div(left: i64, right: i64) -> Result<i64> {
    ensure!(right != 0, "Division of {left} by zero");
    let quotient = left
        .checked_div(right)
        .ok_or_else(|| miette!("Overflow computing {left} / {right}"))?;
    ensure!(quotient * right == left, "Inexact division {left} / {right}");
    Ok(quotient)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job<'a> {
    Number(i64),
    Math(&'a str, Op, &'a str),
}

/// Every monkey's job, by name.
#[derive(Debug, Clone)]
pub struct Riddle<'a> {
    jobs: HashMap<&'a str, Job<'a>>,
}

impl<'a> Riddle<'a> {
    fn job(&self, name: &str) -> Result<Job<'a>> {
        self.jobs
            .get(name)
            .copied()
            .ok_or_else(|| miette!("Unknown monkey '{name}'"))
    }

    /// The number `name` yells. With `human` set, that value replaces
    /// whatever the human monkey's job says.
    pub fn yell(&self, name: &str, human: Option<i64>) -> Result<i64> {
        self.yell_at_depth(name, human, 0)
    }

    fn yell_at_depth(&self, name: &str, human: Option<i64>, depth: usize) -> Result<i64> {
        ensure!(depth <= self.jobs.len(), "Monkey '{name}' depends on itself");
        if let (HUMAN, Some(value)) = (name, human) {
            return Ok(value);
        }

        match self.job(name)? {
            Job::Number(value) => Ok(value),
            Job::Math(left, op, right) => {
                let left = self.yell_at_depth(left, human, depth + 1)?;
                let right = self.yell_at_depth(right, human, depth + 1)?;
                op.apply(left, right)
                    .wrap_err_with(|| format!("While computing monkey '{name}'"))
            }
        }
    }

    /// Whether the human is somewhere below `name`.
    fn involves_human(&self, name: &str, depth: usize) -> Result<bool> {
        ensure!(depth <= self.jobs.len(), "Monkey '{name}' depends on itself");
        if name == HUMAN {
            return Ok(true);
        }
        match self.job(name)? {
            Job::Number(_) => Ok(false),
            Job::Math(left, _, right) => Ok(self.involves_human(left, depth + 1)?
                || self.involves_human(right, depth + 1)?),
        }
    }

    /// Splits the job of `name` into the side with the human and the value of
    /// the other side. `true` means the human is on the left.
    fn human_side(&self, name: &str) -> Result<(&'a str, Op, i64, bool)> {
        let Job::Math(left, op, right) = self.job(name)? else {
            bail!("Monkey '{name}' yells a number but the human is below it");
        };

        match (self.involves_human(left, 0)?, self.involves_human(right, 0)?) {
            (true, false) => Ok((left, op, self.yell(right, None)?, true)),
            (false, true) => Ok((right, op, self.yell(left, None)?, false)),
            (true, true) => bail!("The human is on both sides of monkey '{name}'"),
            (false, false) => bail!("Monkey '{name}' does not depend on the human"),
        }
    }

    /// The number the human must yell for root's two operands to match.
    #[tracing::instrument(skip(self))]
    pub fn solve_for_human(&self) -> Result<i64> {
        let (mut name, _, mut target, _) = self.human_side(ROOT)?;

        while name != HUMAN {
            let (next, op, known, human_on_left) = self.human_side(name)?;
            target = match (op, human_on_left) {
                (Op::Add, _) => Op::Sub.apply(target, known)?,
                (Op::Mul, _) => exact_div(target, known)?,
                // h - k = t
                (Op::Sub, true) => Op::Add.apply(target, known)?,
                // k - h = t
                (Op::Sub, false) => Op::Sub.apply(known, target)?,
                // h / k = t
                (Op::Div, true) => Op::Mul.apply(target, known)?,
                // k / h = t
                (Op::Div, false) => exact_div(known, target)?,
            };
            name = next;
        }

        let Job::Math(left, _, right) = self.job(ROOT)? else {
            bail!("Monkey '{ROOT}' must compare two monkeys");
        };
        let (left, right) = (
            self.yell(left, Some(target))?,
            self.yell(right, Some(target))?,
        );
        ensure!(
            left == right,
            "Yelling {target} gives {left} and {right} at '{ROOT}'"
        );
        tracing::debug!(target, "human number checked");

        Ok(target)
    }
}

fn job(input: &str) -> IResult<&str, Job> {
    alt((
        map(complete::i64, Job::Number),
        map(
            tuple((alpha1, delimited(space1, one_of("+-*/"), space1), alpha1)),
            |(left, op, right)| {
                let op = match op {
                    '+' => Op::Add,
                    '-' => Op::Sub,
                    '*' => Op::Mul,
                    _ => Op::Div,
                };
                Job::Math(left, op, right)
            },
        ),
    ))(input)
}

fn monkeys(input: &str) -> IResult<&str, Vec<(&str, Job)>> {
    terminated(
        separated_list1(line_ending, separated_pair(alpha1, tag(": "), job)),
        multispace0,
    )(input)
}

#[tracing::instrument(skip(input))]
pub fn parse(input: &str) -> Result<Riddle<'_>> {
    let (_, lines) = all_consuming(monkeys)(input).map_err(|e| miette!("Parse failed: {e}"))?;

    let mut jobs = HashMap::with_capacity(lines.len());
    for (name, job) in lines {
        ensure!(
            jobs.insert(name, job).is_none(),
            "Monkey '{name}' is listed twice"
        );
    }
    Ok(Riddle { jobs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = include_str!("../example.txt");

    #[test]
    fn yells_numbers() -> Result<()> {
        let riddle = parse(INPUT)?;
        assert_eq!(2, riddle.yell("zczc", None)?);
        assert_eq!(30, riddle.yell("drzm", None)?);
        assert_eq!(150, riddle.yell("sjmn", Some(301))?);
        assert_eq!(150, riddle.yell("pppw", Some(301))?);
        Ok(())
    }

    #[test]
    fn unknown_and_duplicate_monkeys() -> Result<()> {
        assert!(parse("root: a + b\na: 1\na: 2").is_err());
        assert!(parse("root: a + b\na: 1")?.yell(ROOT, None).is_err());
        Ok(())
    }

    #[test]
    fn inexact_division() -> Result<()> {
        let riddle = parse("root: a / b\na: 7\nb: 2")?;
        assert!(riddle.yell(ROOT, None).is_err());
        Ok(())
    }

    #[test]
    fn overflow() -> Result<()> {
        let riddle = parse("root: a * b\na: 9223372036854775807\nb: 2")?;
        assert!(riddle.yell(ROOT, None).is_err());
        Ok(())
    }

    #[test]
    fn self_reference() -> Result<()> {
        let riddle = parse("root: a + b\na: root - b\nb: 1")?;
        assert!(riddle.yell(ROOT, None).is_err());
        Ok(())
    }

    #[test]
    fn human_on_both_sides() -> Result<()> {
        let riddle = parse("root: a + b\na: humn * c\nb: humn + c\nc: 3\nhumn: 1")?;
        assert!(riddle.solve_for_human().is_err());
        Ok(())
    }

    #[rstest]
    #[case("root: a + b\na: humn - c\nb: 10\nc: 4\nhumn: 0", 14)]
    #[case("root: a + b\na: c - humn\nb: 10\nc: 4\nhumn: 0", -6)]
    #[case("root: a + b\na: humn / c\nb: 10\nc: 4\nhumn: 0", 40)]
    #[case("root: a + b\na: c / humn\nb: 2\nc: 40\nhumn: 0", 20)]
    #[case("root: b + a\na: c * humn\nb: 12\nc: 4\nhumn: 0", 3)]
    fn inverts_every_operation(#[case] input: &str, #[case] expected: i64) -> Result<()> {
        assert_eq!(expected, parse(input)?.solve_for_human()?);
        Ok(())
    }
}
