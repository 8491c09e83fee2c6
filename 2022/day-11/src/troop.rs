use itertools::Itertools;
use miette::*;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{self, multispace0, multispace1, one_of, space0, space1},
    combinator::{all_consuming, map},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Old,
    Value(u64),
}

impl Operand {
    fn resolve(self, old: u64) -> u64 {
        match self {
            Operand::Old => old,
            Operand::Value(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    pub fn apply(self, old: u64) -> Result<u64> {
        let new = match self {
            Operation::Add(operand) => old.checked_add(operand.resolve(old)),
            Operation::Mul(operand) => old.checked_mul(operand.resolve(old)),
        };
        new.ok_or_else(|| miette!("Worry level overflow applying {:?} to {}", self, old))
    }
}

/// How worry levels are kept in check after each inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relief {
    /// The item was not damaged: divide by three.
    Calm,
    /// No relief. Levels are reduced modulo the least common multiple of the
    /// divisors, which leaves every test result unchanged.
    Worried,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monkey {
    pub id: usize,
    pub items: VecDeque<u64>,
    pub operation: Operation,
    pub divisor: u64,
    pub if_true: usize,
    pub if_false: usize,
    pub inspections: u64,
}

impl Monkey {
    fn target(&self, worry: u64) -> usize {
        if worry % self.divisor == 0 {
            self.if_true
        } else {
            self.if_false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Troop {
    monkeys: Vec<Monkey>,
    modulus: u64,
}

impl Troop {
    pub fn new(monkeys: Vec<Monkey>) -> Result<Self> {
        ensure!(
            monkeys.len() >= 2,
            "Need at least 2 monkeys, found {}",
            monkeys.len()
        );

        for (index, monkey) in monkeys.iter().enumerate() {
            ensure!(
                monkey.id == index,
                "Monkey {} listed in position {}",
                monkey.id,
                index
            );
            ensure!(monkey.divisor > 0, "Monkey {} tests divisibility by 0", index);
            for target in [monkey.if_true, monkey.if_false] {
                ensure!(
                    target < monkeys.len(),
                    "Monkey {} throws to unknown monkey {}",
                    index,
                    target
                );
                ensure!(target != index, "Monkey {} throws to itself", index);
            }
        }

        let modulus = monkeys
            .iter()
            .map(|monkey| monkey.divisor)
            .fold(1, |acc, divisor| acc / gcd(acc, divisor) * divisor);

        Ok(Self { monkeys, modulus })
    }

    pub fn monkeys(&self) -> &[Monkey] {
        &self.monkeys
    }

    pub fn round(&mut self, relief: Relief) -> Result<()> {
        for index in 0..self.monkeys.len() {
            let items = std::mem::take(&mut self.monkeys[index].items);
            self.monkeys[index].inspections += items.len() as u64;

            for item in items {
                let monkey = &self.monkeys[index];
                let worry = monkey.operation.apply(item)?;
                let worry = match relief {
                    Relief::Calm => worry / 3,
                    Relief::Worried => worry % self.modulus,
                };
                let target = monkey.target(worry);
                self.monkeys[target].items.push_back(worry);
            }
        }
        Ok(())
    }

    pub fn rounds(&mut self, rounds: usize, relief: Relief) -> Result<()> {
        for _ in 0..rounds {
            self.round(relief)?;
        }
        tracing::info!(
            inspections = ?self.monkeys.iter().map(|m| m.inspections).collect::<Vec<_>>(),
            "after {} rounds",
            rounds
        );
        Ok(())
    }

    /// Product of the two highest inspection counts.
    pub fn monkey_business(&self) -> u64 {
        self.monkeys
            .iter()
            .map(|monkey| monkey.inspections)
            .k_largest(2)
            .product()
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn operand(input: &str) -> IResult<&str, Operand> {
    alt((
        map(tag("old"), |_| Operand::Old),
        map(complete::u64, Operand::Value),
    ))(input)
}

fn operation(input: &str) -> IResult<&str, Operation> {
    let (input, (operator, operand)) = preceded(
        tag("new = old "),
        separated_pair(one_of("+*"), space1, operand),
    )(input)?;

    let operation = match operator {
        '+' => Operation::Add(operand),
        _ => Operation::Mul(operand),
    };
    Ok((input, operation))
}

/// `label` at the start of an indented line.
fn field<'a>(label: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(multispace1, terminated(tag(label), space0))
}

fn monkey(input: &str) -> IResult<&str, Monkey> {
    let (input, id) = delimited(tag("Monkey "), complete::u32, tag(":"))(input)?;
    let (input, items) = preceded(
        field("Starting items:"),
        separated_list0(tuple((tag(","), space0)), complete::u64),
    )(input)?;
    let (input, operation) = preceded(field("Operation:"), operation)(input)?;
    let (input, divisor) = preceded(field("Test: divisible by"), complete::u64)(input)?;
    let (input, if_true) = preceded(field("If true: throw to monkey"), complete::u32)(input)?;
    let (input, if_false) = preceded(field("If false: throw to monkey"), complete::u32)(input)?;

    Ok((
        input,
        Monkey {
            id: id as usize,
            items: items.into(),
            operation,
            divisor,
            if_true: if_true as usize,
            if_false: if_false as usize,
            inspections: 0,
        },
    ))
}

#[tracing::instrument(skip(input))]
pub fn parse(input: &str) -> Result<Troop> {
    let (_, monkeys) = all_consuming(delimited(
        multispace0,
        separated_list1(multispace1, monkey),
        multispace0,
    ))(input)
    .map_err(|e| miette!("Parse failed: {e}"))?;

    Troop::new(monkeys)
}
