use crate::rucksack::{item_set, shared_priority};
use itertools::Itertools;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lines = input.lines().collect::<Vec<_>>();
    ensure!(
        lines.len() % 3 == 0,
        "Invalid line count {}, elves come in groups of three",
        lines.len()
    );

    let mut total = 0;
    for (a, b, c) in lines.into_iter().tuples() {
        let sets = [item_set(a)?, item_set(b)?, item_set(c)?];
        total += shared_priority(&sets)
            .ok_or_else(|| miette!("Couldn't find the badge for group '{a}; {b}; {c}'"))?;
    }

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";
        assert_eq!("70", process(input)?);
        Ok(())
    }

    #[test]
    fn incomplete_group_is_an_error() {
        assert!(process("abc\nabd").is_err());
    }

    #[test]
    fn leftover_line_is_an_error() {
        // the first three lines are a valid group
        assert!(process("abc\nadd\naee\nabc").is_err());
    }
}
