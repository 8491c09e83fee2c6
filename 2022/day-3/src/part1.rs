use crate::rucksack::{item_set, shared_priority};
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut total = 0;

    for line in input.lines() {
        ensure!(
            line.len() % 2 == 0,
            "Invalid line length {} for line '{}'",
            line.len(),
            line
        );

        let (left, right) = line.split_at(line.len() / 2);
        let sets = [item_set(left)?, item_set(right)?];

        total += shared_priority(&sets)
            .ok_or_else(|| miette!("Couldn't find the misplaced item in line '{}'", line))?;
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
        assert_eq!("157", process(input)?);
        Ok(())
    }

    #[test]
    fn odd_line_is_an_error() {
        assert!(process("abc").is_err());
    }
}
