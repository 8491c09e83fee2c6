use crate::inventory::elf_totals;
use itertools::Itertools;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let top_three: u64 = elf_totals(input)?.into_iter().k_largest(3).sum();

    Ok(top_three.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";
        assert_eq!("45000", process(input)?);
        Ok(())
    }

    #[test]
    fn fewer_than_three_elves() -> Result<()> {
        assert_eq!("300", process("100\n\n200")?);
        Ok(())
    }
}
