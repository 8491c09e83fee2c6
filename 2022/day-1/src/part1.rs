use crate::inventory::elf_totals;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let most = elf_totals(input)?
        .into_iter()
        .max()
        .ok_or_else(|| miette!("No elves in input"))?;

    Ok(most.to_string())
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

10000";
        assert_eq!("24000", process(input)?);
        Ok(())
    }
}
