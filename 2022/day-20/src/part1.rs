use crate::mixing::{grove_coordinates, mix, parse};
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let numbers = parse(input)?;
    let mixed = mix(&numbers, 1);
    Ok(grove_coordinates(&mixed)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "1
2
-3
3
-2
0
4";
        assert_eq!("3", process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_words() {
        assert!(process("1\ntwo\n0").is_err());
    }

    #[test]
    fn extreme_numbers() -> Result<()> {
        // i64::MAX + 1 does not fit the sum
        assert!(process("0\n9223372036854775807\n1").is_err());
        assert_eq!(
            i64::MIN.to_string(),
            process("0\n-9223372036854775807\n-1")?
        );
        Ok(())
    }
}
