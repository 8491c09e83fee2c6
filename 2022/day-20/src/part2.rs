use crate::mixing::{decrypt, grove_coordinates, mix, parse};
use miette::*;

const DECRYPTION_KEY: i64 = 811_589_153;
const ROUNDS: usize = 10;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let numbers = decrypt(&parse(input)?, DECRYPTION_KEY)?;
    let mixed = mix(&numbers, ROUNDS);
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
        assert_eq!("1623178306", process(input)?);
        Ok(())
    }
}
