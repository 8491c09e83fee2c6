use crate::packet::{packets, Packet};
use chumsky::Parser;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut packets = packets()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let dividers = [Packet::divider(2), Packet::divider(6)];
    // appended last so a stable sort keeps them after any equal packet
    packets.extend(dividers.iter().cloned());
    packets.sort();

    let key: usize = dividers
        .iter()
        .map(|divider| {
            packets
                .iter()
                .rposition(|packet| packet == divider)
                .map(|index| index + 1)
                .ok_or_else(|| miette!("Divider {divider} lost while sorting"))
        })
        .product::<Result<usize>>()?;

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("140", process(input)?);
        Ok(())
    }

    #[test]
    fn packets_equal_to_dividers() -> Result<()> {
        // [2] sorts level with [[2]]; the divider still lands after it
        assert_eq!("15", process("[2]\n[3]\n\n[1]\n[7]\n")?);
        Ok(())
    }
}
