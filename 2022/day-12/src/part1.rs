use crate::heightmap::parse;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map = parse(input)?;
    let path = map
        .shortest_path(map.start)
        .ok_or_else(|| miette!("The goal cannot be reached from the start"))?;

    Ok((path.len() - 1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";
        assert_eq!("31", process(input)?);
        Ok(())
    }
}
