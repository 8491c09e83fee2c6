use crate::supplies::{parse, Crane};
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (mut supplies, steps) = parse(input)?;

    for step in &steps {
        supplies.rearrange(step, Crane::CrateMover9001)?;
    }

    Ok(supplies.top_crates())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "    [D]    
[N] [C]    
[Z] [M] [P]
 1   2   3 

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2";
        assert_eq!("MCD", process(input)?);
        Ok(())
    }
}
