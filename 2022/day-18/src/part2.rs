use crate::droplet::Droplet;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let droplet = Droplet::parse(input)?;
    Ok(droplet.exterior_surface_area().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = include_str!("../example.txt");
        assert_eq!("58", process(input)?);
        Ok(())
    }
}
