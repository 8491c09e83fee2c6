use crate::signal::marker_end;
use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(marker_end(input, 14)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", "19")]
    #[case("bvwbjplbgvbhsrlpgdmjqwftvncz", "23")]
    #[case("nppdvjthqldpwncqszvftbrmjlhg", "23")]
    #[case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "29")]
    #[case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "26")]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
