use miette::*;

/// `a-z` are 1 to 26, `A-Z` are 27 to 52.
pub fn priority(item: u8) -> Result<u32> {
    match item {
        b'a'..=b'z' => Ok(u32::from(item - b'a') + 1),
        b'A'..=b'Z' => Ok(u32::from(item - b'A') + 27),
        _ => Err(miette!("Invalid item '{}'", item as char)),
    }
}

/// Bit `n` is set when the compartment holds an item of priority `n`.
pub fn item_set(items: &str) -> Result<u64> {
    items
        .bytes()
        .try_fold(0u64, |set, item| Ok(set | 1 << priority(item)?))
}

/// Priority of the single item present in every set.
pub fn shared_priority(sets: &[u64]) -> Option<u32> {
    let common = sets.iter().fold(u64::MAX, |acc, set| acc & set);
    (common != 0 && common != u64::MAX).then(|| common.trailing_zeros())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b'a', 1)]
    #[case(b'p', 16)]
    #[case(b'z', 26)]
    #[case(b'A', 27)]
    #[case(b'L', 38)]
    #[case(b'Z', 52)]
    fn priorities(#[case] item: u8, #[case] expected: u32) -> Result<()> {
        assert_eq!(expected, priority(item)?);
        Ok(())
    }

    #[test]
    fn invalid_item() {
        assert!(priority(b'!').is_err());
    }

    #[test]
    fn finds_shared_item() -> Result<()> {
        let sets = [item_set("vJrwpWtwJgWr")?, item_set("hcsFMMfFFhFp")?];
        assert_eq!(Some(16), shared_priority(&sets));
        Ok(())
    }
}
