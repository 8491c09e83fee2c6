use chumsky::prelude::*;
use std::ops::RangeInclusive;

/// Section range cleaned by one elf. Bounds are stored low to high no
/// matter how the input wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(RangeInclusive<u32>);

impl Assignment {
    pub fn new(a: u32, b: u32) -> Self {
        Self(a.min(b)..=a.max(b))
    }

    pub fn contains(&self, other: &Assignment) -> bool {
        self.0.start() <= other.0.start() && other.0.end() <= self.0.end()
    }

    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.0.start() <= other.0.end() && other.0.start() <= self.0.end()
    }
}

/// A decimal number; values out of range for `T` are parse errors.
fn number<'a, T>() -> impl Parser<'a, &'a str, T, extra::Err<Rich<'a, char>>> + Clone
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text::int(10).try_map(|digits: &str, span| digits.parse().map_err(|e| Rich::custom(span, e)))
}

pub fn parser<'a>(
) -> impl Parser<'a, &'a str, Vec<(Assignment, Assignment)>, extra::Err<Rich<'a, char>>> {
    let section = number::<u32>();
    let assignment = section.clone()
        .then_ignore(just('-'))
        .then(section)
        .map(|(a, b)| Assignment::new(a, b));

    assignment.clone()
        .then_ignore(just(','))
        .then(assignment)
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_bounds() {
        assert_eq!(Assignment::new(2, 8), Assignment::new(8, 2));
    }

    #[test]
    fn containment_and_overlap() {
        let outer = Assignment::new(2, 8);
        let inner = Assignment::new(3, 7);
        let touching = Assignment::new(8, 9);
        let apart = Assignment::new(10, 12);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.overlaps(&touching));
        assert!(!outer.overlaps(&apart));
    }

    #[test]
    fn rejects_out_of_range_sections() {
        assert!(parser().parse("1-99999999999,2-3").into_result().is_err());
    }
}
