use chumsky::prelude::*;
use std::{cmp::Ordering, fmt, slice};

/// A distress signal packet: an integer or a list of packets.
#[derive(Debug, Clone)]
pub enum Packet {
    Integer(u32),
    List(Vec<Packet>),
}

impl Packet {
    /// `[[n]]`
    pub fn divider(n: u32) -> Self {
        Packet::List(vec![Packet::List(vec![Packet::Integer(n)])])
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Integer(a), Packet::Integer(b)) => a.cmp(b),
            // slices compare element by element, then by length
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Integer(_), Packet::List(b)) => slice::from_ref(self).cmp(b),
            (Packet::List(a), Packet::Integer(_)) => a.as_slice().cmp(slice::from_ref(other)),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// `2` and `[2]` are equal packets.
impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Integer(n) => write!(f, "{n}"),
            Packet::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
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

pub fn packet<'a>() -> impl Parser<'a, &'a str, Packet, extra::Err<Rich<'a, char>>> + Clone {
    recursive(|packet| {
        let integer = number::<u32>().map(Packet::Integer);
        let list = packet
            .separated_by(just(','))
            .collect::<Vec<_>>()
            .delimited_by(just('['), just(']'))
            .map(Packet::List);

        integer.or(list)
    })
}

/// Pairs of packets separated by blank lines.
pub fn pairs<'a>() -> impl Parser<'a, &'a str, Vec<(Packet, Packet)>, extra::Err<Rich<'a, char>>> {
    packet()
        .then_ignore(text::newline())
        .then(packet())
        .separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect()
}

/// Every packet, ignoring blank lines.
pub fn packets<'a>() -> impl Parser<'a, &'a str, Vec<Packet>, extra::Err<Rich<'a, char>>> {
    packet()
        .separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(input: &str) -> Packet {
        packet().parse(input).into_result().unwrap()
    }

    #[rstest]
    #[case("[1,1,3,1,1]", "[1,1,5,1,1]", Ordering::Less)]
    #[case("[[1],[2,3,4]]", "[[1],4]", Ordering::Less)]
    #[case("[9]", "[[8,7,6]]", Ordering::Greater)]
    #[case("[[4,4],4,4]", "[[4,4],4,4,4]", Ordering::Less)]
    #[case("[7,7,7,7]", "[7,7,7]", Ordering::Greater)]
    #[case("[]", "[3]", Ordering::Less)]
    #[case("[[[]]]", "[[]]", Ordering::Greater)]
    #[case("[1,[2,[3,[4,[5,6,7]]]],8,9]", "[1,[2,[3,[4,[5,6,0]]]],8,9]", Ordering::Greater)]
    #[case("[[2]]", "[2]", Ordering::Equal)]
    fn ordering(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(expected, parse(left).cmp(&parse(right)));
    }

    #[test]
    fn displays_as_written() {
        let text = "[1,[2,[3,[4,[5,6,7]]]],8,10]";
        assert_eq!(text, parse(text).to_string());
        assert_eq!("[[6]]", Packet::divider(6).to_string());
    }

    #[test]
    fn rejects_unbalanced() {
        assert!(packet().parse("[1,[2]").into_result().is_err());
    }

    #[test]
    fn reads_pairs() {
        let pairs = pairs().parse(include_str!("../example.txt")).into_result().unwrap();
        assert_eq!(8, pairs.len());
        assert_eq!(parse("[[1],4]"), pairs[1].1);
    }

    #[test]
    fn rejects_out_of_range_integer() {
        assert!(packet().parse("[99999999999]").into_result().is_err());
    }
}
