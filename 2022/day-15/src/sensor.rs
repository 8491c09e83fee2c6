use glam::I64Vec2;
use itertools::Itertools;
use miette::*;
use nom::{
    bytes::complete::tag,
    character::complete::{self, line_ending, multispace0},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{preceded, separated_pair, terminated},
    IResult,
};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    pub position: I64Vec2,
    pub beacon: I64Vec2,
}

fn manhattan(a: I64Vec2, b: I64Vec2) -> i64 {
    let delta = (a - b).abs();
    delta.x + delta.y
}

impl Sensor {
    pub fn radius(&self) -> i64 {
        manhattan(self.position, self.beacon)
    }

    /// Cells of `row` within reach of this sensor.
    pub fn coverage(&self, row: i64) -> Option<RangeInclusive<i64>> {
        let reach = self.radius() - (self.position.y - row).abs();
        (reach >= 0).then(|| self.position.x - reach..=self.position.x + reach)
    }
}

/// Sorted, non-overlapping ranges of `row` covered by any sensor. Adjacent
/// ranges are joined.
pub fn coverage(sensors: &[Sensor], row: i64) -> Vec<RangeInclusive<i64>> {
    let ranges = sensors
        .iter()
        .filter_map(|sensor| sensor.coverage(row))
        .sorted_by_key(|range| *range.start());

    let mut merged: Vec<RangeInclusive<i64>> = Vec::new();
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= *last.end() + 1 => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Cells of `row` that cannot hold a beacon.
pub fn excluded(sensors: &[Sensor], row: i64) -> i64 {
    let ranges = coverage(sensors, row);
    let covered: i64 = ranges.iter().map(|r| r.end() - r.start() + 1).sum();
    let beacons = sensors
        .iter()
        .map(|sensor| sensor.beacon)
        .filter(|beacon| beacon.y == row && ranges.iter().any(|r| r.contains(&beacon.x)))
        .unique()
        .count() as i64;
    covered - beacons
}

/// The first cell of `row` in `0..=bound` that no sensor covers.
pub fn gap(sensors: &[Sensor], row: i64, bound: i64) -> Option<i64> {
    let mut x = 0;
    for range in coverage(sensors, row) {
        if *range.start() > x {
            break;
        }
        x = x.max(range.end() + 1);
    }
    (x <= bound).then_some(x)
}

fn point(input: &str) -> IResult<&str, I64Vec2> {
    map(
        separated_pair(
            preceded(tag("x="), complete::i64),
            tag(", "),
            preceded(tag("y="), complete::i64),
        ),
        |(x, y)| I64Vec2::new(x, y),
    )(input)
}

fn sensor(input: &str) -> IResult<&str, Sensor> {
    map(
        separated_pair(
            preceded(tag("Sensor at "), point),
            tag(": "),
            preceded(tag("closest beacon is at "), point),
        ),
        |(position, beacon)| Sensor { position, beacon },
    )(input)
}

#[tracing::instrument(skip(input))]
pub fn parse(input: &str) -> Result<Vec<Sensor>> {
    let (_, sensors) = all_consuming(terminated(
        separated_list1(line_ending, sensor),
        multispace0,
    ))(input)
    .map_err(|e| miette!("Parse failed: {e}"))?;
    Ok(sensors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_coordinates() -> Result<()> {
        let sensors = parse("Sensor at x=2, y=18: closest beacon is at x=-2, y=15")?;
        assert_eq!(I64Vec2::new(-2, 15), sensors[0].beacon);
        assert_eq!(7, sensors[0].radius());
        Ok(())
    }

    #[test]
    fn sensor_coverage() {
        let sensor = Sensor {
            position: I64Vec2::new(8, 7),
            beacon: I64Vec2::new(2, 10),
        };
        assert_eq!(Some(8..=8), sensor.coverage(16));
        assert_eq!(Some(-1..=17), sensor.coverage(7));
        assert_eq!(None, sensor.coverage(17));
    }

    #[test]
    fn merges_adjacent_ranges() {
        let sensors = [
            Sensor {
                position: I64Vec2::new(0, 0),
                beacon: I64Vec2::new(2, 0),
            },
            Sensor {
                position: I64Vec2::new(5, 0),
                beacon: I64Vec2::new(5, 2),
            },
            Sensor {
                position: I64Vec2::new(20, 0),
                beacon: I64Vec2::new(20, 1),
            },
        ];
        assert_eq!(vec![-2..=7, 19..=21], coverage(&sensors, 0));
        assert_eq!(Some(8), gap(&sensors, 0, 30));
        assert_eq!(None, gap(&sensors, 0, 7));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("Sensor at x=2 y=18").is_err());
    }
}
