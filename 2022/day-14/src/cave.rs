use aoc_common::{Palette, TerminalColor};
use chumsky::prelude::*;
use glam::IVec2;
use miette::*;
use std::collections::HashSet;

pub const SOURCE: IVec2 = IVec2::new(500, 0);

// down, then down-left, then down-right
const FALLS: [IVec2; 3] = [IVec2::new(0, 1), IVec2::new(-1, 1), IVec2::new(1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grain {
    Rested(IVec2),
    /// Fell past the lowest rock; there is nothing below to stop it.
    Abyss,
    /// Sand piled up to the source.
    Blocked,
}

#[derive(Debug, Clone)]
pub struct Cave {
    rock: HashSet<IVec2>,
    sand: HashSet<IVec2>,
    lowest_rock: i32,
    floor: Option<i32>,
}

impl Cave {
    pub fn new(paths: &[Vec<IVec2>]) -> Result<Self> {
        let mut rock = HashSet::new();
        for path in paths {
            ensure!(!path.is_empty(), "Empty rock path");
            rock.insert(path[0]);
            for (&from, &to) in path.iter().zip(path.iter().skip(1)) {
                let delta = to - from;
                ensure!(
                    delta.x == 0 || delta.y == 0,
                    "Diagonal rock segment from {from} to {to}"
                );
                let step = delta.signum();
                let mut at = from;
                while at != to {
                    at += step;
                    rock.insert(at);
                }
            }
        }

        let lowest_rock = rock
            .iter()
            .map(|position| position.y)
            .max()
            .ok_or_else(|| miette!("The scan has no rock"))?;
        ensure!(
            !rock.contains(&SOURCE),
            "Rock covers the sand source at {}",
            SOURCE
        );

        Ok(Self {
            rock,
            sand: HashSet::new(),
            lowest_rock,
            floor: None,
        })
    }

    /// Adds the endless floor two below the lowest rock.
    pub fn with_floor(mut self) -> Self {
        self.floor = Some(self.lowest_rock + 2);
        self
    }

    fn is_blocked(&self, position: IVec2) -> bool {
        self.floor == Some(position.y) || self.rock.contains(&position) || self.sand.contains(&position)
    }

    pub fn drop_grain(&mut self) -> Grain {
        if self.is_blocked(SOURCE) {
            return Grain::Blocked;
        }

        let mut grain = SOURCE;
        loop {
            if self.floor.is_none() && grain.y > self.lowest_rock {
                return Grain::Abyss;
            }
            match FALLS
                .iter()
                .map(|&fall| grain + fall)
                .find(|&next| !self.is_blocked(next))
            {
                Some(next) => grain = next,
                None => {
                    self.sand.insert(grain);
                    return Grain::Rested(grain);
                }
            }
        }
    }

    /// Drops grains until one no longer comes to rest; returns the number of
    /// grains at rest.
    pub fn fill(&mut self) -> usize {
        while let Grain::Rested(_) = self.drop_grain() {}
        tracing::debug!(sand = self.sand.len(), "sand stopped");
        self.sand.len()
    }

    pub fn resting(&self) -> usize {
        self.sand.len()
    }

    /// `#` rock, `o` sand, `+` the source, `.` air.
    pub fn render(&self, palette: &Palette) -> String {
        let (min, mut max) = self
            .rock
            .iter()
            .chain(&self.sand)
            .fold((SOURCE, SOURCE), |(min, max), &p| (min.min(p), max.max(p)));
        if let Some(floor) = self.floor {
            max.y = floor;
        }

        let mut out = String::new();
        for y in min.y..=max.y {
            let mut last = None;
            for x in min.x..=max.x {
                let position = IVec2::new(x, y);
                let cell = if self.is_blocked(position) && !self.sand.contains(&position) {
                    '#'
                } else if self.sand.contains(&position) {
                    'o'
                } else if position == SOURCE {
                    '+'
                } else {
                    '.'
                };

                if last != Some(cell) {
                    last = Some(cell);
                    out.push_str(&match cell {
                        '#' => palette.foreground(TerminalColor::Gray),
                        'o' => palette.foreground(TerminalColor::BrightYellow),
                        '+' => palette.foreground(TerminalColor::BrightRed),
                        _ => palette.foreground(TerminalColor::DarkGray),
                    });
                }
                out.push(cell);
            }
            out.push_str(&palette.reset());
            out.push('\n');
        }
        out
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

pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<IVec2>>, extra::Err<Rich<'a, char>>> {
    let coordinate = number::<i32>();
    let point = coordinate.clone()
        .then_ignore(just(','))
        .then(coordinate)
        .map(|(x, y)| IVec2::new(x, y));

    point
        .separated_by(just(" -> "))
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument(skip(input))]
pub fn parse(input: &str) -> Result<Cave> {
    let paths = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    Cave::new(&paths)
}

/// The cave once sand has settled, with and without the floor.
#[tracing::instrument(skip(input))]
pub fn visualize(input: &str, palette: &Palette) -> Result<String> {
    let cave = parse(input)?;

    let mut open = cave.clone();
    open.fill();
    let mut floored = cave.with_floor();
    floored.fill();

    Ok(format!(
        "{}\n{}",
        open.render(palette),
        floored.render(palette)
    ))
}
