use aoc_common::{Palette, TerminalColor};
use chumsky::prelude::*;
use glam::IVec2;
use miette::*;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step; rows grow downward, so `Up` decreases y.
    fn delta(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub direction: Direction,
    pub steps: u32,
}

/// A decimal number; values out of range for `T` are parse errors.
fn number<'a, T>() -> impl Parser<'a, &'a str, T, extra::Err<Rich<'a, char>>> + Clone
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text::int(10).try_map(|digits: &str, span| digits.parse().map_err(|e| Rich::custom(span, e)))
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Motion>, extra::Err<Rich<'a, char>>> {
    let direction = choice((
        just('L').to(Direction::Left),
        just('R').to(Direction::Right),
        just('U').to(Direction::Up),
        just('D').to(Direction::Down),
    ));

    direction
        .then_ignore(just(' '))
        .then(number::<u32>())
        .map(|(direction, steps)| Motion { direction, steps })
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// A chain of knots; knot 0 is the head.
#[derive(Debug, Clone)]
pub struct Rope {
    knots: Vec<IVec2>,
    visited: HashSet<IVec2>,
}

impl Rope {
    pub fn new(knots: usize) -> Result<Self> {
        ensure!(knots >= 2, "Invalid number of knots {knots}, need at least 2");
        Ok(Self {
            knots: vec![IVec2::ZERO; knots],
            visited: HashSet::from([IVec2::ZERO]),
        })
    }

    pub fn apply(&mut self, motion: Motion) {
        for _ in 0..motion.steps {
            self.step(motion.direction);
        }
    }

    fn step(&mut self, direction: Direction) {
        self.knots[0] += direction.delta();

        for i in 1..self.knots.len() {
            let gap = self.knots[i - 1] - self.knots[i];
            if gap.abs().max_element() <= 1 {
                // touching, so nothing further down the rope moves either
                break;
            }
            self.knots[i] += gap.signum();
        }

        if let Some(&tail) = self.knots.last() {
            self.visited.insert(tail);
        }
    }

    /// Distinct positions the tail has been in, the start included.
    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    /// The positions the tail visited (`#`) with the start marked `s`.
    pub fn render_trail(&self, palette: &Palette) -> String {
        let mut field = Field::around(self.visited.iter().copied());
        for &position in &self.visited {
            field.mark(position, b'#');
        }
        field.mark(IVec2::ZERO, b's');
        field.render(palette)
    }

    /// The trail with every knot drawn over it: `H` for the head, then the
    /// knot numbers.
    pub fn render(&self, palette: &Palette) -> String {
        let mut field = Field::around(self.visited.iter().chain(&self.knots).copied());
        for &position in &self.visited {
            field.mark(position, b'#');
        }
        field.mark(IVec2::ZERO, b's');
        for (index, &knot) in self.knots.iter().enumerate().skip(1).rev() {
            field.mark(knot, b'0' + (index % 10) as u8);
        }
        field.mark(self.knots[0], b'H');
        field.render(palette)
    }
}

/// Character canvas covering a set of positions.
struct Field {
    origin: IVec2,
    width: usize,
    rows: Vec<Vec<u8>>,
}

impl Field {
    fn around(positions: impl Iterator<Item = IVec2>) -> Self {
        let (min, max) = positions.fold((IVec2::ZERO, IVec2::ZERO), |(min, max), p| {
            (min.min(p), max.max(p))
        });
        let size = (max - min + IVec2::ONE).as_uvec2();
        let width = size.x as usize;
        Self {
            origin: min,
            width,
            rows: vec![vec![b'.'; width]; size.y as usize],
        }
    }

    fn mark(&mut self, position: IVec2, cell: u8) {
        let offset = (position - self.origin).as_uvec2();
        self.rows[offset.y as usize][offset.x as usize] = cell;
    }

    fn render(&self, palette: &Palette) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.width + 1));
        for row in &self.rows {
            let mut last = None;
            for &cell in row {
                if last != Some(cell) {
                    last = Some(cell);
                    out.push_str(&match cell {
                        b'.' => palette.foreground(TerminalColor::Gray),
                        b'#' => palette.foreground(TerminalColor::BrightGreen),
                        b's' => palette.color(TerminalColor::White, TerminalColor::BrightRed),
                        _ => palette.foreground(TerminalColor::BrightYellow),
                    });
                }
                out.push(cell as char);
            }
            out.push_str(&palette.reset());
            out.push('\n');
        }
        out
    }
}

/// Runs the motions on a rope of `knots` knots.
pub fn simulate(motions: &[Motion], knots: usize) -> Result<Rope> {
    let mut rope = Rope::new(knots)?;
    for &motion in motions {
        rope.apply(motion);
    }
    Ok(rope)
}

/// A rope of `knots` knots after every motion, drawn over the tail's trail.
#[tracing::instrument(skip(input))]
pub fn visualize(input: &str, knots: usize, palette: &Palette) -> Result<String> {
    let motions = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let rope = simulate(&motions, knots)?;
    Ok(format!("{}\n{}", rope.render(palette), rope.render_trail(palette)))
}
