use aoc_common::{Palette, TerminalColor};
use indicatif::ProgressBar;
use miette::*;
use std::collections::HashMap;

pub const WIDTH: usize = 7;

const LEFT_WALL: u8 = 1 << (WIDTH - 1);
const RIGHT_WALL: u8 = 1;

/// Rock shapes, bottom row first, already placed two units from the left
/// wall. Bit 6 is the leftmost column.
const ROCKS: [&[u8]; 5] = [
    &[0b0011110],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0000100, 0b0000100],
    &[0b0010000, 0b0010000, 0b0010000, 0b0010000],
    &[0b0011000, 0b0011000],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jet {
    Left,
    Right,
}

pub fn parse(input: &str) -> Result<Vec<Jet>> {
    let jets = input
        .trim()
        .chars()
        .map(|c| match c {
            '<' => Ok(Jet::Left),
            '>' => Ok(Jet::Right),
            other => Err(miette!("Invalid jet '{}'", other)),
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(!jets.is_empty(), "Empty jet pattern");
    Ok(jets)
}

/// What makes two moments of the simulation repeat: the next rock, the
/// next jet and how deep each column's top rock sits below the tower top.
type State = (usize, usize, [usize; WIDTH]);

#[derive(Debug, Clone)]
pub struct Chamber {
    jets: Vec<Jet>,
    next_jet: usize,
    next_rock: usize,
    // bottom row first; the top row is never empty
    rows: Vec<u8>,
}

impl Chamber {
    pub fn new(jets: Vec<Jet>) -> Self {
        Self {
            jets,
            next_jet: 0,
            next_rock: 0,
            rows: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    fn collides(&self, rock: &[u8], bottom: usize) -> bool {
        rock.iter()
            .enumerate()
            .any(|(i, &row)| self.rows.get(bottom + i).is_some_and(|&filled| filled & row != 0))
    }

    fn push(&self, rock: &mut Vec<u8>, bottom: usize, jet: Jet) {
        let shifted: Vec<u8> = match jet {
            Jet::Left if rock.iter().all(|&row| row & LEFT_WALL == 0) => {
                rock.iter().map(|&row| row << 1).collect()
            }
            Jet::Right if rock.iter().all(|&row| row & RIGHT_WALL == 0) => {
                rock.iter().map(|&row| row >> 1).collect()
            }
            _ => return,
        };
        if !self.collides(&shifted, bottom) {
            *rock = shifted;
        }
    }

    /// Drops the next rock until it comes to rest.
    pub fn drop_rock(&mut self) {
        let mut rock = ROCKS[self.next_rock].to_vec();
        self.next_rock = (self.next_rock + 1) % ROCKS.len();

        let mut bottom = self.height() + 3;
        loop {
            let jet = self.jets[self.next_jet];
            self.next_jet = (self.next_jet + 1) % self.jets.len();
            self.push(&mut rock, bottom, jet);

            if bottom == 0 || self.collides(&rock, bottom - 1) {
                break;
            }
            bottom -= 1;
        }

        for (i, row) in rock.into_iter().enumerate() {
            if self.rows.len() <= bottom + i {
                self.rows.resize(bottom + i + 1, 0);
            }
            self.rows[bottom + i] |= row;
        }
    }

    /// Distance from the tower top down to the highest rock in each column.
    fn profile(&self) -> [usize; WIDTH] {
        std::array::from_fn(|column| {
            let bit = LEFT_WALL >> column;
            self.rows
                .iter()
                .rev()
                .position(|&row| row & bit != 0)
                .unwrap_or(self.rows.len())
        })
    }

    fn state(&self) -> State {
        (self.next_rock, self.next_jet, self.profile())
    }

    /// Tower height after `rocks` more rocks have fallen. Once the state
    /// repeats, whole periods are skipped.
    pub fn height_after(&mut self, rocks: u64, progress: &ProgressBar) -> u64 {
        let mut seen: HashMap<State, (u64, usize)> = HashMap::new();
        let mut skipped_height = 0;
        let mut dropped = 0;

        while dropped < rocks {
            self.drop_rock();
            dropped += 1;
            if dropped % 1024 == 0 {
                progress.set_position(dropped);
            }

            if skipped_height > 0 {
                continue;
            }
            if let Some((before, height_before)) = seen.insert(self.state(), (dropped, self.height())) {
                let period = dropped - before;
                let growth = (self.height() - height_before) as u64;
                let periods = (rocks - dropped) / period;
                tracing::info!(period, growth, periods, "cycle found after {} rocks", dropped);

                dropped += periods * period;
                skipped_height = periods * growth;
                progress.set_position(dropped);
            }
        }

        progress.set_position(dropped);
        self.height() as u64 + skipped_height
    }

    /// The top `rows` rows of the tower, highest first, with the floor once
    /// the whole tower fits.
    pub fn render_top(&self, rows: usize, palette: &Palette) -> String {
        let wall = palette.paint(TerminalColor::DarkGray, "|");
        let rock = palette.paint(TerminalColor::BrightYellow, "#");

        let mut out = String::new();
        for &row in self.rows.iter().rev().take(rows) {
            out.push_str(&wall);
            for column in 0..WIDTH {
                out.push_str(if row & (LEFT_WALL >> column) != 0 { rock.as_str() } else { "." });
            }
            out.push_str(&wall);
            out.push('\n');
        }
        if rows >= self.height() {
            out.push_str(&palette.paint(TerminalColor::DarkGray, format!("+{}+", "-".repeat(WIDTH))));
            out.push('\n');
        }
        out
    }
}

/// Rows shown by [`visualize`].
const VISIBLE_ROWS: usize = 30;

/// The top of the tower after `rocks` rocks have come to rest.
#[tracing::instrument(skip(input))]
pub fn visualize(input: &str, rocks: u64, palette: &Palette) -> Result<String> {
    let mut chamber = Chamber::new(parse(input)?);
    for _ in 0..rocks {
        chamber.drop_rock();
    }
    Ok(chamber.render_top(VISIBLE_ROWS, palette))
}
