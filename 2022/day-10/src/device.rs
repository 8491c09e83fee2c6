use aoc_common::{Palette, TerminalColor};
use chumsky::prelude::*;
use miette::*;

pub const SCREEN_WIDTH: usize = 40;
pub const SCREEN_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    Addx(i32),
}

impl Instruction {
    fn cycles(self) -> usize {
        match self {
            Instruction::Noop => 1,
            Instruction::Addx(_) => 2,
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

pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Instruction>, extra::Err<Rich<'a, char>>> {
    let value = just('-')
        .or_not()
        .then(number::<i32>())
        .map(|(sign, value)| if sign.is_some() { -value } else { value });

    choice((
        just("noop").to(Instruction::Noop),
        just("addx ").ignore_then(value).map(Instruction::Addx),
    ))
    .separated_by(text::newline())
    .allow_trailing()
    .collect()
}

pub fn program(input: &str) -> Result<Vec<Instruction>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// Value of the X register *during* every cycle the program runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace(Vec<i32>);

impl Trace {
    pub fn run(program: &[Instruction]) -> Result<Self> {
        let mut x: i32 = 1;
        let mut during = Vec::with_capacity(program.len() * 2);

        for &instruction in program {
            during.extend(std::iter::repeat_n(x, instruction.cycles()));
            if let Instruction::Addx(value) = instruction {
                x = x
                    .checked_add(value)
                    .ok_or_else(|| miette!("X register overflow adding {value} to {x}"))?;
            }
        }

        tracing::debug!(cycles = during.len(), x, "program finished");
        Ok(Self(during))
    }

    pub fn cycles(&self) -> usize {
        self.0.len()
    }

    /// X during the 1-based `cycle`, `None` once the program has ended.
    pub fn x_during(&self, cycle: usize) -> Option<i32> {
        cycle.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    /// Sum of `cycle * X` over the given cycles the program reaches.
    pub fn signal_strength(&self, cycles: impl IntoIterator<Item = usize>) -> i64 {
        cycles
            .into_iter()
            .filter_map(|cycle| Some(cycle as i64 * self.x_during(cycle)? as i64))
            .sum()
    }

    /// CRT rows, `true` for a lit pixel. Pixels drawn after the program ended
    /// stay dark.
    pub fn screen(&self) -> Vec<[bool; SCREEN_WIDTH]> {
        let mut rows = vec![[false; SCREEN_WIDTH]; SCREEN_HEIGHT];
        for (pixel, &x) in self.0.iter().take(SCREEN_WIDTH * SCREEN_HEIGHT).enumerate() {
            let column = (pixel % SCREEN_WIDTH) as i32;
            rows[pixel / SCREEN_WIDTH][pixel % SCREEN_WIDTH] = (column - x).abs() <= 1;
        }
        rows
    }
}

/// The CRT image, one line per row, `#` lit and `.` dark.
pub fn render(trace: &Trace, palette: &Palette) -> String {
    let lit = palette.color(TerminalColor::White, TerminalColor::BrightGreen);
    let dark = palette.foreground(TerminalColor::Gray);

    let mut out = String::with_capacity(SCREEN_HEIGHT * (SCREEN_WIDTH + 1));
    for row in trace.screen() {
        let mut last = None;
        for pixel in row {
            if last != Some(pixel) {
                last = Some(pixel);
                out.push_str(if pixel { &lit } else { &dark });
            }
            out.push(if pixel { '#' } else { '.' });
        }
        out.push_str(&palette.reset());
        out.push('\n');
    }
    out
}

#[tracing::instrument(skip(input))]
pub fn visualize(input: &str, palette: &Palette) -> Result<String> {
    let trace = Trace::run(&program(input)?)?;
    Ok(render(&trace, palette))
}
