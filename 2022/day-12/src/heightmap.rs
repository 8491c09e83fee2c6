use aoc_common::{Palette, TerminalColor};
use glam::IVec2;
use miette::*;
use nom::{
    character::complete::{line_ending, multispace0, satisfy},
    combinator::all_consuming,
    multi::{many1, separated_list1},
    sequence::terminated,
    IResult,
};
use nom_locate::{position, LocatedSpan};
use std::{cmp::Reverse, collections::BinaryHeap};

type Span<'a> = LocatedSpan<&'a str>;

const DIRECTIONS: [IVec2; 4] = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    width: usize,
    height: usize,
    // `a` = 0 through `z` = 25, row-major
    elevation: Vec<u8>,
    pub start: IVec2,
    pub goal: IVec2,
}

impl Heightmap {
    fn index(&self, position: IVec2) -> Option<usize> {
        let in_bounds = (0..self.width as i32).contains(&position.x)
            && (0..self.height as i32).contains(&position.y);
        in_bounds.then(|| position.y as usize * self.width + position.x as usize)
    }

    fn position(&self, index: usize) -> IVec2 {
        IVec2::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn elevation(&self, position: IVec2) -> Option<u8> {
        self.index(position).map(|index| self.elevation[index])
    }

    /// Every position at the lowest elevation.
    pub fn lowest(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.elevation
            .iter()
            .enumerate()
            .filter(|&(_, &elevation)| elevation == 0)
            .map(|(index, _)| self.position(index))
    }

    /// Neighbors one may climb to: at most one higher, any amount lower.
    fn climbable(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let here = self.position(index);
        let limit = self.elevation[index] + 1;
        DIRECTIONS
            .iter()
            .filter_map(move |&direction| self.index(here + direction))
            .filter(move |&next| self.elevation[next] <= limit)
    }

    /// A* search from `from` to the goal. The path includes both ends.
    pub fn shortest_path(&self, from: IVec2) -> Option<Vec<IVec2>> {
        let start = self.index(from)?;
        let goal = self.index(self.goal)?;
        let estimate = |index: usize| {
            let delta = (self.goal - self.position(index)).abs();
            (delta.x + delta.y) as u32
        };

        let mut cost = vec![u32::MAX; self.elevation.len()];
        let mut came_from = vec![None; self.elevation.len()];
        let mut open = BinaryHeap::new();

        cost[start] = 0;
        open.push(Reverse((estimate(start), start)));

        while let Some(Reverse((_, current))) = open.pop() {
            if current == goal {
                let mut path = vec![self.position(current)];
                let mut cursor = current;
                while let Some(previous) = came_from[cursor] {
                    path.push(self.position(previous));
                    cursor = previous;
                }
                path.reverse();
                return Some(path);
            }

            let next_cost = cost[current] + 1;
            for next in self.climbable(current) {
                if next_cost < cost[next] {
                    cost[next] = next_cost;
                    came_from[next] = Some(current);
                    open.push(Reverse((next_cost + estimate(next), next)));
                }
            }
        }

        None
    }

    /// The heightmap with `path` highlighted, then the path as arrows.
    pub fn render(&self, path: &[IVec2], palette: &Palette) -> String {
        let mut on_path = vec![None; self.elevation.len()];
        for (step, &position) in path.iter().enumerate() {
            if let Some(index) = self.index(position) {
                on_path[index] = Some(step);
            }
        }

        let mut heights = String::new();
        let mut arrows = String::new();
        for y in 0..self.height {
            let mut highlighted = None;
            for x in 0..self.width {
                let index = y * self.width + x;
                let step = on_path[index];

                if highlighted != Some(step.is_some()) {
                    highlighted = Some(step.is_some());
                    heights.push_str(&match step {
                        Some(_) => palette.foreground(TerminalColor::BrightGreen),
                        None => palette.reset(),
                    });
                }
                heights.push((b'a' + self.elevation[index]) as char);

                arrows.push(match step {
                    None => '.',
                    Some(step) => match path.get(step + 1).map(|&next| next - path[step]) {
                        None => 'E',
                        Some(IVec2 { x: 1, y: 0 }) => '>',
                        Some(IVec2 { x: -1, y: 0 }) => '<',
                        Some(IVec2 { x: 0, y: 1 }) => 'v',
                        Some(IVec2 { x: 0, y: -1 }) => '^',
                        Some(_) => '?',
                    },
                });
            }
            heights.push_str(&palette.reset());
            heights.push('\n');
            arrows.push('\n');
        }

        format!("{heights}\n{arrows}")
    }
}

fn cell(input: Span) -> IResult<Span, (IVec2, char)> {
    let (input, at) = position(input)?;
    let (input, marker) = satisfy(|c| c.is_ascii_lowercase() || c == 'S' || c == 'E')(input)?;
    let location = IVec2::new(
        at.get_utf8_column() as i32 - 1,
        at.location_line() as i32 - 1,
    );
    Ok((input, (location, marker)))
}

#[tracing::instrument(skip(input))]
pub fn parse(input: &str) -> Result<Heightmap> {
    let (_, rows) = all_consuming(terminated(
        separated_list1(line_ending, many1(cell)),
        multispace0,
    ))(Span::new(input))
    .map_err(|e| miette!("Parse failed: {e}"))?;

    let width = rows[0].len();
    let height = rows.len();
    ensure!(
        rows.iter().all(|row| row.len() == width),
        "Rows of the heightmap have different lengths"
    );

    let mut start = None;
    let mut goal = None;
    let mut elevation = Vec::with_capacity(width * height);
    for &(location, marker) in rows.iter().flatten() {
        let level = match marker {
            'S' => {
                ensure!(start.replace(location).is_none(), "More than one start");
                'a'
            }
            'E' => {
                ensure!(goal.replace(location).is_none(), "More than one goal");
                'z'
            }
            c => c,
        };
        elevation.push(level as u8 - b'a');
    }

    Ok(Heightmap {
        width,
        height,
        elevation,
        start: start.ok_or_else(|| miette!("No start position marked 'S'"))?,
        goal: goal.ok_or_else(|| miette!("No goal position marked 'E'"))?,
    })
}

/// The heightmap with the shortest path from the start highlighted.
#[tracing::instrument(skip(input))]
pub fn visualize(input: &str, palette: &Palette) -> Result<String> {
    let map = parse(input)?;
    let path = map
        .shortest_path(map.start)
        .ok_or_else(|| miette!("The goal cannot be reached from the start"))?;
    Ok(map.render(&path, palette))
}
