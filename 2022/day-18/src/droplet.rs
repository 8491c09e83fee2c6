use chumsky::prelude::*;
use glam::IVec3;
use miette::*;
use std::collections::{HashSet, VecDeque};

const FACES: [IVec3; 6] = [
    IVec3::X,
    IVec3::NEG_X,
    IVec3::Y,
    IVec3::NEG_Y,
    IVec3::Z,
    IVec3::NEG_Z,
];

/// A decimal number; values out of range for `T` are parse errors.
fn number<'a, T>() -> impl Parser<'a, &'a str, T, extra::Err<Rich<'a, char>>> + Clone
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text::int(10).try_map(|digits: &str, span| digits.parse().map_err(|e| Rich::custom(span, e)))
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<IVec3>, extra::Err<Rich<'a, char>>> {
    let coordinate = number::<i32>();
    coordinate.clone()
        .then_ignore(just(','))
        .then(coordinate.clone())
        .then_ignore(just(','))
        .then(coordinate)
        .map(|((x, y), z)| IVec3::new(x, y, z))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// A lava droplet made of unit cubes.
#[derive(Debug, Clone)]
pub struct Droplet {
    cubes: HashSet<IVec3>,
}

impl Droplet {
    pub fn parse(input: &str) -> Result<Self> {
        let cubes = parser()
            .parse(input)
            .into_result()
            .map_err(|e| miette!("Parse failed: {:?}", e))?;
        Ok(Self {
            cubes: cubes.into_iter().collect(),
        })
    }

    fn neighbors(cube: IVec3) -> impl Iterator<Item = IVec3> {
        FACES.into_iter().map(move |face| cube + face)
    }

    /// Faces not touching another cube.
    pub fn surface_area(&self) -> usize {
        self.cubes
            .iter()
            .flat_map(|&cube| Self::neighbors(cube))
            .filter(|neighbor| !self.cubes.contains(neighbor))
            .count()
    }

    /// Faces reachable by steam from outside the droplet.
    pub fn exterior_surface_area(&self) -> usize {
        let Some((min, max)) = self.bounds() else {
            return 0;
        };
        let (min, max) = (min - IVec3::ONE, max + IVec3::ONE);
        let inside = |p: IVec3| p.cmpge(min).all() && p.cmple(max).all();

        let mut steam = HashSet::from([min]);
        let mut queue = VecDeque::from([min]);
        let mut faces = 0;
        while let Some(cell) = queue.pop_front() {
            for next in Self::neighbors(cell).filter(|&p| inside(p)) {
                if self.cubes.contains(&next) {
                    faces += 1;
                } else if steam.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        tracing::debug!(steam = steam.len(), "flood fill done");
        faces
    }

    fn bounds(&self) -> Option<(IVec3, IVec3)> {
        let mut cubes = self.cubes.iter().copied();
        let first = cubes.next()?;
        Some(cubes.fold((first, first), |(min, max), cube| {
            (min.min(cube), max.max(cube))
        }))
    }
}
