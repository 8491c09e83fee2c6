use chumsky::prelude::*;
use miette::*;

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Tree heights, row by row.
pub struct Forest {
    pub width: usize,
    pub height: usize,
    trees: Vec<u8>,
}

impl Forest {
    fn get(&self, x: isize, y: isize) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.trees[y as usize * self.width + x as usize])
    }

    /// Heights met walking away from (x, y), nearest first.
    fn sight_line(&self, x: usize, y: usize, (dx, dy): (isize, isize)) -> impl Iterator<Item = u8> + '_ {
        (1..).map_while(move |step| self.get(x as isize + dx * step, y as isize + dy * step))
    }

    pub fn is_visible(&self, x: usize, y: usize) -> bool {
        let tree = self.trees[y * self.width + x];
        DIRECTIONS
            .iter()
            .any(|&direction| self.sight_line(x, y, direction).all(|other| other < tree))
    }

    /// Product of the viewing distances in the four directions. Trees on the
    /// edge see nothing in one direction, so they score 0.
    pub fn scenic_score(&self, x: usize, y: usize) -> usize {
        let tree = self.trees[y * self.width + x];
        DIRECTIONS
            .iter()
            .map(|&direction| {
                let mut distance = 0;
                for other in self.sight_line(x, y, direction) {
                    distance += 1;
                    if other >= tree {
                        break;
                    }
                }
                distance
            })
            .product()
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<u8>>, extra::Err<Rich<'a, char>>> {
    let tree = any()
        .filter(|c: &char| c.is_ascii_digit())
        .map(|c: char| c as u8 - b'0');

    tree.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub fn parse(input: &str) -> Result<Forest> {
    let rows = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let height = rows.len();
    let width = rows.first().map(|row| row.len()).unwrap_or(0);
    ensure!(
        rows.iter().all(|row| row.len() == width),
        "Every row of the forest must be {width} trees wide"
    );

    Ok(Forest {
        width,
        height,
        trees: rows.into_iter().flatten().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "30373
25512
65332
33549
35390";

    #[test]
    fn visibility() -> Result<()> {
        let forest = parse(INPUT)?;
        assert!(forest.is_visible(0, 0));
        assert!(forest.is_visible(1, 1));
        assert!(!forest.is_visible(3, 1));
        assert!(!forest.is_visible(2, 2));
        Ok(())
    }

    #[test]
    fn scenic_scores() -> Result<()> {
        let forest = parse(INPUT)?;
        assert_eq!(4, forest.scenic_score(2, 1));
        assert_eq!(8, forest.scenic_score(2, 3));
        assert_eq!(0, forest.scenic_score(0, 2));
        Ok(())
    }

    #[test]
    fn ragged_rows() {
        assert!(parse("123\n12").is_err());
    }
}
