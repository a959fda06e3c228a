//! Arrangements of tile values on the board.

use std::convert::TryFrom;
use std::fmt;

use itertools::Itertools;

use crate::errors::PuzzleError;
use crate::topology::{SIZE, WIDTH};

const BORDER: &str = "-------------";
const DIVIDER: &str = "----+---+----";

/// Nine tile values in position order, 0 standing for the blank.
///
/// A layout is always a permutation of 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout(pub(crate) [u8; SIZE]);

impl TryFrom<[u8; SIZE]> for Layout {
    type Error = PuzzleError;

    fn try_from(values: [u8; SIZE]) -> Result<Self, Self::Error> {
        let mut seen = [false; SIZE];
        for value in values.iter() {
            match seen.get_mut(*value as usize) {
                Some(s) if !*s => *s = true,
                _ => return Err(PuzzleError::InvalidLayout(values.to_vec())),
            }
        }
        Ok(Layout(values))
    }
}

impl TryFrom<&[u8]> for Layout {
    type Error = PuzzleError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let array = <[u8; SIZE]>::try_from(values)
            .map_err(|_| PuzzleError::InvalidLayout(values.to_vec()))?;
        Layout::try_from(array)
    }
}

impl Layout {
    pub fn values(&self) -> &[u8; SIZE] {
        &self.0
    }

    pub fn get(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Position holding each value, indexed by value.
    pub fn positions(&self) -> [usize; SIZE] {
        let mut positions = [0; SIZE];
        for (position, value) in self.0.iter().enumerate() {
            positions[*value as usize] = position;
        }
        positions
    }

    pub fn position_of(&self, value: u8) -> usize {
        self.positions()[value as usize]
    }

    /// Position of the blank tile.
    pub fn blank(&self) -> usize {
        self.position_of(0)
    }

    /// Number of pairs of tiles in the wrong relative order,
    /// reading the board row by row and skipping the blank.
    pub fn inversions(&self) -> usize {
        self.0
            .iter()
            .filter(|v| **v != 0)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .0
            .chunks(WIDTH)
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|v| match *v {
                        0 => " ".to_string(),
                        v => v.to_string(),
                    })
                    .join(" | ");
                format!("| {} |", cells)
            })
            .join(&format!("\n{}\n", DIVIDER));
        write!(f, "{}\n{}\n{}", BORDER, rows, BORDER)
    }
}

/// The layout a puzzle is solved into, along with the
/// position every value has to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    layout: Layout,
    positions: [usize; SIZE],
}

impl From<Layout> for Goal {
    fn from(layout: Layout) -> Self {
        Goal {
            positions: layout.positions(),
            layout,
        }
    }
}

impl Goal {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Value required at a position.
    pub fn required(&self, position: usize) -> u8 {
        self.layout.get(position)
    }

    /// Position a value has to reach.
    pub fn target(&self, value: u8) -> usize {
        self.positions[value as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::helpers::layout;

    #[test]
    fn permutations_only() {
        assert!(Layout::try_from([1, 2, 3, 4, 0, 6, 7, 5, 8]).is_ok());
        assert!(Layout::try_from([1, 1, 3, 4, 0, 6, 7, 5, 8]).is_err());
        assert!(Layout::try_from([1, 2, 3, 4, 9, 6, 7, 5, 8]).is_err());
        assert!(Layout::try_from(&[1, 2, 3][..]).is_err());
        assert!(Layout::try_from(&[0, 1, 2, 3, 4, 5, 6, 7, 8][..]).is_ok());
    }

    #[test]
    fn blank_and_positions() {
        let l = layout([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert_eq!(l.blank(), 4);
        assert_eq!(l.position_of(5), 7);
        assert_eq!(l.get(8), 8);
    }

    #[test]
    fn inversions() {
        assert_eq!(layout([1, 2, 3, 4, 5, 6, 7, 8, 0]).inversions(), 0);
        assert_eq!(layout([1, 2, 3, 4, 0, 6, 7, 5, 8]).inversions(), 2);
        assert_eq!(layout([8, 1, 3, 4, 0, 2, 7, 6, 5]).inversions(), 12);
    }

    #[test]
    fn goal_targets() {
        let goal = Goal::from(layout([1, 2, 3, 8, 0, 4, 7, 6, 5]));
        assert_eq!(goal.target(8), 3);
        assert_eq!(goal.target(0), 4);
        assert_eq!(goal.required(5), 4);
    }

    #[test]
    fn display() {
        let expected = "\
-------------
| 1 | 2 | 3 |
----+---+----
| 4 |   | 6 |
----+---+----
| 7 | 5 | 8 |
-------------";
        assert_eq!(layout([1, 2, 3, 4, 0, 6, 7, 5, 8]).to_string(), expected);
    }
}
