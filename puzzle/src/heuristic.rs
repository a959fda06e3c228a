//! Distance estimates from a board to its goal.

use searcher::Heuristic;

use crate::board::Board;
use crate::layout::Goal;
use crate::topology::{self, SIZE};

/// Sum, over every tile not showing its required value, of the
/// grid distance between the tile and the position its current
/// value has to reach. The blank is counted like any other tile.
pub fn manhattan(tiles: &[u8; SIZE], goal: &Goal) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|(position, value)| **value != goal.required(*position))
        .map(|(position, value)| topology::distance(position, goal.target(*value)))
        .sum()
}

/// Number of tiles, blank excluded, not showing their required value.
pub fn misplaced(tiles: &[u8; SIZE], goal: &Goal) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|(position, value)| **value != 0 && **value != goal.required(*position))
        .count()
}

/// Ranks boards by their cached Manhattan distance.
#[derive(Debug)]
pub struct Manhattan;

impl<'g> Heuristic<Board<'g>> for Manhattan {
    fn estimate(board: &Board<'g>) -> usize {
        board.manhattan()
    }
}

/// Ranks boards by their cached misplaced-tile count.
#[derive(Debug)]
pub struct Misplaced;

impl<'g> Heuristic<Board<'g>> for Misplaced {
    fn estimate(board: &Board<'g>) -> usize {
        board.misplaced()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::helpers::goal;

    #[test]
    fn solved() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let tiles = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        assert_eq!(manhattan(&tiles, &g), 0);
        assert_eq!(misplaced(&tiles, &g), 0);
    }

    #[test]
    fn blank_counts_for_manhattan_only() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let tiles = [1, 2, 3, 4, 5, 6, 7, 0, 8];
        assert_eq!(manhattan(&tiles, &g), 2);
        assert_eq!(misplaced(&tiles, &g), 1);
    }

    #[test]
    fn scrambled() {
        let g = goal([1, 2, 3, 8, 0, 4, 7, 6, 5]);
        let tiles = [2, 8, 3, 1, 6, 4, 7, 0, 5];
        // 2:1, 8:2, 1:1, 6:1, blank:1
        assert_eq!(manhattan(&tiles, &g), 6);
        assert_eq!(misplaced(&tiles, &g), 4);
    }
}
