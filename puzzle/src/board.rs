//! Search states: one arrangement of tiles relative to a goal.

use std::fmt;

use searcher::{SearchCandidate, SearchState};

use crate::errors::{PuzzleError, Result};
use crate::heuristic;
use crate::layout::{Goal, Layout};
use crate::tile::Tile;
use crate::topology::{self, Offset, SIZE};

/// A board position during the search.
///
/// Boards are small values: copying one is how a child state is
/// made before its move is applied. Both heuristic values are
/// cached and refreshed whenever the tiles change.
#[derive(Debug, Clone, Copy)]
pub struct Board<'g> {
    tiles: [u8; SIZE],
    blank: usize,
    goal: &'g Goal,
    manhattan: usize,
    misplaced: usize,
}

impl<'g> Board<'g> {
    /// Build the root board of a search.
    pub fn start(layout: &Layout, goal: &'g Goal) -> Self {
        let mut board = Board {
            tiles: *layout.values(),
            blank: layout.blank(),
            goal,
            manhattan: 0,
            misplaced: 0,
        };
        board.recompute_heuristics();
        board
    }

    pub fn tile(&self, position: usize) -> Tile {
        Tile::new(
            self.tiles[position],
            self.goal.required(position),
            position,
        )
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..SIZE).map(move |position| self.tile(position))
    }

    /// Position of the blank tile.
    pub fn blank(&self) -> usize {
        self.blank
    }

    pub fn layout(&self) -> Layout {
        Layout(self.tiles)
    }

    pub fn goal(&self) -> &'g Goal {
        self.goal
    }

    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    pub fn misplaced(&self) -> usize {
        self.misplaced
    }

    /// Every tile shows its required value.
    pub fn is_goal(&self) -> bool {
        self.tiles().all(|t| t.is_placed())
    }

    /// Slide the tile at `blank + offset` into the blank.
    ///
    /// Fails when `offset` is not one of the blank's legal moves.
    pub fn apply_move(&mut self, offset: Offset) -> Result<()> {
        let target = topology::target(self.blank, offset)
            .ok_or_else(|| PuzzleError::IllegalMove(self.blank, offset))?;
        self.swap_blank(target);
        Ok(())
    }

    /// Rebuild both heuristics from the current tile values.
    pub fn recompute_heuristics(&mut self) {
        self.manhattan = heuristic::manhattan(&self.tiles, self.goal);
        self.misplaced = heuristic::misplaced(&self.tiles, self.goal);
    }

    fn swap_blank(&mut self, target: usize) {
        self.tiles.swap(self.blank, target);
        self.blank = target;
        self.recompute_heuristics();
    }

    /// The offset which moves the blank from this board to `other`,
    /// if they are one move apart.
    pub fn move_to(&self, other: &Board<'_>) -> Option<Offset> {
        self.tile(self.blank).moves().iter().cloned().find(|offset| {
            let mut next = *self;
            next.apply_move(*offset).is_ok() && next.tiles == other.tiles
        })
    }
}

impl<'g> PartialEq for Board<'g> {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl<'g> Eq for Board<'g> {}

impl<'g> SearchCandidate for Board<'g> {
    fn is_complete(&self) -> bool {
        self.is_goal()
    }

    fn children(&self) -> Vec<Self> {
        topology::moves(self.blank)
            .iter()
            .map(|offset| {
                let mut child = *self;
                child.swap_blank((self.blank as Offset + offset) as usize);
                child
            })
            .collect()
    }
}

impl<'g> SearchState for Board<'g> {
    type State = Layout;

    fn state(&self) -> Layout {
        self.layout()
    }
}

impl<'g> fmt::Display for Board<'g> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::helpers::{goal, layout, permutation};
    use crate::topology::{DOWN, LEFT, RIGHT, UP};

    #[test]
    fn start_board() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let board = Board::start(&layout([1, 2, 3, 4, 0, 6, 7, 5, 8]), &g);

        assert_eq!(board.blank(), 4);
        assert_eq!(board.manhattan(), 4);
        assert_eq!(board.misplaced(), 2);
        assert!(!board.is_goal());
        assert_eq!(board.tile(7), Tile::new(5, 8, 7));
    }

    #[test]
    fn move_and_recompute() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let mut board = Board::start(&layout([1, 2, 3, 4, 0, 6, 7, 5, 8]), &g);

        board.apply_move(DOWN).unwrap();
        assert_eq!(board.layout(), layout([1, 2, 3, 4, 5, 6, 7, 0, 8]));
        assert_eq!(board.blank(), 7);

        let fresh = Board::start(&board.layout(), &g);
        assert_eq!(board.manhattan(), fresh.manhattan());
        assert_eq!(board.misplaced(), fresh.misplaced());

        board.apply_move(RIGHT).unwrap();
        assert!(board.is_goal());
        assert_eq!(board.manhattan(), 0);
    }

    #[test]
    fn illegal_move() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let mut board = Board::start(&layout([0, 2, 3, 4, 5, 6, 7, 8, 1]), &g);

        match board.apply_move(UP) {
            Err(PuzzleError::IllegalMove(0, UP)) => {}
            other => panic!("Expected an illegal move, got {:?}", other),
        }
        assert!(board.apply_move(LEFT).is_err());
        assert_eq!(board.layout(), layout([0, 2, 3, 4, 5, 6, 7, 8, 1]));
    }

    #[test]
    fn children_are_independent() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let board = Board::start(&layout([1, 2, 3, 4, 0, 6, 7, 5, 8]), &g);
        let children = board.children();

        assert_eq!(children.len(), 4);
        assert_eq!(board.layout(), layout([1, 2, 3, 4, 0, 6, 7, 5, 8]));
        assert_eq!(children[0].layout(), layout([1, 0, 3, 4, 2, 6, 7, 5, 8]));
        assert_eq!(children[1].layout(), layout([1, 2, 3, 4, 5, 6, 7, 0, 8]));
        assert_eq!(children[2].layout(), layout([1, 2, 3, 4, 6, 0, 7, 5, 8]));
        assert_eq!(children[3].layout(), layout([1, 2, 3, 0, 4, 6, 7, 5, 8]));
    }

    #[test]
    fn heuristics_never_stale() {
        let g = goal([1, 2, 3, 8, 0, 4, 7, 6, 5]);
        let mut frontier = vec![Board::start(&layout([2, 8, 3, 1, 6, 4, 7, 0, 5]), &g)];

        for _ in 0..4 {
            frontier = frontier.iter().flat_map(|b| b.children()).collect();
        }

        assert!(frontier.len() > 50);
        for board in frontier.iter() {
            let fresh = Board::start(&board.layout(), &g);
            assert_eq!(board.manhattan(), fresh.manhattan());
            assert_eq!(board.misplaced(), fresh.misplaced());
            assert_eq!(board.tile(board.blank()).current(), 0);
            assert!(permutation(board.layout().values()));
        }
    }

    #[test]
    fn equality_is_tiles_only() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let board = Board::start(&layout([1, 2, 3, 4, 0, 6, 7, 5, 8]), &g);
        let mut there_and_back = board;
        there_and_back.apply_move(UP).unwrap();
        there_and_back.apply_move(DOWN).unwrap();

        assert_eq!(board, there_and_back);
        assert_ne!(board, board.children()[0]);
    }

    #[test]
    fn move_between_boards() {
        let g = goal([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let board = Board::start(&layout([1, 2, 3, 4, 0, 6, 7, 5, 8]), &g);
        let children = board.children();

        assert_eq!(board.move_to(&children[1]), Some(DOWN));
        assert_eq!(children[1].move_to(&board), Some(UP));
        assert_eq!(children[0].move_to(&children[1]), None);
    }
}
