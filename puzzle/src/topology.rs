//! Board geometry for a 3×3 puzzle.
//!
//! Positions are numbered in reading order:
//!
//! ```text
//!  0 | 1 | 2
//!  --+---+--
//!  3 | 4 | 5
//!  --+---+--
//!  6 | 7 | 8
//! ```
//!
//! so a horizontal move changes the position by 1 and a vertical
//! move by 3.

/// Number of columns (and rows) on the board.
pub const WIDTH: usize = 3;

/// Number of positions on the board.
pub const SIZE: usize = WIDTH * WIDTH;

/// Change in position when the blank moves.
pub type Offset = isize;

pub const UP: Offset = -3;
pub const DOWN: Offset = 3;
pub const LEFT: Offset = -1;
pub const RIGHT: Offset = 1;

static MOVES: [&[Offset]; SIZE] = [
    &[RIGHT, DOWN],
    &[RIGHT, DOWN, LEFT],
    &[LEFT, DOWN],
    &[UP, DOWN, RIGHT],
    &[UP, DOWN, RIGHT, LEFT],
    &[UP, DOWN, LEFT],
    &[RIGHT, UP],
    &[RIGHT, UP, LEFT],
    &[LEFT, UP],
];

/// Legal blank-move offsets from a position, in expansion order.
pub fn moves(position: usize) -> &'static [Offset] {
    MOVES[position]
}

/// The position reached by moving from `position` by `offset`,
/// if that is a legal move.
pub fn target(position: usize, offset: Offset) -> Option<usize> {
    if moves(position).contains(&offset) {
        Some((position as Offset + offset) as usize)
    } else {
        None
    }
}

/// Row and column of a position.
pub fn grid(position: usize) -> (usize, usize) {
    (position / WIDTH, position % WIDTH)
}

/// Manhattan distance between two positions.
pub fn distance(a: usize, b: usize) -> usize {
    let (ar, ac) = grid(a);
    let (br, bc) = grid(b);
    let rows = if ar > br { ar - br } else { br - ar };
    let cols = if ac > bc { ac - bc } else { bc - ac };
    rows + cols
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn move_counts() {
        let counts: Vec<usize> = (0..SIZE).map(|p| moves(p).len()).collect();
        assert_eq!(counts, vec![2, 3, 2, 3, 4, 3, 2, 3, 2]);
    }

    #[test]
    fn moves_reach_neighbors() {
        for position in 0..SIZE {
            for offset in moves(position) {
                let next = target(position, *offset).unwrap();
                assert!(next < SIZE);
                assert_eq!(distance(position, next), 1);
            }
        }
    }

    #[test]
    fn no_wrapping() {
        assert_eq!(target(2, RIGHT), None);
        assert_eq!(target(3, LEFT), None);
        assert_eq!(target(0, UP), None);
        assert_eq!(target(7, DOWN), None);
        assert_eq!(target(4, UP), Some(1));
    }

    #[test]
    fn grid_positions() {
        assert_eq!(grid(0), (0, 0));
        assert_eq!(grid(5), (1, 2));
        assert_eq!(grid(7), (2, 1));
        assert_eq!(distance(0, 8), 4);
        assert_eq!(distance(6, 2), 4);
    }
}
