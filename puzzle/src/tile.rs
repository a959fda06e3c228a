use crate::topology::{self, Offset};

/// A single square of the board: the value shown on it, the value
/// it has to show when solved, and where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    current: u8,
    required: u8,
    position: usize,
}

impl Tile {
    pub fn new(current: u8, required: u8, position: usize) -> Self {
        Tile {
            current,
            required,
            position,
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn required(&self) -> u8 {
        self.required
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_blank(&self) -> bool {
        self.current == 0
    }

    /// Whether this tile already shows its goal value.
    pub fn is_placed(&self) -> bool {
        self.current == self.required
    }

    /// Moves available to the blank when it sits on this tile.
    pub fn moves(&self) -> &'static [Offset] {
        topology::moves(self.position)
    }
}
