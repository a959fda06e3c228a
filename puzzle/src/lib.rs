#![deny(clippy::all)]

//! The 3×3 sliding-tile puzzle as a search problem.
//!
//! A [Puzzle] pairs a start [Layout] with a [Goal]. Solving it with a
//! [Strategy] runs the generic engine from the `searcher` crate over
//! [Board] states and returns the path from start to goal together
//! with the run's [Statistics].

mod board;
mod errors;
pub mod heuristic;
#[cfg(test)]
mod helpers;
mod layout;
mod solve;
mod strategy;
mod tile;
pub mod topology;

pub use board::Board;
pub use errors::{PuzzleError, Result};
pub use layout::{Goal, Layout};
pub use solve::Puzzle;
pub use strategy::{Closed, Frontier, SearchOptions, Strategy};
pub use tile::Tile;

pub use searcher::{SearchError, Solution, Statistics};
