//! Node-selection strategies and engine configuration.

use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;

/// How the next board to expand is chosen from the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Oldest board first.
    BreadthFirst,

    /// Lowest Manhattan distance first.
    GreedyBestFirst,

    /// Lowest depth plus misplaced-tile count first.
    AStarMisplaced,

    /// Lowest depth plus Manhattan distance first.
    AStarManhattan,
}

const STRATEGIES: [Strategy; 4] = [
    Strategy::BreadthFirst,
    Strategy::GreedyBestFirst,
    Strategy::AStarMisplaced,
    Strategy::AStarManhattan,
];

impl Strategy {
    /// Enumerates all strategies, in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        STRATEGIES.iter().cloned()
    }

    /// Title used when reporting a run.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "Breadth-First Search",
            Strategy::GreedyBestFirst => "Greedy Best-First Search",
            Strategy::AStarMisplaced => "A* with Misplaced Tile Heuristic",
            Strategy::AStarManhattan => "A* with Manhattan Distance Heuristic",
        }
    }

    /// Menu letter for interactive selection.
    pub fn letter(&self) -> char {
        match self {
            Strategy::BreadthFirst => 'a',
            Strategy::GreedyBestFirst => 'b',
            Strategy::AStarMisplaced => 'c',
            Strategy::AStarManhattan => 'd',
        }
    }
}

impl FromStr for Strategy {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "bfs" | "breadth" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "b" | "gbfs" | "greedy" | "greedy-best-first" => Ok(Strategy::GreedyBestFirst),
            "c" | "misplaced" | "astar-misplaced" => Ok(Strategy::AStarMisplaced),
            "d" | "manhattan" | "astar-manhattan" => Ok(Strategy::AStarManhattan),
            _ => Err(PuzzleError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Frontier implementation used by the best-first strategies.
///
/// Both select the same node; breadth-first always uses a FIFO queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontier {
    Linear,
    Heap,
}

impl FromStr for Frontier {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Frontier::Linear),
            "heap" => Ok(Frontier::Heap),
            _ => Err(PuzzleError::UnknownFrontier(s.to_string())),
        }
    }
}

/// Closed list implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closed {
    Linear,
    Hashed,
}

impl FromStr for Closed {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Closed::Linear),
            "hashed" | "hash" => Ok(Closed::Hashed),
            _ => Err(PuzzleError::UnknownClosed(s.to_string())),
        }
    }
}

/// Options which change how a search runs, but not what it finds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub frontier: Frontier,
    pub closed: Closed,

    /// Print a progress line to stderr this often.
    pub progress: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            frontier: Frontier::Heap,
            closed: Closed::Hashed,
            progress: None,
        }
    }
}
