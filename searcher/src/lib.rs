//! Generalized best-first search over an implicit state space.
//!
//! To use these search algorithms, implement [SearchCandidate] and
//! [SearchState] for the node type, then pick a frontier (which
//! decides the node-selection strategy) and a closed list:
//!
//! - [BreadthQueue] selects the oldest node (breadth-first search).
//! - [LinearQueue] and [HeapQueue] select the node with the lowest
//!   [Priority], such as [Greedy] or [AStar] over a [Heuristic].
//! - [LinearClosed] and [HashedClosed] record expanded states.

pub mod algorithm;
mod errors;
mod statistics;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use statistics::Statistics;
pub use traits::Heuristic;
pub use traits::SearchCandidate;
pub use traits::SearchState;

pub use algorithm::arena::NodeId;
pub use algorithm::basic::BreadthQueue;
pub use algorithm::best::{AStar, Greedy, HeapQueue, LinearQueue, Priority};
pub use algorithm::closed::{ClosedList, HashedClosed, LinearClosed};
pub use algorithm::{Node, SearchAlgorithm, SearchBuilder, SearchQueue, Solution};
