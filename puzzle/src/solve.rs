//! Running a strategy against a puzzle instance.

use searcher::{
    AStar, BreadthQueue, Greedy, HashedClosed, HeapQueue, LinearClosed, LinearQueue, Priority,
    SearchBuilder, SearchQueue, SearchResult, Solution,
};

use crate::board::Board;
use crate::errors::Result;
use crate::heuristic::{Manhattan, Misplaced};
use crate::layout::{Goal, Layout};
use crate::strategy::{Closed, Frontier, SearchOptions, Strategy};

/// A start layout and the goal it should be solved into.
///
/// Both layouts are assumed to have matching inversion parity;
/// an unsolvable instance searches the whole reachable half of
/// the state space before failing.
#[derive(Debug, Clone)]
pub struct Puzzle {
    start: Layout,
    goal: Goal,
}

impl Puzzle {
    pub fn new(start: Layout, goal: Layout) -> Self {
        Puzzle {
            start,
            goal: goal.into(),
        }
    }

    pub fn start(&self) -> &Layout {
        &self.start
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// The root board of every search on this puzzle.
    pub fn board(&self) -> Board<'_> {
        Board::start(&self.start, &self.goal)
    }

    /// Solve the puzzle with the given strategy.
    pub fn solve(&self, strategy: Strategy, options: &SearchOptions) -> Result<Solution<Board<'_>>> {
        let board = self.board();
        let solution = match strategy {
            Strategy::BreadthFirst => search::<BreadthQueue<Board<'_>>>(board, options),
            Strategy::GreedyBestFirst => best_first::<Greedy<Manhattan>>(board, options),
            Strategy::AStarMisplaced => best_first::<AStar<Misplaced>>(board, options),
            Strategy::AStarManhattan => best_first::<AStar<Manhattan>>(board, options),
        }?;
        Ok(solution)
    }
}

fn best_first<'g, P>(board: Board<'g>, options: &SearchOptions) -> SearchResult<Solution<Board<'g>>>
where
    P: Priority<Board<'g>>,
{
    match options.frontier {
        Frontier::Linear => search::<LinearQueue<Board<'g>, P>>(board, options),
        Frontier::Heap => search::<HeapQueue<Board<'g>, P>>(board, options),
    }
}

fn search<'g, Q>(board: Board<'g>, options: &SearchOptions) -> SearchResult<Solution<Board<'g>>>
where
    Q: SearchQueue<Candidate = Board<'g>> + Default,
{
    match options.closed {
        Closed::Linear => SearchBuilder::<Q, LinearClosed<Board<'g>>>::default()
            .progress(options.progress)
            .build(board)
            .run(),
        Closed::Hashed => SearchBuilder::<Q, HashedClosed<Board<'g>>>::default()
            .progress(options.progress)
            .build(board)
            .run(),
    }
}
