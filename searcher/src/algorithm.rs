//! Provides the building blocks for search algorithms

use std::default::Default;
use std::marker::PhantomData;

use self::arena::{Arena, NodeId};
use self::closed::ClosedList;
use crate::errors::{Result, SearchError};
use crate::statistics::Statistics;
use crate::traits::SearchState;

pub(crate) mod arena;
pub(crate) mod basic;
pub(crate) mod best;
pub(crate) mod closed;

pub use self::arena::Node;

/// Trait used to implement frontiers of search candidates
/// which have been discovered but not yet expanded.
///
/// The frontier only stores handles; the node itself lives
/// in the arena owned by the running [SearchAlgorithm].
pub trait SearchQueue {
    type Candidate;

    /// Remove and return the next node to examine.
    fn pop(&mut self) -> Option<NodeId>;

    fn push(&mut self, id: NodeId, node: &Node<Self::Candidate>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The result of a successful search.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// Candidates from the origin to the goal, both included.
    pub path: Vec<S>,
    pub statistics: Statistics,
}

impl<S> Solution<S> {
    pub fn start(&self) -> Option<&S> {
        self.path.first()
    }

    pub fn goal(&self) -> Option<&S> {
        self.path.last()
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (Q) and a generic closed list (C) to
/// provide a single loop for every node-selection strategy. Each
/// algorithm owns its arena, frontier, closed list and counters,
/// and is consumed by [SearchAlgorithm::run].
///
/// A node which is structurally equal to a closed node is
/// discarded when selected, even if it was reached by a shorter
/// path. Closed nodes are never reopened.
#[derive(Debug)]
pub struct SearchAlgorithm<S, Q, C>
where
    S: SearchState,
    Q: SearchQueue<Candidate = S> + Default,
    C: ClosedList<Candidate = S>,
{
    arena: Arena<S>,
    queue: Q,
    closed: C,
    statistics: Statistics,
    progress: Option<usize>,
}

impl<S, Q, C> SearchAlgorithm<S, Q, C>
where
    S: SearchState,
    Q: SearchQueue<Candidate = S> + Default,
    C: ClosedList<Candidate = S>,
{
    /// Construct a search seeded with a single origin candidate.
    pub fn new(origin: S) -> Self {
        let mut sr = SearchAlgorithm {
            arena: Arena::default(),
            queue: Q::default(),
            closed: C::default(),
            statistics: Statistics::default(),
            progress: None,
        };
        let root = sr.arena.root(origin);
        sr.queue.push(root, sr.arena.get(root));
        sr
    }

    /// Print a progress line to stderr every `interval` selections.
    pub fn set_progress(&mut self, interval: usize) {
        self.progress = Some(interval).filter(|i| *i > 0);
    }

    fn report(&self, n: usize, id: NodeId) {
        if let Some(interval) = self.progress {
            if n % interval == 0 {
                eprintln!(
                    "F{} C{} E{} D{} ({} nodes) {}",
                    self.queue.len(),
                    self.closed.len(),
                    self.statistics.nodes_expanded,
                    self.arena.get(id).depth(),
                    self.arena.len(),
                    n
                );
            }
        }
    }

    fn expand(&mut self, id: NodeId) {
        let children = self.arena.get(id).candidate().children();
        for child in children {
            let child = self.arena.child(id, child);
            self.queue.push(child, self.arena.get(child));
            self.statistics.generated(self.queue.len());
        }

        self.closed.insert(self.arena.get(id).candidate());
        self.statistics.closed(self.closed.len());
    }

    fn finish(mut self, id: NodeId) -> Solution<S> {
        let path = self.arena.path(id);
        self.statistics
            .solved(path.len(), self.arena.get(id).depth());
        Solution {
            path,
            statistics: self.statistics,
        }
    }

    /// Run the search to completion.
    ///
    /// Returns the path to the first complete candidate selected,
    /// or [SearchError::NoResultFound] once the frontier is empty.
    pub fn run(mut self) -> Result<Solution<S>> {
        let mut n = 0;
        while let Some(id) = self.queue.pop() {
            n += 1;
            self.report(n, id);

            let node = self.arena.get(id).candidate();
            if node.is_complete() {
                return Ok(self.finish(id));
            }

            if self.closed.contains(node) {
                continue;
            }

            self.expand(id);
        }

        Err(SearchError::NoResultFound(self.statistics))
    }
}

/// Builds [SearchAlgorithm]s for a fixed frontier and closed list.
#[derive(Debug)]
pub struct SearchBuilder<Q, C> {
    progress: Option<usize>,
    components: PhantomData<(Q, C)>,
}

impl<Q, C> Default for SearchBuilder<Q, C> {
    fn default() -> Self {
        SearchBuilder {
            progress: None,
            components: PhantomData,
        }
    }
}

impl<Q, C> SearchBuilder<Q, C> {
    pub fn progress(mut self, interval: Option<usize>) -> Self {
        self.progress = interval;
        self
    }

    pub fn build<S>(&self, origin: S) -> SearchAlgorithm<S, Q, C>
    where
        S: SearchState,
        Q: SearchQueue<Candidate = S> + Default,
        C: ClosedList<Candidate = S>,
    {
        let mut search = SearchAlgorithm::new(origin);
        if let Some(interval) = self.progress {
            search.set_progress(interval);
        }
        search
    }
}

#[cfg(test)]
mod test {
    use super::basic::BreadthQueue;
    use super::best::{AStar, Greedy, HeapQueue, LinearQueue};
    use super::closed::{HashedClosed, LinearClosed};
    use super::*;
    use crate::traits::{Heuristic, SearchCandidate};

    /// Walks a number line from `value` towards `target`,
    /// stepping by +1, -1 or doubling, but never leaving 0..=limit.
    #[derive(Debug, Clone)]
    struct Walk {
        value: u32,
        target: u32,
        limit: u32,
    }

    impl Walk {
        fn new(value: u32, target: u32) -> Self {
            Walk {
                value,
                target,
                limit: 64,
            }
        }
    }

    impl SearchCandidate for Walk {
        fn is_complete(&self) -> bool {
            self.value == self.target
        }

        fn children(&self) -> Vec<Self> {
            let mut next = vec![self.value + 1, self.value * 2];
            if self.value > 0 {
                next.push(self.value - 1);
            }
            next.into_iter()
                .filter(|v| *v <= self.limit)
                .map(|value| Walk { value, ..*self })
                .collect()
        }
    }

    impl SearchState for Walk {
        type State = u32;

        fn state(&self) -> u32 {
            self.value
        }
    }

    struct Distance;

    impl Heuristic<Walk> for Distance {
        fn estimate(walk: &Walk) -> usize {
            (walk.value as i64 - walk.target as i64).abs() as usize
        }
    }

    type Bfs = SearchAlgorithm<Walk, BreadthQueue<Walk>, LinearClosed<Walk>>;

    fn values(solution: &Solution<Walk>) -> Vec<u32> {
        solution.path.iter().map(|w| w.value).collect()
    }

    #[test]
    fn origin_is_goal() {
        let solution = Bfs::new(Walk::new(3, 3)).run().unwrap();

        assert_eq!(values(&solution), vec![3]);
        assert_eq!(solution.statistics.solution_length, 1);
        assert_eq!(solution.statistics.tree_depth, 0);
        assert_eq!(solution.statistics.nodes_expanded, 0);
        assert_eq!(solution.statistics.max_frontier_size, 0);
    }

    #[test]
    fn breadth_first_is_shortest() {
        let solution = Bfs::new(Walk::new(1, 12)).run().unwrap();

        // 1 -> 2 -> 3 -> 6 -> 12
        assert_eq!(values(&solution), vec![1, 2, 3, 6, 12]);
        assert_eq!(solution.statistics.tree_depth, 4);
        assert_eq!(solution.start().map(|w| w.value), Some(1));
        assert_eq!(solution.goal().map(|w| w.value), Some(12));
    }

    #[test]
    fn first_expansion_counts() {
        let solution = Bfs::new(Walk::new(1, 3)).run().unwrap();

        // Root 1 yields 2, 2, 0. The first 2 yields 3, 4, 1, the
        // second 2 is discarded as closed, and 0 yields 1, 0 before
        // 3 is selected.
        assert_eq!(values(&solution), vec![1, 2, 3]);
        assert_eq!(solution.statistics.nodes_expanded, 8);
        assert_eq!(solution.statistics.closed_list_size, 3);
        assert_eq!(solution.statistics.max_frontier_size, 5);
    }

    #[test]
    fn exhausted_frontier() {
        let walk = Walk {
            value: 0,
            target: 9,
            limit: 5,
        };
        let err = Bfs::new(walk).run().unwrap_err();

        match err {
            SearchError::NoResultFound(stats) => {
                assert_eq!(stats.closed_list_size, 6);
                assert_eq!(stats.solution_length, 0);
            }
        }
    }

    #[test]
    fn frontiers_agree() {
        type Linear = SearchAlgorithm<Walk, LinearQueue<Walk, AStar<Distance>>, LinearClosed<Walk>>;
        type Heap = SearchAlgorithm<Walk, HeapQueue<Walk, AStar<Distance>>, HashedClosed<Walk>>;

        let linear = Linear::new(Walk::new(5, 37)).run().unwrap();
        let heap = Heap::new(Walk::new(5, 37)).run().unwrap();

        assert_eq!(values(&linear), values(&heap));
        assert_eq!(linear.statistics, heap.statistics);
    }

    #[test]
    fn greedy_reaches_goal() {
        type G = SearchAlgorithm<Walk, HeapQueue<Walk, Greedy<Distance>>, HashedClosed<Walk>>;

        let mut search = G::new(Walk::new(40, 3));
        search.set_progress(0);
        let solution = search.run().unwrap();

        let path = values(&solution);
        assert_eq!(path.first(), Some(&40));
        assert_eq!(path.last(), Some(&3));
        for step in path.windows(2) {
            let (a, b) = (step[0], step[1]);
            assert!(b == a + 1 || b + 1 == a || b == a * 2);
        }
    }

    #[test]
    fn builder_sets_progress() {
        let builder: SearchBuilder<BreadthQueue<Walk>, HashedClosed<Walk>> =
            SearchBuilder::default().progress(Some(1));
        let search = builder.build(Walk::new(2, 4));

        assert_eq!(search.progress, Some(1));
        assert_eq!(values(&search.run().unwrap()), vec![2, 4]);
    }
}
