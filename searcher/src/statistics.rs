//! Performance counters gathered while a search runs.

/// Counters describing a single search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Children generated over the whole run.
    pub nodes_expanded: usize,

    /// Length of the closed list when the run ended.
    pub closed_list_size: usize,

    /// Largest frontier observed after appending a child.
    pub max_frontier_size: usize,

    /// Number of candidates on the solution path, start and goal included.
    pub solution_length: usize,

    /// Depth of the goal node.
    pub tree_depth: usize,
}

impl Statistics {
    pub(crate) fn generated(&mut self, frontier: usize) {
        self.nodes_expanded += 1;
        if frontier > self.max_frontier_size {
            self.max_frontier_size = frontier;
        }
    }

    pub(crate) fn closed(&mut self, closed: usize) {
        self.closed_list_size = closed;
    }

    pub(crate) fn solved(&mut self, solution_length: usize, tree_depth: usize) {
        self.solution_length = solution_length;
        self.tree_depth = tree_depth;
    }

    /// Number of moves on the solution path.
    pub fn moves(&self) -> usize {
        self.solution_length.saturating_sub(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frontier_maximum() {
        let mut stats = Statistics::default();
        stats.generated(3);
        stats.generated(5);
        stats.generated(4);

        assert_eq!(stats.nodes_expanded, 3);
        assert_eq!(stats.max_frontier_size, 5);
    }

    #[test]
    fn moves_from_length() {
        let mut stats = Statistics::default();
        assert_eq!(stats.moves(), 0);

        stats.solved(3, 2);
        assert_eq!(stats.moves(), 2);
        assert_eq!(stats.tree_depth, 2);
    }
}
