use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for conducting searches.
///
/// A candidate is a single node of the state space. The
/// search algorithm stops at the first candidate it selects
/// which reports itself complete.
pub trait SearchCandidate: Debug + Sized {
    /// Indicates that this candidate is a goal, and causes the
    /// search algorithm to stop and reconstruct the path to it.
    fn is_complete(&self) -> bool;

    /// Produces the candidates reachable in a single step,
    /// in the order they should be appended to the frontier.
    fn children(&self) -> Vec<Self>;
}

/// Candidates which can be compared structurally.
///
/// Two candidates with equal states are the same node of the
/// state space, regardless of how the search reached them.
pub trait SearchState: SearchCandidate + Clone {
    type State: Debug + Clone + Eq + Hash;

    fn state(&self) -> Self::State;
}

/// An estimate of the remaining cost from a candidate to a goal.
///
/// Implemented by marker types so that several heuristics can
/// exist for the same candidate type.
pub trait Heuristic<S> {
    fn estimate(candidate: &S) -> usize;
}
