//! Closed lists, recording the states which have already been expanded.

use std::collections::HashSet;
use std::default::Default;

use crate::traits::SearchState;

/// Defines the behavior required of a closed list.
///
/// Membership is structural: a candidate is closed when any
/// expanded candidate has an equal [SearchState::state].
pub trait ClosedList: Default {
    type Candidate: SearchState;

    fn contains(&self, candidate: &Self::Candidate) -> bool;

    fn insert(&mut self, candidate: &Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Closed list which compares against every expanded state in turn.
#[derive(Debug)]
pub struct LinearClosed<S>
where
    S: SearchState,
{
    states: Vec<S::State>,
}

impl<S> Default for LinearClosed<S>
where
    S: SearchState,
{
    fn default() -> Self {
        LinearClosed { states: Vec::new() }
    }
}

impl<S> ClosedList for LinearClosed<S>
where
    S: SearchState,
{
    type Candidate = S;

    fn contains(&self, candidate: &S) -> bool {
        let state = candidate.state();
        self.states.iter().any(|s| *s == state)
    }

    fn insert(&mut self, candidate: &S) {
        self.states.push(candidate.state());
    }

    fn len(&self) -> usize {
        self.states.len()
    }
}

/// Closed list backed by a hash set of states.
#[derive(Debug)]
pub struct HashedClosed<S>
where
    S: SearchState,
{
    states: HashSet<S::State>,
}

impl<S> Default for HashedClosed<S>
where
    S: SearchState,
{
    fn default() -> Self {
        HashedClosed {
            states: HashSet::default(),
        }
    }
}

impl<S> ClosedList for HashedClosed<S>
where
    S: SearchState,
{
    type Candidate = S;

    fn contains(&self, candidate: &S) -> bool {
        self.states.contains(&candidate.state())
    }

    fn insert(&mut self, candidate: &S) {
        self.states.insert(candidate.state());
    }

    fn len(&self) -> usize {
        self.states.len()
    }
}
