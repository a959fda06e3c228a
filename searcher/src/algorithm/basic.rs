use std::collections::VecDeque;
use std::default::Default;
use std::marker::PhantomData;

use super::arena::{Node, NodeId};
use crate::algorithm::SearchQueue;

/// Strict first-in, first-out frontier for breadth-first search.
///
/// Children are always appended behind every existing entry, and
/// the oldest entry is always selected next.
#[derive(Debug)]
pub struct BreadthQueue<S> {
    queue: VecDeque<NodeId>,
    candidate: PhantomData<S>,
}

impl<S> SearchQueue for BreadthQueue<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn push(&mut self, id: NodeId, _node: &Node<S>) {
        self.queue.push_back(id);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<S> Default for BreadthQueue<S> {
    fn default() -> Self {
        BreadthQueue {
            queue: VecDeque::new(),
            candidate: PhantomData,
        }
    }
}
