//! Best-first frontiers, ordered by a node priority.
//!
//! Both frontiers here select the node with the smallest priority
//! key, and among equal keys the one inserted first. [LinearQueue]
//! does so with a scan over the whole frontier, [HeapQueue] with a
//! binary heap keyed on the priority and an insertion counter, so
//! the two always select the same node.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::fmt::Debug;
use std::marker::PhantomData;

use super::arena::{Node, NodeId};
use crate::algorithm::SearchQueue;
use crate::traits::Heuristic;

/// Ranks nodes for a best-first frontier. Lower keys are expanded first.
pub trait Priority<S> {
    type Key: Debug + Copy + Ord;

    fn key(node: &Node<S>) -> Self::Key;
}

/// Greedy best-first: rank by the heuristic estimate alone.
#[derive(Debug)]
pub struct Greedy<H>(PhantomData<H>);

impl<S, H> Priority<S> for Greedy<H>
where
    H: Heuristic<S>,
{
    type Key = usize;

    fn key(node: &Node<S>) -> usize {
        H::estimate(node.candidate())
    }
}

/// A*: rank by f(n) = g(n) + h(n), where g(n) is the node depth.
#[derive(Debug)]
pub struct AStar<H>(PhantomData<H>);

impl<S, H> Priority<S> for AStar<H>
where
    H: Heuristic<S>,
{
    type Key = usize;

    fn key(node: &Node<S>) -> usize {
        node.depth() + H::estimate(node.candidate())
    }
}

/// Frontier kept in insertion order, searched linearly for the minimum.
#[derive(Debug)]
pub struct LinearQueue<S, P>
where
    P: Priority<S>,
{
    entries: Vec<(P::Key, NodeId)>,
    candidate: PhantomData<S>,
}

impl<S, P> Default for LinearQueue<S, P>
where
    P: Priority<S>,
{
    fn default() -> Self {
        LinearQueue {
            entries: Vec::new(),
            candidate: PhantomData,
        }
    }
}

impl<S, P> SearchQueue for LinearQueue<S, P>
where
    P: Priority<S>,
{
    type Candidate = S;

    fn pop(&mut self) -> Option<NodeId> {
        let mut best: Option<(usize, P::Key)> = None;
        for (index, (key, _)) in self.entries.iter().enumerate() {
            if best.map_or(true, |(_, current)| *key < current) {
                best = Some((index, *key));
            }
        }

        // Vec::remove keeps the remaining entries in insertion order.
        best.map(|(index, _)| self.entries.remove(index).1)
    }

    fn push(&mut self, id: NodeId, node: &Node<S>) {
        self.entries.push((P::key(node), id));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug)]
struct Ranked<K> {
    key: K,
    sequence: usize,
    id: NodeId,
}

impl<K: Ord> PartialEq for Ranked<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key.eq(&other.key) && self.sequence.eq(&other.sequence)
    }
}

impl<K: Ord> Eq for Ranked<K> {}

impl<K: Ord> Ord for Ranked<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<K: Ord> PartialOrd for Ranked<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier backed by a binary heap.
#[derive(Debug)]
pub struct HeapQueue<S, P>
where
    P: Priority<S>,
{
    queue: BinaryHeap<Ranked<P::Key>>,
    sequence: usize,
    candidate: PhantomData<S>,
}

impl<S, P> Default for HeapQueue<S, P>
where
    P: Priority<S>,
{
    fn default() -> Self {
        HeapQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
            candidate: PhantomData,
        }
    }
}

impl<S, P> SearchQueue for HeapQueue<S, P>
where
    P: Priority<S>,
{
    type Candidate = S;

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|r| r.id)
    }

    fn push(&mut self, id: NodeId, node: &Node<S>) {
        self.queue.push(Ranked {
            key: P::key(node),
            sequence: self.sequence,
            id,
        });
        self.sequence += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
