//! Storage for every node created during a single search run.

/// Handle to a node stored in an [Arena].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A candidate along with its place in the search tree.
#[derive(Debug)]
pub struct Node<S> {
    candidate: S,
    parent: Option<NodeId>,
    depth: usize,
}

impl<S> Node<S> {
    pub fn candidate(&self) -> &S {
        &self.candidate
    }

    /// The node this one was expanded from, or None for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Number of moves from the root, i.e. g(n) under unit cost.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Nodes are only ever appended, so a parent always has a
/// smaller id than its children and parent chains cannot cycle.
#[derive(Debug)]
pub(crate) struct Arena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Default for Arena<S> {
    fn default() -> Self {
        Arena { nodes: Vec::new() }
    }
}

impl<S> Arena<S> {
    pub(crate) fn root(&mut self, candidate: S) -> NodeId {
        self.push(Node {
            candidate,
            parent: None,
            depth: 0,
        })
    }

    pub(crate) fn child(&mut self, parent: NodeId, candidate: S) -> NodeId {
        let depth = self.get(parent).depth + 1;
        self.push(Node {
            candidate,
            parent: Some(parent),
            depth,
        })
    }

    fn push(&mut self, node: Node<S>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk parent links from `id` back to the root, returning
    /// the candidates in root-to-`id` order.
    pub(crate) fn path(&self, id: NodeId) -> Vec<S>
    where
        S: Clone,
    {
        let mut path = Vec::with_capacity(self.get(id).depth + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get(current);
            path.push(node.candidate.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
