//! Sets which remember the nodes a search has already dealt with.
//!
//! A set only ever grows during one search, and every search
//! builds its own.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks visited (or closed) nodes during a traversal.
pub trait VisitedSet<N> {
    /// Mark a node as visited.
    ///
    /// Returns `true` when the node was not visited before.
    fn mark_visited(&mut self, node: N) -> bool;

    fn is_visited(&self, node: &N) -> bool;

    /// Number of nodes visited so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense visited flags for nodes numbered `0..n`.
#[derive(Debug, Clone)]
pub struct VisitedList {
    visited: Vec<bool>,
    count: usize,
}

impl VisitedList {
    pub fn new(nodes: usize) -> Self {
        Self {
            visited: vec![false; nodes],
            count: 0,
        }
    }
}

impl VisitedSet<usize> for VisitedList {
    fn mark_visited(&mut self, node: usize) -> bool {
        if self.visited[node] {
            return false;
        }
        self.visited[node] = true;
        self.count += 1;
        true
    }

    fn is_visited(&self, node: &usize) -> bool {
        self.visited.get(*node).copied().unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Hashed set of finalized nodes, for node types without a dense numbering.
#[derive(Debug, Clone)]
pub struct ClosedSet<N>
where
    N: Eq + Hash,
{
    closed: HashSet<N>,
}

impl<N> Default for ClosedSet<N>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        ClosedSet {
            closed: HashSet::default(),
        }
    }
}

impl<N> VisitedSet<N> for ClosedSet<N>
where
    N: Eq + Hash,
{
    fn mark_visited(&mut self, node: N) -> bool {
        self.closed.insert(node)
    }

    fn is_visited(&self, node: &N) -> bool {
        self.closed.contains(node)
    }

    fn len(&self) -> usize {
        self.closed.len()
    }
}
