//! Adjacency-list graphs for traversal.

use std::cmp;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{Result, SearchError};

/// Identifier of a node in a [Graph].
pub type NodeId = usize;

/// Largest node count accepted when parsing an edge list.
pub const MAX_PARSED_NODES: usize = 1 << 22;

/// A directed graph stored as one neighbor list per node.
///
/// Nodes are numbered `0..len`. Neighbor lists keep insertion
/// order, and may contain duplicates and self-loops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Create a graph with `nodes` nodes and no edges.
    pub fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.len()
    }

    pub(crate) fn check(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(SearchError::OutOfRange {
                node,
                len: self.len(),
            })
        }
    }

    /// Add a directed edge from `u` to `v`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        self.adjacency[u].push(v);
        Ok(())
    }

    /// Add edges in both directions between `u` and `v`.
    pub fn add_undirected_edge(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(())
    }

    /// The out-edges of `node`, in the order they were added.
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or(SearchError::OutOfRange {
                node,
                len: self.len(),
            })
    }

    /// Iterate through all node identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..self.len()
    }
}

impl FromStr for Graph {
    type Err = SearchError;

    /// Parse an edge list, one directed edge per line.
    ///
    /// Edges are written `u v`, `u,v` or `u -> v`. Blank lines and
    /// lines starting with `#` are ignored. A `nodes: N` line fixes
    /// the number of nodes, otherwise the largest id seen decides.
    /// Either way the count may not exceed [MAX_PARSED_NODES].
    fn from_str(s: &str) -> Result<Self> {
        lazy_static! {
            static ref EDGE: Regex =
                Regex::new(r"^(?P<u>\d+)\s*(?:->|,|\s)\s*(?P<v>\d+)$").unwrap();
            static ref NODES: Regex = Regex::new(r"^nodes:\s*(?P<n>\d+)$").unwrap();
        };

        let mut declared = None;
        let mut implied = 0;
        let mut edges = Vec::new();

        for (n, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = || SearchError::Parse {
                line: n + 1,
                content: line.to_string(),
            };

            if let Some(cap) = NODES.captures(line) {
                declared = Some(cap["n"].parse::<usize>().map_err(|_| invalid())?);
            } else if let Some(cap) = EDGE.captures(line) {
                let u: NodeId = cap["u"].parse().map_err(|_| invalid())?;
                let v: NodeId = cap["v"].parse().map_err(|_| invalid())?;
                let needed = cmp::max(u, v).checked_add(1).ok_or_else(invalid)?;
                implied = cmp::max(implied, needed);
                edges.push((u, v));
            } else {
                return Err(invalid());
            }
        }

        let nodes = declared.unwrap_or(implied);
        if nodes > MAX_PARSED_NODES {
            return Err(SearchError::TooLarge {
                nodes,
                limit: MAX_PARSED_NODES,
            });
        }

        let mut graph = Graph::new(nodes);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Directed graph with a cycle through 0 and 2 and a self-loop on 3.
    pub(crate) fn cyclic() -> Graph {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(3, 3).unwrap();
        g
    }

    /// Undirected four-cycle 0 - 1 - 2 - 3 - 0.
    pub(crate) fn square() -> Graph {
        let mut g = Graph::new(4);
        g.add_undirected_edge(0, 1).unwrap();
        g.add_undirected_edge(1, 2).unwrap();
        g.add_undirected_edge(2, 3).unwrap();
        g.add_undirected_edge(3, 0).unwrap();
        g
    }
}
