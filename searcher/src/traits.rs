use std::fmt::Debug;
use std::hash::Hash;

/// A space which can be searched for a path between two nodes.
///
/// Every step between a node and one of its successors costs one unit.
/// Implementations decide which nodes exist, how they connect, and how
/// far apart two nodes look to the heuristic.
pub trait SearchSpace {
    type Node: Debug + Copy + Eq + Hash;

    /// Can a path start, end or pass through this node?
    fn is_passable(&self, node: &Self::Node) -> bool;

    /// Passable nodes one step away, in a fixed order.
    ///
    /// The order is part of the contract: searches which tie
    /// resolve in favor of the earlier successor.
    fn successors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Estimated remaining cost from `node` to `goal`.
    ///
    /// Must never overestimate the true number of steps for
    /// A* to return the shortest path.
    fn heuristic(&self, node: &Self::Node, goal: &Self::Node) -> f64;
}
