//! Generalized search algorithms, especially useful for graph traversal.
//!
//! Breadth-first and depth-first traversal work on an adjacency-list
//! [Graph]. Path searches (A*, and breadth- or depth-first path finding)
//! work on anything which implements [SearchSpace].

pub mod algorithm;
mod errors;
pub mod graph;
mod traits;

pub use errors::Endpoint;
pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::SearchSpace;

pub use algorithm::astar::{astar, astar_with_options, AStarQueue, Scored};
pub use algorithm::basic::{bfs, bfs_path, bfs_path_with_options, BreadthQueue};
pub use algorithm::basic::{dfs, dfs_path, dfs_path_with_options, DepthQueue, DfsVariant};
pub use algorithm::visited::{ClosedSet, VisitedList, VisitedSet};
pub use algorithm::{Frontier, SearchOptions};
pub use graph::{Graph, NodeId, MAX_PARSED_NODES};
