use std::fmt;

use thiserror::Error;

/// Which end of a search was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Error produced when a search fails.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("Node {node} is out of range for a graph with {len} nodes")]
    OutOfRange { node: usize, len: usize },

    #[error("The {0} is out of bounds or blocked")]
    InvalidEndpoint(Endpoint),

    #[error("No path to the goal")]
    Unreachable,

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Invalid edge on line {line}: {content:?}")]
    Parse { line: usize, content: String },

    #[error("Graph with {nodes} nodes exceeds the limit of {limit}")]
    TooLarge { nodes: usize, limit: usize },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
