//! Pathfinding on an occupancy grid.
//!
//! Moves go one cell at a time up, down, left or right, and every
//! move costs the same. The A* heuristic is the straight line
//! distance to the goal, which never overestimates the number of
//! moves left.

use std::fmt;
use std::str::FromStr;

use searcher::{SearchOptions, SearchResult, SearchSpace};
use tracing::debug;

use crate::cell::Cell;
use crate::grid::{CellState, Grid};
use crate::path::Path;

impl SearchSpace for Grid {
    type Node = Cell;

    fn is_passable(&self, node: &Cell) -> bool {
        self.state(*node) == Ok(CellState::Free)
    }

    fn successors(&self, node: &Cell) -> Vec<Cell> {
        self.neighbors(*node).collect()
    }

    fn heuristic(&self, node: &Cell, goal: &Cell) -> f64 {
        node.euclidean_distance(*goal)
    }
}

/// How a [Pathfinder] searches the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Shortest path, guided by the distance to the goal.
    AStar,
    /// Shortest path, by searching outward one step at a time.
    BreadthFirst,
    /// Some path, found by following each corridor to its end
    /// before backing up. Not necessarily the shortest.
    DepthFirst,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::AStar
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::AStar => write!(f, "astar"),
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::DepthFirst => write!(f, "dfs"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Strategy::AStar),
            "bfs" => Ok(Strategy::BreadthFirst),
            "dfs" => Ok(Strategy::DepthFirst),
            _ => Err(format!("Unknown search strategy: {}", s)),
        }
    }
}

/// Implements pathfinding for a grid.
#[derive(Debug, Clone)]
pub struct Pathfinder<'g> {
    grid: &'g Grid,
    options: SearchOptions,
}

impl<'g> Pathfinder<'g> {
    /// Construct a new pathfinder.
    pub(crate) fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Find the shortest path between the start and goal given, using A*.
    pub fn find_path(&self, start: Cell, goal: Cell) -> SearchResult<Path> {
        self.solve(Strategy::AStar, start, goal)
    }

    /// Find the shortest path using breadth-first search.
    pub fn shortest_path(&self, start: Cell, goal: Cell) -> SearchResult<Path> {
        self.solve(Strategy::BreadthFirst, start, goal)
    }

    /// Find any path by depth-first backtracking.
    pub fn depth_first_path(&self, start: Cell, goal: Cell) -> SearchResult<Path> {
        self.solve(Strategy::DepthFirst, start, goal)
    }

    pub fn solve(&self, strategy: Strategy, start: Cell, goal: Cell) -> SearchResult<Path> {
        debug!(%strategy, %start, %goal, "searching grid");
        let cells = match strategy {
            Strategy::AStar => searcher::astar_with_options(self.grid, start, goal, &self.options),
            Strategy::BreadthFirst => {
                searcher::bfs_path_with_options(self.grid, start, goal, &self.options)
            }
            Strategy::DepthFirst => {
                searcher::dfs_path_with_options(self.grid, start, goal, &self.options)
            }
        }?;
        Ok(Path::from_search(cells))
    }
}
