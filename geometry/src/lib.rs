#![deny(clippy::all)]

//! Occupancy grids and pathfinding on them.

pub mod cell;
pub mod grid;
pub mod path;
pub mod pathfinder;

pub use cell::{Cell, Direction, ParseCellError};
pub use grid::{CellEncoding, CellState, Grid, GridError, MAX_CELLS};
pub use path::{Path, PathError};
pub use pathfinder::{Pathfinder, Strategy};

/// Data type used for coordinates
pub type Position = usize;
