//! Path data structures
//!
//! A path is a sequence of steps between adjacent cells.

use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

use itertools::Itertools;
use thiserror::Error;

use super::{Cell, Direction};

/// Error returned for invalid paths
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    /// A new step added to this path was not adjacent to the
    /// previous step.
    #[error("{0} is not adjacent to the end of the path {1}")]
    NotAdjacentSequence(Cell, Cell),

    #[error("A path must contain at least one cell")]
    Empty,
}

type PathResult<T> = Result<T, PathError>;

/// A sequence of steps on a grid.
///
/// Paths always contain at least their origin.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Cell>,
}

impl TryFrom<Vec<Cell>> for Path {
    type Error = PathError;

    fn try_from(cells: Vec<Cell>) -> PathResult<Self> {
        let mut cells = cells.into_iter();
        let mut path = Path::new(cells.next().ok_or(PathError::Empty)?);
        for cell in cells {
            path.push(cell)?;
        }
        Ok(path)
    }
}

impl Path {
    /// Construct a new path which starts from this cell.
    pub fn new(origin: Cell) -> Self {
        let mut steps = Vec::with_capacity(1);
        steps.push(origin);
        Path { steps }
    }

    /// Wrap cells produced by a search, which are adjacent by construction.
    pub(crate) fn from_search(steps: Vec<Cell>) -> Self {
        debug_assert!(!steps.is_empty());
        Path { steps }
    }

    /// Extend this path by one step to a particular cell.
    pub fn push(&mut self, cell: Cell) -> PathResult<()> {
        let last = *self.destination();
        if !cell.is_adjacent(&last) {
            return Err(PathError::NotAdjacentSequence(cell, last));
        }
        self.steps.push(cell);
        Ok(())
    }

    /// Return a new path after stepping to a particular cell.
    pub fn step_to(&self, cell: Cell) -> PathResult<Self> {
        let mut next = self.clone();
        next.push(cell)?;
        Ok(next)
    }

    /// Return a copy of this path, but reversed.
    pub fn reversed(&self) -> Self {
        let mut steps = self.steps.clone();
        steps.reverse();
        Path { steps }
    }

    /// Where this path started
    pub fn origin(&self) -> &Cell {
        &self.steps[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &Cell {
        &self.steps[self.steps.len() - 1]
    }

    /// How many steps this path takes.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    /// The direction of each step along the path.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps
            .iter()
            .tuple_windows()
            .filter_map(|(a, b)| a.direction(*b))
    }
}

impl Deref for Path {
    type Target = [Cell];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl From<Path> for Vec<Cell> {
    fn from(path: Path) -> Self {
        path.steps
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.steps.iter().map(|c| format!("({})", c)).join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build() {
        let mut path = Path::new(Cell::new(0, 0));
        assert_eq!(path.distance(), 0);
        path.push(Cell::new(0, 1)).unwrap();
        let path = path.step_to(Cell::new(1, 1)).unwrap();

        assert_eq!(path.origin(), &Cell::new(0, 0));
        assert_eq!(path.destination(), &Cell::new(1, 1));
        assert_eq!(path.distance(), 2);
        assert_eq!(path.len(), 3);
        assert_eq!(
            path.directions().collect::<Vec<_>>(),
            vec![Direction::Right, Direction::Down]
        );
        assert_eq!(path.to_string(), "(0,0) (0,1) (1,1)");
        assert_eq!(path.reversed().origin(), &Cell::new(1, 1));
    }

    #[test]
    fn not_adjacent() {
        let path = Path::new(Cell::new(0, 0));
        assert_eq!(
            path.step_to(Cell::new(1, 1)),
            Err(PathError::NotAdjacentSequence(
                Cell::new(1, 1),
                Cell::new(0, 0)
            ))
        );
        assert_eq!(
            Path::try_from(vec![Cell::new(0, 0), Cell::new(0, 2)]),
            Err(PathError::NotAdjacentSequence(
                Cell::new(0, 2),
                Cell::new(0, 0)
            ))
        );
        assert_eq!(Path::try_from(Vec::new()), Err(PathError::Empty));
    }
}
