//! Cells on a grid, addressed by row and column.

use std::cmp;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

/// A movement direction on the grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// Enumerates all directions of movement, clockwise from up.
    ///
    /// This is the order in which searches try neighboring cells.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A location on the grid.
///
/// Rows grow downward and columns grow to the right,
/// with `(0, 0)` in the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub row: Position,
    pub col: Position,
}

impl Cell {
    /// Build a new cell from coordinates.
    pub fn new(row: Position, col: Position) -> Self {
        Self { row, col }
    }

    /// Returns the cell at (0, 0)
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Step in a given direction.
    ///
    /// There are no cells above the first row or left of the
    /// first column, so stepping there gives `None`.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Cell::new(row, self.col)),
            Direction::Down => Some(Cell::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Cell::new(self.row, col)),
            Direction::Right => Some(Cell::new(self.row, self.col + 1)),
        }
    }

    /// Iterate over all adjacent cells.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().filter_map(move |d| self.step(d))
    }

    /// Check if a cell is adjacent.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(*other) == 1
    }

    /// Manhattan distance between two cells is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Cell) -> Position {
        abs_diff(self.row, other.row) + abs_diff(self.col, other.col)
    }

    /// Straight line distance between the centers of two cells.
    pub fn euclidean_distance(self, other: Cell) -> f64 {
        let dr = abs_diff(self.row, other.row) as f64;
        let dc = abs_diff(self.col, other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// What direction connects these two cells?
    ///
    /// If they are not adjacent, return `None`.
    pub fn direction(self, other: Cell) -> Option<Direction> {
        Direction::all().find(|&d| self.step(d) == Some(other))
    }
}

fn abs_diff(a: Position, b: Position) -> Position {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl cmp::Ord for Cell {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl cmp::PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(Position, Position)> for Cell {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            row: coordinates.0,
            col: coordinates.1,
        }
    }
}

/// Error when parsing a cell from string.
#[derive(Debug, Error, PartialEq)]
pub enum ParseCellError {
    #[error("Invalid Cell: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParseCellError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParseCellError::InvalidNumber
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Parses `row,col`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\(?\s*(?P<row>\d+)\s*,\s*(?P<col>\d+)\s*\)?\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParseCellError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["row"].parse()?, cap["col"].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell() {
        let cell = Cell::new(1, 1);

        assert_eq!(cell.step(Direction::Up), Some(Cell::new(0, 1)));
        assert_eq!(cell.step(Direction::Down), Some(Cell::new(2, 1)));
        assert_eq!(cell.step(Direction::Left), Some(Cell::new(1, 0)));
        assert_eq!(cell.step(Direction::Right), Some(Cell::new(1, 2)));

        assert_eq!(&cell.to_string(), "1,1");

        assert_eq!(
            cell.adjacent().collect::<Vec<_>>(),
            vec![
                Cell::new(0, 1),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(1, 0)
            ]
        );
    }

    #[test]
    fn edges_of_the_grid() {
        let origin = Cell::origin();
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(
            origin.adjacent().collect::<Vec<_>>(),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-12);
        assert!(a.euclidean_distance(b) <= a.manhattan_distance(b) as f64);
        assert!(Cell::new(1, 0).is_adjacent(&a));
        assert!(!Cell::new(1, 1).is_adjacent(&a));
    }

    #[test]
    fn direction() {
        let cell = Cell::new(2, 2);
        for d in Direction::all() {
            let next = cell.step(d).unwrap();
            assert_eq!(cell.direction(next), Some(d));
            assert_eq!(next.direction(cell), Some(d.reverse()));
        }
        assert_eq!(cell.direction(Cell::new(3, 3)), None);
    }

    #[test]
    fn parse() {
        assert_eq!("3,4".parse::<Cell>(), Ok(Cell::new(3, 4)));
        assert_eq!(" (0, 12) ".parse::<Cell>(), Ok(Cell::new(0, 12)));
        assert_eq!(
            "3;4".parse::<Cell>(),
            Err(ParseCellError::InvalidLiteral("3;4".to_string()))
        );
        assert_eq!(
            "99999999999999999999999,1".parse::<Cell>(),
            Err(ParseCellError::InvalidNumber)
        );
    }

    #[test]
    fn ordering() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }
}
