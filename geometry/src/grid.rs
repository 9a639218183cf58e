//! Occupancy grids: rectangles of free and blocked cells.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use thiserror::Error;

use crate::cell::Cell;
use crate::path::Path;
use crate::pathfinder::Pathfinder;
use crate::Position;
use searcher::SearchResult;

/// Error returned when building or querying a grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Cell {0} is outside the grid")]
    OutOfRange(Cell),

    #[error("A grid needs at least one row and one column")]
    Empty,

    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid value {value} at {cell}, expected 0 or 1")]
    InvalidValue { cell: Cell, value: i32 },

    #[error("Unexpected map character {found:?} at {cell}")]
    InvalidCharacter { cell: Cell, found: char },

    #[error("A {rows}x{cols} grid has more than {limit} cells")]
    TooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },
}

/// Largest number of cells a single grid may hold.
pub const MAX_CELLS: usize = 1 << 28;

type Result<T> = std::result::Result<T, GridError>;

/// Whether a cell can be walked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Free,
    Blocked,
}

impl CellState {
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Free => write!(f, "."),
            CellState::Blocked => write!(f, "#"),
        }
    }
}

/// Which integer marks a free cell in numeric grid input.
///
/// Mazes have historically been written with `1` for a cell which
/// can be walked on and `0` for a wall, which is the default here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEncoding {
    /// `1` is free, `0` is blocked.
    OneIsFree,
    /// `0` is free, `1` is blocked.
    ZeroIsFree,
}

impl Default for CellEncoding {
    fn default() -> Self {
        CellEncoding::OneIsFree
    }
}

impl CellEncoding {
    fn decode(self, cell: Cell, value: i32) -> Result<CellState> {
        match (self, value) {
            (CellEncoding::OneIsFree, 1) | (CellEncoding::ZeroIsFree, 0) => Ok(CellState::Free),
            (CellEncoding::OneIsFree, 0) | (CellEncoding::ZeroIsFree, 1) => Ok(CellState::Blocked),
            _ => Err(GridError::InvalidValue { cell, value }),
        }
    }
}

/// A rectangular occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Position,
    cols: Position,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid where every cell is free.
    pub fn new(rows: Position, cols: Position) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(GridError::TooLarge {
                rows,
                cols,
                limit: MAX_CELLS,
            })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Free; size],
        })
    }

    /// Build a grid from rows of integer cell values.
    pub fn from_values<R>(values: &[R], encoding: CellEncoding) -> Result<Self>
    where
        R: AsRef<[i32]>,
    {
        let cols = values.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Grid::new(values.len(), cols)?;

        for (row, line) in values.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &value) in line.iter().enumerate() {
                let cell = Cell::new(row, col);
                grid.set(cell, encoding.decode(cell, value)?)?;
            }
        }
        Ok(grid)
    }

    /// Parse a grid written as digits, one row per line.
    ///
    /// Whitespace and commas between digits are ignored, so both
    /// `0010` and `0, 0, 1, 0` describe the same row.
    pub fn from_digits(s: &str, encoding: CellEncoding) -> Result<Self> {
        let mut values: Vec<Vec<i32>> = Vec::new();
        for (row, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut parsed = Vec::new();
            for c in line.chars().filter(|c| !c.is_whitespace() && *c != ',') {
                let cell = Cell::new(row, parsed.len());
                match c.to_digit(10) {
                    Some(d) => parsed.push(d as i32),
                    None => return Err(GridError::InvalidCharacter { cell, found: c }),
                }
            }
            values.push(parsed);
        }
        Grid::from_values(&values, encoding)
    }

    pub fn rows(&self) -> Position {
        self.rows
    }

    pub fn cols(&self) -> Position {
        self.cols
    }

    /// Is `(row, col)` inside the grid?
    pub fn is_valid(&self, row: Position, col: Position) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.is_valid(cell.row, cell.col)
    }

    fn index(&self, cell: Cell) -> Result<usize> {
        if self.contains(cell) {
            Ok(cell.row * self.cols + cell.col)
        } else {
            Err(GridError::OutOfRange(cell))
        }
    }

    pub fn state(&self, cell: Cell) -> Result<CellState> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Can this cell be walked on?
    pub fn is_free(&self, cell: Cell) -> Result<bool> {
        self.state(cell).map(CellState::is_free)
    }

    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<()> {
        let i = self.index(cell)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Mark a cell as a wall.
    pub fn block(&mut self, cell: Cell) -> Result<()> {
        self.set(cell, CellState::Blocked)
    }

    /// Free cells one step from `cell`, in [Direction::all](crate::Direction::all) order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.adjacent()
            .filter(move |&c| self.state(c) == Ok(CellState::Free))
    }

    /// Iterate over every cell in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        iproduct!(0..self.rows, 0..self.cols).map(Cell::from)
    }

    /// Build a re-usable pathfinder for this grid
    pub fn pathfinder(&self) -> Pathfinder<'_> {
        Pathfinder::new(self)
    }

    /// Shortest path on this grid, found with A*.
    pub fn path(&self, start: Cell, goal: Cell) -> SearchResult<Path> {
        self.pathfinder().find_path(start, goal)
    }

    /// Draw the grid with the cells of `path` marked as `*`.
    pub fn render(&self, path: &Path) -> String {
        let marked: HashSet<Cell> = path.iter().copied().collect();
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for cell in self.cells() {
            if marked.contains(&cell) {
                out.push('*');
            } else {
                out.push_str(&self.cells[cell.row * self.cols + cell.col].to_string());
            }
            if cell.col + 1 == self.cols {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for state in row {
                write!(f, "{}", state)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a map drawn with `.` for free cells and `#` for walls.
    fn from_str(s: &str) -> Result<Self> {
        let mut values: Vec<Vec<i32>> = Vec::new();
        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut parsed = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                match c {
                    '.' => parsed.push(1),
                    '#' => parsed.push(0),
                    _ => {
                        return Err(GridError::InvalidCharacter {
                            cell: Cell::new(row, col),
                            found: c,
                        })
                    }
                };
            }
            values.push(parsed);
        }
        Grid::from_values(&values, CellEncoding::OneIsFree)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Four by four maze, written with `0` for free cells.
    pub(crate) fn maze() -> Grid {
        Grid::from_values(
            &[[0, 0, 1, 0], [1, 0, 0, 0], [1, 1, 0, 1], [0, 0, 0, 0]],
            CellEncoding::ZeroIsFree,
        )
        .unwrap()
    }
}
