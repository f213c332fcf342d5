//! Coordinate, shape and entry types

use core::fmt;

/// Composite key of a stored element
///
/// Ordering is row-major, which is the order entries are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Swap row and column
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Logical dimensions of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Check if a coordinate lies inside `[0, rows) x [0, cols)`
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Number of logical cells, saturating on overflow
    pub const fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub const fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A `(row, col, value)` triple
///
/// Entries read out of a matrix always carry a nonzero value. Entries used
/// as construction input may carry zero, which clears the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl<T> From<(usize, usize, T)> for Entry<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self { row, col, value }
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
