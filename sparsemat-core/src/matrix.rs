//! Coordinate-keyed sparse matrix storage

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::entry::{Coord, Entry, Shape};
use crate::traits::{MatrixElement, MatrixOperations, SparseAccess};
use crate::validation;

/// Sparse matrix of exact integers
///
/// Only nonzero values are stored, keyed by [`Coord`]. The shape is fixed at
/// construction and only used to validate operands; coordinates are not
/// checked against it (see [`SparseMatrix::out_of_bounds`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "MatrixRepr<T>",
        from = "MatrixRepr<T>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    shape: Shape,
    data: HashMap<Coord, T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty (all-zero) matrix
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self::zeros(Shape::new(num_rows, num_cols))
    }

    /// Create an all-zero matrix of the given shape
    pub fn zeros(shape: Shape) -> Self {
        Self {
            shape,
            data: HashMap::new(),
        }
    }

    /// Create a matrix from `(row, col, value)` triples
    ///
    /// Triples are applied in order through [`SparseMatrix::set_element`], so
    /// the last value for a coordinate wins and zero values clear it.
    pub fn from_entries<I, E>(num_rows: usize, num_cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<T>>,
    {
        let mut matrix = Self::new(num_rows, num_cols);
        matrix.extend(entries);
        matrix
    }

    pub(crate) fn with_capacity(shape: Shape, capacity: usize) -> Self {
        Self {
            shape,
            data: HashMap::with_capacity(capacity),
        }
    }

    /// Set an element; a zero value removes any stored entry
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        self.set(Coord::new(row, col), value);
    }

    /// Get an element, zero when not stored
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.get(Coord::new(row, col))
    }

    pub(crate) fn set(&mut self, coord: Coord, value: T) {
        if value.is_zero() {
            self.data.remove(&coord);
        } else {
            self.data.insert(coord, value);
        }
    }

    pub(crate) fn get(&self, coord: Coord) -> T {
        self.data.get(&coord).copied().unwrap_or(T::ZERO)
    }

    /// Check if a nonzero value is stored at the position
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.data.contains_key(&Coord::new(row, col))
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn num_rows(&self) -> usize {
        self.shape.rows
    }

    pub fn num_cols(&self) -> usize {
        self.shape.cols
    }

    /// Number of stored (nonzero) elements
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Check if no element is stored
    pub fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate stored elements in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.data.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Stored elements as triples, sorted by row then column
    pub fn entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<Entry<T>> = self
            .iter()
            .map(|(coord, value)| Entry::new(coord.row, coord.col, value))
            .collect();
        entries.sort_unstable_by_key(|e| e.coord());
        entries
    }

    /// Stored coordinates outside the logical shape, in row-major order
    pub fn out_of_bounds(&self) -> Vec<Coord> {
        validation::out_of_bounds(self.shape, self.data.keys().copied())
    }

    /// Matrix with rows and columns swapped
    pub fn transpose(&self) -> Self {
        Self {
            shape: self.shape.transposed(),
            data: self
                .data
                .iter()
                .map(|(&coord, &value)| (coord.transposed(), value))
                .collect(),
        }
    }
}

/// Entries are applied in order, last write wins and zero values clear
impl<T, E> Extend<E> for SparseMatrix<T>
where
    T: MatrixElement,
    E: Into<Entry<T>>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, entries: I) {
        for entry in entries {
            let entry = entry.into();
            self.set_element(entry.row, entry.col, entry.value);
        }
    }
}

/// Serialized form: shape plus a row-major entry list
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr<T> {
    rows: usize,
    cols: usize,
    entries: Vec<Entry<T>>,
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> From<SparseMatrix<T>> for MatrixRepr<T> {
    fn from(matrix: SparseMatrix<T>) -> Self {
        Self {
            rows: matrix.shape.rows,
            cols: matrix.shape.cols,
            entries: matrix.entries(),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> From<MatrixRepr<T>> for SparseMatrix<T> {
    fn from(repr: MatrixRepr<T>) -> Self {
        SparseMatrix::from_entries(repr.rows, repr.cols, repr.entries)
    }
}

impl<T: MatrixElement> SparseAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        SparseMatrix::get_element(self, row, col)
    }

    fn shape(&self) -> Shape {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }

    fn sorted_entries(&self) -> Vec<Entry<T>> {
        self.entries()
    }

    fn out_of_bounds_count(&self) -> usize {
        self.data
            .keys()
            .filter(|&&coord| !self.shape.contains(coord))
            .count()
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<(usize, T)> = self
            .iter()
            .filter(|(coord, _)| coord.row == row_index)
            .map(|(coord, value)| (coord.col, value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<(usize, T)> = self
            .iter()
            .filter(|(coord, _)| coord.col == col_index)
            .map(|(coord, value)| (coord.row, value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}
