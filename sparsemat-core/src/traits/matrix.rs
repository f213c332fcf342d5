//! Read access traits for sparse matrices

use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::entry::{Entry, Shape};
use crate::validation::check_coord;

/// Minimal read interface of a sparse matrix
///
/// Unlike a dense matrix, an absent element reads as zero.
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the element at the specified position, zero when not stored
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Logical dimensions
    fn shape(&self) -> Shape;

    /// Number of stored (nonzero) elements
    fn nnz(&self) -> usize;

    /// All stored entries in row-major order
    fn sorted_entries(&self) -> Vec<Entry<Self::Element>>;

    /// Number of stored entries outside the logical shape
    fn out_of_bounds_count(&self) -> usize {
        let shape = self.shape();
        self.sorted_entries()
            .iter()
            .filter(|e| check_coord(shape, e.coord()).is_err())
            .count()
    }

    /// Fraction of logical cells that are stored
    fn density(&self) -> f64 {
        let cells = self.shape().cells();
        if cells == 0 {
            0.0
        } else {
            self.nnz() as f64 / cells as f64
        }
    }
}

/// Row and column queries
pub trait MatrixOperations: SparseAccess {
    /// Nonzero elements of a row as `(col, value)`, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Nonzero elements of a column as `(row, value)`, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
