//! Auxiliary row index used to accelerate multiplication
//!
//! Groups a matrix's stored elements by row so that the nonzero columns of a
//! row can be enumerated without scanning the whole matrix.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::entry::Shape;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

/// Nonzero `(col, value)` pairs of a matrix, grouped by row
///
/// Rows with no stored element have no slot. Pairs within a row are kept in
/// the order the matrix yields them. The shape of the source matrix is kept
/// so the index can be validated as a right operand.
#[derive(Debug, Clone)]
pub struct RowIndex<T> {
    shape: Shape,
    rows: HashMap<usize, Vec<(usize, T)>>,
    nnz: usize,
}

impl<T: MatrixElement> RowIndex<T> {
    /// Build the index in one pass over the stored elements
    pub fn build(matrix: &SparseMatrix<T>) -> Self {
        let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (coord, value) in matrix.iter() {
            rows.entry(coord.row).or_default().push((coord.col, value));
        }

        Self {
            shape: matrix.shape(),
            rows,
            nnz: matrix.nnz(),
        }
    }

    /// Shape of the indexed matrix
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Stored elements of a row, `None` when the row is entirely zero
    pub fn row(&self, row: usize) -> Option<&[(usize, T)]> {
        self.rows.get(&row).map(Vec::as_slice)
    }

    /// Number of rows holding at least one element
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of indexed elements
    pub fn nnz(&self) -> usize {
        self.nnz
    }

    /// Average number of elements per non-empty row
    pub fn avg_row_degree(&self) -> f64 {
        if self.rows.is_empty() {
            0.0
        } else {
            self.nnz as f64 / self.rows.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_groups_by_row() {
        let b: SparseMatrix = SparseMatrix::from_entries(3, 3, [(0, 0, 3), (2, 1, 4), (2, 2, 5)]);
        let index = RowIndex::build(&b);

        assert_eq!(index.row(0), Some(&[(0, 3)][..]));
        assert!(index.row(1).is_none());

        let mut row2 = index.row(2).map(<[_]>::to_vec).unwrap_or_default();
        row2.sort_unstable();
        assert_eq!(row2, vec![(1, 4), (2, 5)]);

        assert_eq!(index.shape(), Shape::new(3, 3));
        assert_eq!(index.row_count(), 2);
        assert_eq!(index.nnz(), 3);
        assert_eq!(index.avg_row_degree(), 1.5);
    }

    #[test]
    fn test_empty_matrix() {
        let index = RowIndex::build(&SparseMatrix::<i64>::new(4, 4));
        assert_eq!(index.row_count(), 0);
        assert_eq!(index.avg_row_degree(), 0.0);
        assert!(index.row(0).is_none());
    }
}
