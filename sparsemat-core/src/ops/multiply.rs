//! Index-accelerated sparse matrix multiplication

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::entry::Coord;
use crate::error::{MatrixError, Operation};
use crate::matrix::SparseMatrix;
use crate::row_index::RowIndex;
use crate::traits::MatrixElement;
use crate::validation::product_shape;

impl<T: MatrixElement> SparseMatrix<T> {
    /// Compute `self * other`
    ///
    /// Requires `self.num_cols() == other.num_rows()`; the result has shape
    /// `self.num_rows() x other.num_cols()`. Runs in
    /// O(nnz(self) * average row degree of `other`).
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        product_shape(self.shape(), other.shape()).map_err(|err| {
            debug!(%err, "rejected operands");
            err
        })?;

        let index = RowIndex::build(other);
        trace!(
            rows = index.row_count(),
            avg_degree = index.avg_row_degree(),
            "indexed right operand"
        );

        self.multiply_with_index(&index)
    }

    /// Compute `self * other` using an index built once for `other`
    ///
    /// The index carries the shape of the matrix it was built from, which
    /// is checked against `self` like in [`SparseMatrix::multiply`].
    pub fn multiply_with_index(&self, index: &RowIndex<T>) -> Result<Self, MatrixError> {
        let shape = product_shape(self.shape(), index.shape())?;

        let mut cells: HashMap<Coord, Accumulator<T>> = HashMap::new();
        for (coord, a) in self.iter() {
            // Row `coord.col` of the right operand is all zero
            let Some(row) = index.row(coord.col) else {
                continue;
            };

            for &(col, b) in row {
                cells
                    .entry(Coord::new(coord.row, col))
                    .or_insert_with(Accumulator::new)
                    .add_product(a, b);
            }
        }

        let mut result = Self::with_capacity(shape, cells.len());
        let mut overflowed: Option<Coord> = None;
        for (target, cell) in cells {
            match cell.finish() {
                Some(value) => result.set(target, value),
                None => overflowed = Some(overflowed.map_or(target, |c| c.min(target))),
            }
        }

        if let Some(coord) = overflowed {
            return Err(MatrixError::Overflow {
                op: Operation::Multiply,
                coord,
            });
        }

        trace!(lhs_nnz = self.nnz(), nnz = result.nnz(), "multiplied");
        Ok(result)
    }
}

/// Running sum of one product cell
///
/// Partial sums wrap in the wide type and each wrap is counted, so the
/// outcome does not depend on the order the products arrive in. The exact
/// sum is `sum + carries * 2^bits(Wide)`.
struct Accumulator<T: MatrixElement> {
    sum: T::Wide,
    carries: isize,
    exceeded: bool,
}

impl<T: MatrixElement> Accumulator<T> {
    fn new() -> Self {
        Self {
            sum: T::WIDE_ZERO,
            carries: 0,
            exceeded: false,
        }
    }

    fn add_product(&mut self, a: T, b: T) {
        let Some(product) = a.wide_mul(b) else {
            self.exceeded = true;
            return;
        };

        let (sum, wrapped) = T::overflowing_add_wide(self.sum, product);
        if wrapped {
            self.carries += if product > T::WIDE_ZERO { 1 } else { -1 };
        }
        self.sum = sum;
    }

    /// Final value, `None` when it does not fit in `T`
    fn finish(self) -> Option<T> {
        if self.exceeded || self.carries != 0 {
            None
        } else {
            T::narrow(self.sum)
        }
    }
}
