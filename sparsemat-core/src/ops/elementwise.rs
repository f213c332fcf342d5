//! Addition and subtraction by merging two sparse maps

use tracing::{debug, trace};

use crate::entry::Coord;
use crate::error::{MatrixError, Operation};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::validate_elementwise;

impl<T: MatrixElement> SparseMatrix<T> {
    /// Compute `self + other`
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] when the shapes differ.
    /// Entries that cancel to zero are not stored in the result.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.merge(other, Operation::Add, T::checked_add)
    }

    /// Compute `self - other`
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] when the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.merge(other, Operation::Subtract, T::checked_sub)
    }

    /// Start from a copy of `self` and fold every entry of `other` into it
    fn merge<F>(&self, other: &Self, op: Operation, combine: F) -> Result<Self, MatrixError>
    where
        F: Fn(T, T) -> Option<T>,
    {
        validate_elementwise(op, self.shape(), other.shape()).map_err(|err| {
            debug!(%err, "rejected operands");
            err
        })?;

        let mut result = Self::with_capacity(self.shape(), self.nnz() + other.nnz());
        for (coord, value) in self.iter() {
            result.set(coord, value);
        }

        for (coord, value) in other.iter() {
            let combined = combine(result.get(coord), value).ok_or_else(|| overflow(op, coord))?;
            result.set(coord, combined);
        }

        trace!(
            op = op.name(),
            lhs_nnz = self.nnz(),
            rhs_nnz = other.nnz(),
            nnz = result.nnz(),
            "merged"
        );
        Ok(result)
    }
}

fn overflow(op: Operation, coord: Coord) -> MatrixError {
    MatrixError::Overflow { op, coord }
}
