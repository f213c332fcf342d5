//! Arithmetic on sparse matrices
//!
//! Every operation validates operand shapes first, borrows both operands
//! immutably and returns a newly allocated matrix.

mod elementwise;
mod multiply;

use core::ops::{Add, Mul, Sub};

use crate::error::{MatrixError, Operation};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

impl<T: MatrixElement> SparseMatrix<T> {
    /// Apply `op` with `self` as the left operand
    pub fn apply(&self, op: Operation, other: &Self) -> Result<Self, MatrixError> {
        match op {
            Operation::Add => self.add(other),
            Operation::Subtract => self.subtract(other),
            Operation::Multiply => self.multiply(other),
        }
    }
}

impl<'a, T: MatrixElement> Add<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>, MatrixError>;

    fn add(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        SparseMatrix::add(self, rhs)
    }
}

impl<'a, T: MatrixElement> Sub<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>, MatrixError>;

    fn sub(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, T: MatrixElement> Mul<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>, MatrixError>;

    fn mul(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        self.multiply(rhs)
    }
}
