#![no_std]

//! sparsemat core - sparse integer matrix representation and arithmetic
//!
//! This crate provides the coordinate-keyed sparse matrix type together with
//! exact-integer addition, subtraction and multiplication. It performs no I/O;
//! reading and writing matrices lives in the `sparsemat` crate.
//!
//! ```
//! use sparsemat_core::SparseMatrix;
//!
//! let a: SparseMatrix = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 2)]);
//! let b: SparseMatrix = SparseMatrix::from_entries(2, 2, [(0, 0, 3), (1, 0, 4)]);
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.get_element(0, 0), 11);
//! assert_eq!(c.nnz(), 1);
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entry;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod row_index;
pub mod traits;
pub mod validation;

pub use entry::{Coord, Entry, Shape};
pub use error::{MatrixError, Operation, Result, UnknownOperation};
pub use matrix::SparseMatrix;
pub use row_index::RowIndex;
pub use traits::{MatrixElement, MatrixOperations, SparseAccess};
