//! Abstract interfaces for sparse matrices and their elements
//!
//! Element arithmetic and read access are expressed as traits so that the
//! I/O layer can render any sparse matrix without knowing its storage.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, SparseAccess};
