//! sparsemat - sparse integer matrix arithmetic over entry-list text files
//!
//! This crate wraps [`sparsemat_core`] with everything needed to use it from
//! files and a terminal: a reader and writer for the entry-list text format,
//! file loading (memory-mapped when the `mmap` feature is on), result
//! rendering, and the prompt session behind the `sparsemat` binary.
//!
//! ## Text format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 1, 5)
//! (2, 0, -2)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsemat::{parse_matrix, Operation, ReaderConfig, SparseMatrix};
//!
//! fn example() -> sparsemat::Result<()> {
//!     let config = ReaderConfig::default();
//!     let a: SparseMatrix = parse_matrix("rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)", &config)?;
//!     let b: SparseMatrix = parse_matrix("rows=2\ncols=2\n(0, 0, 3)\n(1, 0, 4)", &config)?;
//!
//!     let c = a.apply(Operation::Multiply, &b)?;
//!     assert_eq!(c.get_element(0, 0), 11);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **mmap**: memory-map input files instead of reading them into a buffer
//! - **serde**: JSON rendering of results
//! - **cli**: the `sparsemat` command line binary

// Re-export the core types callers need
pub use sparsemat_core::{
    Coord, Entry, MatrixElement, MatrixError, MatrixOperations, Operation, RowIndex, Shape,
    SparseAccess, SparseMatrix,
};

pub mod command;
pub mod config;
pub mod error;
pub mod file_io;
pub mod prompt;
pub mod render;
pub mod text_format;

pub use command::{execute, load_operands, Request};
pub use config::{DuplicatePolicy, OutputFormat, ReaderConfig};
pub use error::{Error, MalformedKind, Result};
pub use file_io::{load_matrix, save_matrix};
pub use prompt::{Answers, PromptSession};
pub use render::{render_info, render_result};
pub use text_format::{parse_matrix, to_text, write_matrix};
