//! Rendering a matrix back into entry-list text

use std::io::{self, Write};

use sparsemat_core::SparseAccess;

use super::{COLS_KEY, ROWS_KEY};

/// Write a matrix in entry-list format, entries in row-major order
pub fn write_matrix<W, M>(mut out: W, matrix: &M) -> io::Result<()>
where
    W: Write,
    M: SparseAccess + ?Sized,
{
    let shape = matrix.shape();
    writeln!(out, "{ROWS_KEY}={}", shape.rows)?;
    writeln!(out, "{COLS_KEY}={}", shape.cols)?;
    for entry in matrix.sorted_entries() {
        writeln!(out, "{entry}")?;
    }
    out.flush()
}

/// Render a matrix in entry-list format
pub fn to_text<M: SparseAccess + ?Sized>(matrix: &M) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_matrix(&mut buffer, matrix);
    String::from_utf8_lossy(&buffer).into_owned()
}
