//! Printing results and matrix summaries

use std::io::Write;

use sparsemat_core::{SparseAccess, SparseMatrix};

use crate::config::OutputFormat;
use crate::error::Result;

/// Print an operation result
///
/// Text output is `Result matrix (R x C):` followed by one `(row, col, value)`
/// line per stored entry in row-major order.
pub fn render_result<W: Write>(mut out: W, matrix: &SparseMatrix, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "Result matrix ({} x {}):",
                matrix.num_rows(),
                matrix.num_cols()
            )?;
            for entry in matrix.entries() {
                writeln!(out, "{entry}")?;
            }
        }
        #[cfg(feature = "serde")]
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, matrix)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Print a short description of a matrix
pub fn render_info<W, M>(mut out: W, matrix: &M) -> Result<()>
where
    W: Write,
    M: SparseAccess + ?Sized,
{
    let shape = matrix.shape();
    writeln!(out, "Dimensions: {} x {}", shape.rows, shape.cols)?;
    writeln!(out, "Non-zero elements: {}", matrix.nnz())?;
    writeln!(out, "Density: {:.6}", matrix.density())?;
    writeln!(out, "Out-of-bounds entries: {}", matrix.out_of_bounds_count())?;
    out.flush()?;
    Ok(())
}
