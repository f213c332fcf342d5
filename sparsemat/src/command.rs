//! Running one operation over two matrix files

use std::path::{Path, PathBuf};

use sparsemat_core::{Operation, SparseMatrix};
use tracing::info;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::file_io::load_matrix;

/// An operation and the two files holding its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub op: Operation,
    pub lhs: PathBuf,
    pub rhs: PathBuf,
}

impl Request {
    pub fn new(op: Operation, lhs: impl Into<PathBuf>, rhs: impl Into<PathBuf>) -> Self {
        Self {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

/// Load both operands and apply the operation
///
/// Both files are read before the operation runs, so a format error in
/// either file is reported ahead of a dimension mismatch.
pub fn execute(request: &Request, config: &ReaderConfig) -> Result<SparseMatrix> {
    let (lhs, rhs) = load_operands(&request.lhs, &request.rhs, config)?;
    apply_logged(request.op, &lhs, &rhs)
}

/// Load the left then the right operand
pub fn load_operands(
    lhs: &Path,
    rhs: &Path,
    config: &ReaderConfig,
) -> Result<(SparseMatrix, SparseMatrix)> {
    let lhs: SparseMatrix = load_matrix(lhs, config)?;
    let rhs: SparseMatrix = load_matrix(rhs, config)?;
    Ok((lhs, rhs))
}

pub(crate) fn apply_logged(
    op: Operation,
    lhs: &SparseMatrix,
    rhs: &SparseMatrix,
) -> Result<SparseMatrix> {
    let result = lhs.apply(op, rhs)?;
    info!(
        %op,
        lhs = %lhs.shape(),
        rhs = %rhs.shape(),
        nnz = result.nnz(),
        "operation complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, MalformedKind};
    use sparsemat_core::{Entry, MatrixError, Shape};
    use std::fs;

    fn fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_execute_multiply() {
        let dir = tempfile::tempdir().unwrap();
        let a = fixture(&dir, "a.txt", "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n");
        let b = fixture(&dir, "b.txt", "rows=2\ncols=2\n(0, 0, 3)\n(1, 0, 4)\n");

        let result = execute(&Request::new(Operation::Multiply, a, b), &ReaderConfig::default())
            .unwrap();
        assert_eq!(result.shape(), Shape::new(2, 2));
        assert_eq!(result.entries(), vec![Entry::new(0, 0, 11)]);
    }

    #[test]
    fn test_execute_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let a = fixture(&dir, "a.txt", "rows=2\ncols=3\n");
        let b = fixture(&dir, "b.txt", "rows=2\ncols=2\n");

        let err = execute(&Request::new(Operation::Multiply, a, b), &ReaderConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Matrix(MatrixError::DimensionMismatch {
                op: Operation::Multiply,
                ..
            })
        ));
    }

    #[test]
    fn test_format_error_reported_first() {
        let dir = tempfile::tempdir().unwrap();
        let a = fixture(&dir, "a.txt", "rows=2\ncols=3\n");
        let b = fixture(&dir, "b.txt", "rows=2\ncols=2\n(0 0 1)\n");

        let err = execute(&Request::new(Operation::Add, a, b), &ReaderConfig::default())
            .unwrap_err();
        assert_eq!(err.malformed_kind(), Some(MalformedKind::InvalidFormat));
    }
}
