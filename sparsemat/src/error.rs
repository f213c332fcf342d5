//! Error types for loading, saving and running matrix operations

use std::fmt;
use std::path::PathBuf;

use sparsemat_core::UnknownOperation;
use sparsemat_core::MatrixError;

/// What was wrong with a line of an entry-list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The `rows=` or `cols=` header line is absent
    MissingHeader,
    /// A header line has the wrong key or a non-numeric value
    InvalidHeader,
    /// An entry line is not `(row, col, value)`
    InvalidFormat,
    /// An entry field is not an integer of the expected type
    InvalidNumber,
    /// An entry lies outside the declared shape (bounds checking only)
    OutOfBounds,
    /// The file is not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MalformedKind::MissingHeader => "Missing header",
            MalformedKind::InvalidHeader => "Invalid header",
            MalformedKind::InvalidFormat => "Invalid format",
            MalformedKind::InvalidNumber => "Invalid number format",
            MalformedKind::OutOfBounds => "Entry out of bounds",
            MalformedKind::InvalidUtf8 => "Invalid UTF-8",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced by the sparsemat crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A matrix file could not be opened, read or written
    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input does not follow the entry-list format
    #[error("{kind} at line {line}: {text}")]
    Malformed {
        /// 1-based physical line number
        line: usize,
        kind: MalformedKind,
        text: String,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    InvalidOperation(#[from] UnknownOperation),

    /// Reading prompts or writing results failed
    #[error(transparent)]
    Stream(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Failed to encode JSON")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, kind: MalformedKind, text: impl Into<String>) -> Self {
        Error::Malformed {
            line,
            kind,
            text: text.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Kind of format error, if this is one
    pub fn malformed_kind(&self) -> Option<MalformedKind> {
        match self {
            Error::Malformed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type for sparsemat operations
pub type Result<T> = std::result::Result<T, Error>;
