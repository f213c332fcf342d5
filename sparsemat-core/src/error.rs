//! Error types for sparse matrix arithmetic

use core::fmt;
use core::str::FromStr;

use crate::entry::{Coord, Shape};

/// Binary operation performed on two matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations, in the order they are offered to users
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Lowercase name used on the command line and in messages
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Noun form used in dimension diagnostics ("addition", ...)
    pub const fn noun(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an operation name is not one of `add`, `subtract`, `multiply`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperation;

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid operation. Choose add, subtract, or multiply.")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownOperation)
    }
}

/// Errors that can occur during matrix arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        op: Operation,
        lhs: Shape,
        rhs: Shape,
    },
    /// An intermediate or final value does not fit the element type
    Overflow { op: Operation, coord: Coord },
}

impl MatrixError {
    /// The operation that failed
    pub fn operation(&self) -> Operation {
        match *self {
            MatrixError::DimensionMismatch { op, .. } | MatrixError::Overflow { op, .. } => op,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "Matrix dimensions do not match for {}: {} and {}",
                op.noun(),
                lhs,
                rhs
            ),
            MatrixError::Overflow { op, coord } => {
                write!(f, "Integer overflow during {} at {}", op.noun(), coord)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for matrix arithmetic
pub type Result<T> = core::result::Result<T, MatrixError>;
