//! Shape compatibility checks for binary operations

use crate::entry::Shape;
use crate::error::{MatrixError, Operation};

/// Validate that two operands have identical shapes
///
/// Used for addition and subtraction.
pub const fn validate_elementwise(op: Operation, lhs: Shape, rhs: Shape) -> Result<(), MatrixError> {
    if lhs.rows != rhs.rows || lhs.cols != rhs.cols {
        return Err(MatrixError::DimensionMismatch { op, lhs, rhs });
    }
    Ok(())
}

/// Validate that `lhs * rhs` is defined (`lhs.cols == rhs.rows`)
pub const fn validate_product(lhs: Shape, rhs: Shape) -> Result<(), MatrixError> {
    if lhs.cols != rhs.rows {
        return Err(MatrixError::DimensionMismatch {
            op: Operation::Multiply,
            lhs,
            rhs,
        });
    }
    Ok(())
}

/// Shape of `lhs * rhs`, or the mismatch error
pub const fn product_shape(lhs: Shape, rhs: Shape) -> Result<Shape, MatrixError> {
    match validate_product(lhs, rhs) {
        Ok(()) => Ok(Shape::new(lhs.rows, rhs.cols)),
        Err(err) => Err(err),
    }
}
