//! Operand validation
//!
//! Pure checks run before any arithmetic starts, so a failing operation
//! never produces a partial result.

pub mod bounds;
pub mod shape;

pub use bounds::{check_coord, out_of_bounds};
pub use shape::{validate_elementwise, validate_product, product_shape};
