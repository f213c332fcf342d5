//! Coordinate bounds checks
//!
//! The matrix itself accepts out-of-range coordinates. These helpers let
//! callers that want strict input reject or report them.

use alloc::vec::Vec;

use crate::entry::{Coord, Shape};

/// Check that a coordinate lies within a shape
pub const fn check_coord(shape: Shape, coord: Coord) -> Result<(), Coord> {
    if shape.contains(coord) {
        Ok(())
    } else {
        Err(coord)
    }
}

/// Collect coordinates that lie outside a shape, in row-major order
pub fn out_of_bounds<I>(shape: Shape, coords: I) -> Vec<Coord>
where
    I: IntoIterator<Item = Coord>,
{
    let mut outside: Vec<Coord> = coords
        .into_iter()
        .filter(|&c| !shape.contains(c))
        .collect();
    outside.sort_unstable();
    outside
}
