//! Matrix element type constraints
//!
//! Matrices hold exact integers. Every arithmetic step goes through the
//! checked operations here so overflow is reported instead of wrapping.
//! Sums of products are accumulated in a wider integer and only narrowed
//! once every contribution is in.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// Trait for types that can be stored as matrix elements
///
/// Implemented for all primitive integer types. The zero value is never
/// stored in a matrix.
pub trait MatrixElement: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Additive identity
    const ZERO: Self;

    /// Check for the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Addition returning `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction returning `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication returning `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Widest integer of the same signedness, used to accumulate products
    type Wide: Copy + Ord + Debug;

    /// Additive identity of [`MatrixElement::Wide`]
    const WIDE_ZERO: Self::Wide;

    /// Exact product in the wide type, `None` if even that overflows
    fn wide_mul(self, rhs: Self) -> Option<Self::Wide>;

    /// Wrapping addition in the wide type, reporting whether it wrapped
    fn overflowing_add_wide(acc: Self::Wide, rhs: Self::Wide) -> (Self::Wide, bool);

    /// Convert a wide value back, `None` when it does not fit
    fn narrow(wide: Self::Wide) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($wide:ty => $($t:ty),* $(,)?) => {
        $(
            impl MatrixElement for $t {
                const ZERO: Self = 0;
                const WIDE_ZERO: $wide = 0;

                type Wide = $wide;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                // Widening to the 128-bit type of the same signedness is lossless
                fn wide_mul(self, rhs: Self) -> Option<$wide> {
                    (self as $wide).checked_mul(rhs as $wide)
                }

                fn overflowing_add_wide(acc: $wide, rhs: $wide) -> ($wide, bool) {
                    acc.overflowing_add(rhs)
                }

                fn narrow(wide: $wide) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i128 => i8, i16, i32, i64, i128, isize);
impl_matrix_element!(u128 => u8, u16, u32, u64, u128, usize);
