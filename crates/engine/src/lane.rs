//! fixed-width column integers - the engine is generic over the row count

use std::fmt::Debug;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

/// One board column as an unsigned integer. Bit `y` is row `y`, row 0 at the bottom.
pub trait Lane:
    Copy
    + Eq
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const FULL: Self;

    /// `self << n`, zero once `n` reaches the width.
    fn shl_or_zero(self, n: u32) -> Self;
    /// `self >> n`, zero once `n` reaches the width.
    fn shr_or_zero(self, n: u32) -> Self;
    fn leading_zeros(self) -> u32;
    fn count_ones(self) -> u32;
    fn to_u64(self) -> u64;
    /// Keeps the low `Self::BITS` bits of `value`.
    fn from_u64_truncating(value: u64) -> Self;

    /// Index of the highest set bit, or -1 when empty.
    #[inline(always)]
    fn msb_index(self) -> i32 {
        if self == Self::ZERO {
            -1
        } else {
            (Self::BITS - 1 - self.leading_zeros()) as i32
        }
    }

    /// Rows `0..rows` set; saturates to `FULL`.
    #[inline(always)]
    fn low_mask(rows: u32) -> Self {
        !Self::FULL.shl_or_zero(rows)
    }

    #[inline(always)]
    fn bit(y: u32) -> Self {
        Self::ONE.shl_or_zero(y)
    }

    #[inline(always)]
    fn test(self, y: u32) -> bool {
        self & Self::bit(y) != Self::ZERO
    }
}

macro_rules! impl_lane {
    ($($t:ty),*) => {$(
        impl Lane for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const FULL: Self = <$t>::MAX;

            #[inline(always)]
            fn shl_or_zero(self, n: u32) -> Self {
                self.checked_shl(n).unwrap_or(0)
            }

            #[inline(always)]
            fn shr_or_zero(self, n: u32) -> Self {
                self.checked_shr(n).unwrap_or(0)
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_u64_truncating(value: u64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_lane!(u8, u16, u32, u64);

/// OR of all ten lanes: every row holding at least one set cell.
#[inline]
pub fn used_rows<T: Lane>(lanes: &[T; 10]) -> T {
    lanes.iter().fold(T::ZERO, |acc, &lane| acc | lane)
}
