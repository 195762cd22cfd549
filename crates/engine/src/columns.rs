//! ten-lane column vector - every board-shaped mask in the engine
//! all ops are lane-wise and branch-free except the shift distance checks

use crate::lane::{used_rows, Lane};
use placer_core::Offset;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

pub const WIDTH: usize = 10;

/// Ten columns of `T`, lane 0 leftmost. Bit `y` of lane `x` is cell (x, y).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Columns<T: Lane> {
    lanes: [T; WIDTH],
}

impl<T: Lane> Columns<T> {
    #[inline(always)]
    pub const fn new(lanes: [T; WIDTH]) -> Self {
        Self { lanes }
    }

    #[inline(always)]
    pub fn square(value: T) -> Self {
        Self {
            lanes: [value; WIDTH],
        }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::square(T::ZERO)
    }

    #[inline(always)]
    pub fn full() -> Self {
        Self::square(T::FULL)
    }

    /// Mask with only cell (x, y) set.
    pub fn single(x: usize, y: u32) -> Self {
        let mut cols = Self::zero();
        cols.set(x, y);
        cols
    }

    #[inline(always)]
    pub fn lanes(&self) -> &[T; WIDTH] {
        &self.lanes
    }

    #[inline(always)]
    pub fn lane(&self, x: usize) -> T {
        self.lanes[x]
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: u32) -> bool {
        self.lanes[x].test(y)
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: u32) {
        self.lanes[x] |= T::bit(y);
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(|&lane| lane == T::ZERO)
    }

    pub fn count_ones(&self) -> u32 {
        self.lanes.iter().map(|&lane| lane.count_ones()).sum()
    }

    /// Rows with at least one set cell.
    #[inline]
    pub fn used_rows(&self) -> T {
        used_rows(&self.lanes)
    }

    /// Row `y` as a 10-bit mask, bit `x` for lane `x`.
    pub fn row(&self, y: u32) -> u16 {
        self.lanes
            .iter()
            .enumerate()
            .fold(0u16, |acc, (x, &lane)| acc | (u16::from(lane.test(y)) << x))
    }

    /// Lane `x` receives lane `x + n`; contents move west.
    #[inline(always)]
    pub fn shift_left(self, n: usize) -> Self {
        Self {
            lanes: std::array::from_fn(|x| {
                if x + n < WIDTH {
                    self.lanes[x + n]
                } else {
                    T::ZERO
                }
            }),
        }
    }

    /// Lane `x` receives lane `x - n`; contents move east.
    #[inline(always)]
    pub fn shift_right(self, n: usize) -> Self {
        Self {
            lanes: std::array::from_fn(|x| if x >= n { self.lanes[x - n] } else { T::ZERO }),
        }
    }

    /// Bit `y` receives bit `y - n`; the bottom fills with zeros.
    #[inline(always)]
    pub fn shift_up(self, n: u32) -> Self {
        Self {
            lanes: self.lanes.map(|lane| lane.shl_or_zero(n)),
        }
    }

    /// Bit `y` receives bit `y + n`. With `ceil_open` the vacated top rows fill with ones.
    #[inline(always)]
    pub fn shift_down(self, n: u32, ceil_open: bool) -> Self {
        let lanes = if ceil_open {
            self.lanes.map(|lane| !(!lane).shr_or_zero(n))
        } else {
            self.lanes.map(|lane| lane.shr_or_zero(n))
        };
        Self { lanes }
    }

    /// Translate every cell by `offset` (x east, y up). Cells leaving the grid are dropped.
    #[inline]
    pub fn shift(self, offset: Offset) -> Self {
        let dx = offset.x as i32;
        let dy = offset.y as i32;
        let moved = match dx {
            0 => self,
            d if d > 0 => self.shift_right(d as usize),
            d => self.shift_left(d.unsigned_abs() as usize),
        };
        match dy {
            0 => moved,
            d if d > 0 => moved.shift_up(d as u32),
            d => moved.shift_down(d.unsigned_abs(), false),
        }
    }

    #[inline(always)]
    pub fn and_not(self, other: Self) -> Self {
        Self {
            lanes: std::array::from_fn(|x| self.lanes[x] & !other.lanes[x]),
        }
    }

    /// Re-express in another lane width. Rows at or above the target width are dropped.
    #[inline]
    pub fn convert<U: Lane>(self) -> Columns<U> {
        Columns {
            lanes: self.lanes.map(|lane| U::from_u64_truncating(lane.to_u64())),
        }
    }

    /// Set cells as `(x, y)`, lane by lane, bottom to top.
    pub fn cells(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.lanes.iter().enumerate().flat_map(|(x, &lane)| {
            let mut bits = lane.to_u64();
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let y = bits.trailing_zeros();
                bits &= bits - 1;
                Some((x, y))
            })
        })
    }
}

macro_rules! impl_bitop {
    ($tr:ident, $f:ident, $assign:ident, $fa:ident, $op:tt) => {
        impl<T: Lane> $tr for Columns<T> {
            type Output = Self;

            #[inline(always)]
            fn $f(self, rhs: Self) -> Self {
                Self {
                    lanes: std::array::from_fn(|x| self.lanes[x] $op rhs.lanes[x]),
                }
            }
        }

        impl<T: Lane> $assign for Columns<T> {
            #[inline(always)]
            fn $fa(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_bitop!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitop!(BitOr, bitor, BitOrAssign, bitor_assign, |);

impl<T: Lane> BitXor for Columns<T> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            lanes: std::array::from_fn(|x| self.lanes[x] ^ rhs.lanes[x]),
        }
    }
}

impl<T: Lane> Not for Columns<T> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            lanes: self.lanes.map(|lane| !lane),
        }
    }
}
