//! free-space reduction - where each orientation's reference cell can sit
//! one AND-chain of shifted copies per shape instead of four cell lookups per position

use crate::columns::Columns;
use crate::lane::Lane;
use placer_core::{Orientation, Shape};

/// Reduced free masks for one shape, indexed by orientation.
/// Only the first `shape.orientation_count()` entries are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreeSpaces<T: Lane> {
    shape: Shape,
    masks: [Columns<T>; 4],
}

impl<T: Lane> FreeSpaces<T> {
    /// Reduce raw free space (complement of occupancy) for every orientation of `shape`.
    pub fn new(free: Columns<T>, shape: Shape) -> Self {
        Self {
            shape,
            masks: reduce_all(free, shape),
        }
    }

    #[inline(always)]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline(always)]
    pub fn orientation_count(&self) -> usize {
        self.shape.orientation_count()
    }

    #[inline(always)]
    pub fn get(&self, orientation: Orientation) -> &Columns<T> {
        &self.masks[orientation.index()]
    }

    #[inline(always)]
    pub fn masks(&self) -> &[Columns<T>] {
        &self.masks[..self.orientation_count()]
    }
}

/// Per-orientation masks where bit (x, y) is set iff all four cells of the piece
/// with its reference at (x, y) are free. Out-of-board columns and rows below 0
/// count as blocked; rows above the top bit count as free.
pub fn reduce_all<T: Lane>(free: Columns<T>, shape: Shape) -> [Columns<T>; 4] {
    let zero = Columns::zero();
    // neighbour views: bit (x, y) tells whether (x+1, y), (x-1, y), ... is free
    let east = free.shift_left(1);
    let west = free.shift_right(1);
    let above = free.shift_down(1, true);
    let below = free.shift_up(1);

    match shape {
        Shape::O => {
            let pair = free & above;
            [pair & pair.shift_left(1), zero, zero, zero]
        }
        Shape::T => [
            free & east & west & above,
            free & east & above & below,
            free & east & west & below,
            free & west & above & below,
        ],
        Shape::L => [
            free & west & (free & above).shift_left(1),
            free & above & (free & east).shift_up(1),
            free & east & (free & below).shift_right(1),
            free & above & below & above.shift_right(1),
        ],
        Shape::J => [
            free & east & (free & above).shift_right(1),
            free & above & below & above.shift_left(1),
            free & west & (free & below).shift_left(1),
            free & above & (free & west).shift_up(1),
        ],
        Shape::I => {
            let ends = free & free.shift_left(2);
            let north = ends & ends.shift_right(1);
            let tips = free & free.shift_down(2, true);
            let west = tips & tips.shift_up(1);
            [north, west.shift_up(1), north.shift_right(1), west]
        }
        Shape::S => {
            let diag = free & above.shift_left(1);
            let north = diag & diag.shift_right(1);
            let column = free & above;
            let east = column & column.shift_left(1).shift_up(1);
            [north, east, north.shift_up(1), east.shift_right(1)]
        }
        Shape::Z => {
            let diag = free & above.shift_right(1);
            let north = diag & diag.shift_left(1);
            let diag = free & above.shift_left(1);
            let east = diag & diag.shift_up(1);
            [north, east, north.shift_up(1), east.shift_right(1)]
        }
    }
}
