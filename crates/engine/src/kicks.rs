//! rotation systems and the SRS kick tables
//! SRS kicks are derived from per-orientation offset tables: offset[from][i] - offset[to][i]

use placer_core::{Offset, Orientation, Rotation, Shape};

const fn o(x: i8, y: i8) -> Offset {
    Offset::new(x, y)
}

/// Offset table for T, L, J, S and Z, indexed by orientation.
const THREE_WIDE_OFFSETS: [[Offset; 5]; 4] = [
    [o(0, 0), o(0, 0), o(0, 0), o(0, 0), o(0, 0)],
    [o(0, 0), o(1, 0), o(1, -1), o(0, 2), o(1, 2)],
    [o(0, 0), o(0, 0), o(0, 0), o(0, 0), o(0, 0)],
    [o(0, 0), o(-1, 0), o(-1, -1), o(0, 2), o(-1, 2)],
];

const I_OFFSETS: [[Offset; 5]; 4] = [
    [o(0, 0), o(-1, 0), o(2, 0), o(-1, 0), o(2, 0)],
    [o(-1, 0), o(0, 0), o(0, 0), o(0, 1), o(0, -2)],
    [o(-1, 1), o(1, 1), o(-2, 1), o(1, 0), o(-2, 0)],
    [o(0, 1), o(0, 1), o(0, 1), o(0, -1), o(0, 2)],
];

// O rotates about a point, so its single "kick" recentres the 2x2 block.
const O_OFFSETS: [[Offset; 5]; 4] = [
    [o(0, 0), o(0, 0), o(0, 0), o(0, 0), o(0, 0)],
    [o(0, -1), o(0, 0), o(0, 0), o(0, 0), o(0, 0)],
    [o(-1, -1), o(0, 0), o(0, 0), o(0, 0), o(0, 0)],
    [o(-1, 0), o(0, 0), o(0, 0), o(0, 0), o(0, 0)],
];

const fn offset_table(shape: Shape) -> &'static [[Offset; 5]; 4] {
    match shape {
        Shape::I => &I_OFFSETS,
        Shape::O => &O_OFFSETS,
        _ => &THREE_WIDE_OFFSETS,
    }
}

const fn kick_count(shape: Shape) -> usize {
    match shape {
        Shape::O => 1,
        _ => 5,
    }
}

/// KICKS[shape][from][rotation]
const fn build_kicks() -> [[[[Offset; 5]; 2]; 4]; 7] {
    let mut table = [[[[Offset::ZERO; 5]; 2]; 4]; 7];
    let mut s = 0;
    while s < 7 {
        let offsets = offset_table(Shape::ALL[s]);
        let mut from = 0;
        while from < 4 {
            let mut r = 0;
            while r < 2 {
                // cw lands on from + 1, ccw on from + 3
                let to = (from + 1 + 2 * r) & 3;
                let mut i = 0;
                while i < 5 {
                    table[s][from][r][i] = offsets[from][i].minus(offsets[to][i]);
                    i += 1;
                }
                r += 1;
            }
            from += 1;
        }
        s += 1;
    }
    table
}

static KICKS: [[[[Offset; 5]; 2]; 4]; 7] = build_kicks();

/// Translations to try, in order, when rotating `shape` out of `from`.
/// One entry for O, five for everything else.
pub fn kicks(shape: Shape, from: Orientation, rotation: Rotation) -> &'static [Offset] {
    &KICKS[shape.index()][from.index()][rotation.index()][..kick_count(shape)]
}

/// Source of kick sequences. The search tries each translation in order and
/// takes the first one that fits.
pub trait RotationSystem: Sync {
    fn kicks(&self, shape: Shape, from: Orientation, rotation: Rotation) -> &[Offset];
}

/// The guideline Super Rotation System.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Srs;

impl RotationSystem for Srs {
    #[inline]
    fn kicks(&self, shape: Shape, from: Orientation, rotation: Rotation) -> &[Offset] {
        kicks(shape, from, rotation)
    }
}
