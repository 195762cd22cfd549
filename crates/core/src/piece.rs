//! Tetromino shapes, orientations and the cell offsets of every piece.

use serde::{Deserialize, Serialize};
use std::ops::{Neg, Sub};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Shape {
    T,
    I,
    O,
    L,
    J,
    S,
    Z,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

/// Direction of an in-place rotation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Cw,
    Ccw,
}

/// Relative cell position. `x` grows to the east, `y` grows upward.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: i8,
    pub y: i8,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0, 0);

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Rotate this offset into `orientation`, assuming it is given for North.
    pub const fn rotated(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::North => self,
            Orientation::East => Self::new(self.y, -self.x),
            Orientation::South => Self::new(-self.x, -self.y),
            Orientation::West => Self::new(-self.y, self.x),
        }
    }

    pub const fn minus(self, other: Offset) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        self.minus(rhs)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    pub fn rotate(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Cw => self.cw(),
            Rotation::Ccw => self.ccw(),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Orientation at `index` in North, East, South, West order (wrapping).
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index & 3]
    }
}

impl Rotation {
    pub const ALL: [Rotation; 2] = [Rotation::Cw, Rotation::Ccw];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::T,
        Shape::I,
        Shape::O,
        Shape::L,
        Shape::J,
        Shape::S,
        Shape::Z,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of distinct orientations the engine tracks for this shape.
    /// O is rotation invariant and only ever uses North.
    pub const fn orientation_count(self) -> usize {
        match self {
            Shape::O => 1,
            _ => 4,
        }
    }

    /// Cell offsets in the North orientation. The reference cell is always first.
    pub const fn north_cells(self) -> [Offset; 4] {
        const fn o(x: i8, y: i8) -> Offset {
            Offset::new(x, y)
        }
        match self {
            Shape::T => [o(0, 0), o(-1, 0), o(1, 0), o(0, 1)],
            Shape::I => [o(0, 0), o(-1, 0), o(1, 0), o(2, 0)],
            Shape::O => [o(0, 0), o(1, 0), o(0, 1), o(1, 1)],
            Shape::L => [o(0, 0), o(-1, 0), o(1, 0), o(1, 1)],
            Shape::J => [o(0, 0), o(-1, 0), o(1, 0), o(-1, 1)],
            Shape::S => [o(0, 0), o(-1, 0), o(0, 1), o(1, 1)],
            Shape::Z => [o(0, 0), o(1, 0), o(0, 1), o(-1, 1)],
        }
    }
}

const fn build_cells() -> [[[Offset; 4]; 4]; 7] {
    let mut table = [[[Offset::ZERO; 4]; 4]; 7];
    let mut s = 0;
    while s < 7 {
        let north = Shape::ALL[s].north_cells();
        let mut r = 0;
        while r < 4 {
            let mut c = 0;
            while c < 4 {
                table[s][r][c] = north[c].rotated(Orientation::ALL[r]);
                c += 1;
            }
            r += 1;
        }
        s += 1;
    }
    table
}

static CELLS: [[[Offset; 4]; 4]; 7] = build_cells();

/// A shape in a specific orientation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub shape: Shape,
    pub orientation: Orientation,
}

impl Piece {
    pub const fn new(shape: Shape, orientation: Orientation) -> Self {
        Self { shape, orientation }
    }

    /// The four occupied cells relative to the reference cell.
    pub fn cells(self) -> [Offset; 4] {
        CELLS[self.shape.index()][self.orientation.index()]
    }

    pub fn rotate(self, rotation: Rotation) -> Self {
        Self::new(self.shape, self.orientation.rotate(rotation))
    }
}
