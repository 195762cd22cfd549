//! board representation - column-major u64s, one bit per cell
//! 64 rows, row 0 at the bottom

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 10x64 occupancy grid. Bit `y` of column `x` is cell (x, y).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Board {
    cols: [u64; 10],
}

impl Board {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from row masks, bottom row first. Bit `x` of a row is column `x`.
    pub fn from_rows(rows: &[u16]) -> Self {
        let mut board = Self::new();
        for (y, &row) in rows.iter().take(Self::HEIGHT).enumerate() {
            for x in 0..Self::WIDTH {
                if (row >> x) & 1 == 1 {
                    board.cols[x] |= 1u64 << y;
                }
            }
        }
        board
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        (self.cols[x] >> y) & 1 == 1
    }

    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if filled {
            self.cols[x] |= 1u64 << y;
        } else {
            self.cols[x] &= !(1u64 << y);
        }
    }

    /// Rows filled in every column, as a bitmask.
    #[inline]
    pub fn filled_rows(&self) -> u64 {
        self.cols.iter().fold(u64::MAX, |acc, &col| acc & col)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        (self.filled_rows() >> y) & 1 == 1
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.cols.iter().all(|&col| (col >> y) & 1 == 0)
    }

    /// Remove every full row, dropping the rows above it. Returns how many rows were cleared.
    pub fn clear_filled_rows(&mut self) -> u32 {
        let filled = self.filled_rows();
        let mut key = filled;
        while key != 0 {
            // rows strictly below the lowest remaining full row
            let below = key.wrapping_sub(1) & !key;
            for col in self.cols.iter_mut() {
                *col = (*col & below) | ((*col >> 1) & !below);
            }
            key = (key >> 1) & !below;
        }
        filled.count_ones()
    }

    /// Row `y` as a 10-bit mask.
    pub fn row(&self, y: usize) -> u16 {
        (0..Self::WIDTH).fold(0u16, |acc, x| acc | (((self.cols[x] >> y) & 1) as u16) << x)
    }

    #[inline]
    pub fn column(&self, x: usize) -> u64 {
        self.cols[x]
    }

    #[inline]
    pub fn columns(&self) -> &[u64; 10] {
        &self.cols
    }

    /// Number of rows up to and including the highest occupied cell.
    pub fn height(&self) -> usize {
        let used = self.cols.iter().fold(0u64, |acc, &col| acc | col);
        (u64::BITS - used.leading_zeros()) as usize
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<u16> = (0..self.height()).map(|y| self.row(y)).collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<u16> = Vec::deserialize(deserializer)?;
        if rows.len() > Board::HEIGHT {
            return Err(serde::de::Error::custom(format!(
                "expected at most {} rows, got {}",
                Board::HEIGHT,
                rows.len()
            )));
        }
        if let Some(bad) = rows.iter().find(|&&row| row >> Board::WIDTH != 0) {
            return Err(serde::de::Error::custom(format!(
                "row mask {bad:#x} has bits outside the {} columns",
                Board::WIDTH
            )));
        }
        Ok(Board::from_rows(&rows))
    }
}
