//! canonical placements - fold orientations that cover the same cells
//! I, S and Z repeat their footprint every half turn, O never changes

use crate::columns::Columns;
use crate::lane::Lane;
use crate::search::Placements;
use placer_core::{Orientation, Shape};

/// Reference position of the folded orientation that covers the same cells as
/// `orientation` at (x, y). None when that position falls off the board.
pub fn canonical_position(shape: Shape, orientation: Orientation, x: usize, y: u32) -> Option<(Orientation, usize, u32)> {
    use Orientation::*;
    match (shape, orientation) {
        (Shape::I, South) => Some((North, x.checked_sub(1)?, y)),
        (Shape::I, West) => Some((East, x, y + 1)),
        (Shape::S | Shape::Z, South) => Some((North, x, y.checked_sub(1)?)),
        (Shape::S | Shape::Z, West) => Some((East, x.checked_sub(1)?, y)),
        (Shape::O, East) => Some((North, x, y.checked_sub(1)?)),
        (Shape::O, South) => Some((North, x.checked_sub(1)?, y.checked_sub(1)?)),
        (Shape::O, West) => Some((North, x.checked_sub(1)?, y)),
        _ => Some((orientation, x, y)),
    }
}

impl<T: Lane> Placements<T> {
    /// Merge South into North and West into East wherever they occupy the same
    /// cells, so each distinct resting footprint appears once. T, L, J and O are
    /// returned unchanged.
    pub fn canonical(&self) -> Self {
        let [north, east, south, west] = self.locks;
        let zero = Columns::zero();
        let locks = match self.shape {
            // I-South at x is I-North at x - 1, I-West at y is I-East at y + 1
            Shape::I => [north | south.shift_left(1), east | west.shift_up(1), zero, zero],
            // South at y is North at y - 1, West at x is East at x - 1
            Shape::S | Shape::Z => [
                north | south.shift_down(1, false),
                east | west.shift_left(1),
                zero,
                zero,
            ],
            Shape::T | Shape::L | Shape::J | Shape::O => self.locks,
        };
        Self {
            shape: self.shape,
            locks,
        }
    }

    /// True when some orientation with the same footprint as `orientation` at
    /// (x, y) can lock there. Use `contains` to require the exact orientation.
    pub fn can_reach(&self, orientation: Orientation, x: usize, y: u32) -> bool {
        match canonical_position(self.shape, orientation, x, y) {
            Some((folded, cx, cy)) if cx < crate::columns::WIDTH && cy < T::BITS => {
                self.canonical().contains(folded, cx, cy)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::canonical_position;
    use crate::search::search;
    use placer_core::{Offset, Orientation, Piece, Shape};
    use std::collections::BTreeSet;

    fn footprint(shape: Shape, orientation: Orientation, x: usize, y: u32) -> BTreeSet<(i32, i32)> {
        Piece::new(shape, orientation)
            .cells()
            .iter()
            .map(|&Offset { x: dx, y: dy }| (x as i32 + dx as i32, y as i32 + dy as i32))
            .collect()
    }

    #[test]
    fn test_empty_board_counts() {
        let board = [0u64; 10];
        for (shape, expected) in [(Shape::I, 17), (Shape::S, 17), (Shape::Z, 17), (Shape::T, 34), (Shape::O, 9)] {
            let p = search(board, shape, Orientation::North, 4, 20).unwrap();
            assert_eq!(p.canonical().count(), expected, "{shape:?}");
        }
    }

    #[test]
    fn test_can_reach_any_equivalent_orientation() {
        // only a vertical slot on the right wall
        let mut board = [0u64; 10];
        for lane in board.iter_mut().take(9) {
            *lane = 0b1111;
        }
        let p = search(board, Shape::I, Orientation::North, 4, 20).unwrap();
        assert!(p.contains(Orientation::East, 9, 2));
        assert!(p.contains(Orientation::West, 9, 1));
        assert!(p.can_reach(Orientation::West, 9, 1));
        assert!(p.can_reach(Orientation::East, 9, 2));
        assert!(!p.can_reach(Orientation::East, 9, 3));

        let mut blocks = [0u64; 10];
        blocks[0] = 0b1;
        let s = search(blocks, Shape::S, Orientation::North, 4, 20).unwrap();
        // S-South at (2, 1) covers the same cells as S-North at (2, 0)
        assert_eq!(s.contains(Orientation::South, 2, 1), s.contains(Orientation::North, 2, 0));
        assert!(s.can_reach(Orientation::South, 2, 1));
        assert!(!s.can_reach(Orientation::South, 0, 0));
    }

    #[test]
    fn test_same_footprints() {
        let mut board = [0u16; 10];
        for (x, h) in [(0, 4), (1, 2), (3, 1), (4, 3), (7, 2), (8, 5), (9, 1)] {
            board[x] = (1 << h) - 1;
        }
        for shape in [Shape::I, Shape::S, Shape::Z] {
            let p = search(board, shape, Orientation::North, 4, 20).unwrap();
            let all: BTreeSet<_> = p.iter().map(|(r, x, y)| footprint(shape, r, x, y)).collect();
            let folded: Vec<_> = p.canonical().iter().map(|(r, x, y)| footprint(shape, r, x, y)).collect();
            let unique: BTreeSet<_> = folded.iter().cloned().collect();
            assert_eq!(unique.len(), folded.len(), "{shape:?}");
            assert_eq!(unique, all, "{shape:?}");
        }
    }

    #[test]
    fn test_canonical_position_same_cells() {
        for shape in [Shape::I, Shape::O, Shape::S, Shape::Z] {
            for orientation in Orientation::ALL {
                let (folded, cx, cy) = canonical_position(shape, orientation, 4, 4).unwrap();
                assert_eq!(footprint(shape, orientation, 4, 4), footprint(shape, folded, cx, cy));
            }
        }
        assert_eq!(canonical_position(Shape::I, Orientation::South, 0, 3), None);
    }
}
