//! spawn seeding - the starting reachable set for the spawn orientation
//! a clean spawn row lets the piece fall through open air, so seed the whole band at once

use crate::columns::{Columns, WIDTH};
use crate::lane::Lane;
use placer_core::Piece;

/// True when some cell of `piece` with its reference at (x, y) is off the
/// board or occupied in `board`. Rows past the top of the lane count as open.
pub fn is_blocked<T: Lane>(board: &Columns<T>, piece: Piece, x: usize, y: u32) -> bool {
    piece.cells().iter().any(|c| {
        let cx = x as i32 + c.x as i32;
        let cy = y as i32 + c.y as i32;
        !(0..WIDTH as i32).contains(&cx) || cy < 0 || board.get(cx as usize, cy as u32)
    })
}

/// True when the set cells of row `y` form at most one contiguous run.
#[inline]
pub fn is_continuous_line<T: Lane>(mask: &Columns<T>, y: u32) -> bool {
    let row = mask.row(y);
    let lowest = row & row.wrapping_neg();
    row & row.wrapping_add(lowest) == 0
}

/// Rows a piece can sweep through straight down from `spawn_y` without
/// passing under an overhang: from `spawn_y` down to just above the highest
/// row `h < spawn_y` where some lane is free at `h` but blocked at `h + 1`.
pub fn spawn_band<T: Lane>(free: &Columns<T>, spawn_y: u32) -> T {
    let overhangs = free.and_not(free.shift_down(1, true)).used_rows() & T::low_mask(spawn_y);
    let band = T::low_mask(spawn_y + 1);
    match overhangs.msb_index() {
        -1 => band,
        h => band & !T::low_mask(h as u32 + 1),
    }
}

/// Band of `spawn_band` intersected with the free mask.
pub fn spawn_area<T: Lane>(free: &Columns<T>, spawn_y: u32) -> Columns<T> {
    Columns::square(spawn_band(free, spawn_y)) & *free
}

/// Initial reachable set for the spawn orientation.
///
/// `free` is that orientation's reduced free mask. A blocked spawn cell yields
/// an empty seed. Otherwise a continuous spawn row seeds its whole band, and a
/// split row seeds only the spawn cell and leaves the rest to propagation.
pub fn seed<T: Lane>(free: &Columns<T>, spawn_x: usize, spawn_y: u32) -> Columns<T> {
    if !free.get(spawn_x, spawn_y) {
        return Columns::zero();
    }
    if is_continuous_line(free, spawn_y) {
        spawn_area(free, spawn_y)
    } else {
        Columns::single(spawn_x, spawn_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rows listed top first, `X` marks a set cell. The last row is row 0.
    fn parse<T: Lane>(rows: &[&str]) -> Columns<T> {
        let mut cols = Columns::zero();
        for (i, row) in rows.iter().enumerate() {
            let y = (rows.len() - 1 - i) as u32;
            for (x, ch) in row.chars().enumerate() {
                if ch == 'X' {
                    cols.set(x, y);
                }
            }
        }
        cols
    }

    #[test]
    fn test_continuous_rows() {
        let cases = [
            ("X.........", true),
            (".........X", true),
            ("XX...XX..X", false),
            ("XXXX.XXXXX", false),
            ("..XXXXXX..", true),
            ("XXXXXXXXXX", true),
            ("..........", true),
        ];
        for (row, expected) in cases {
            let mask: Columns<u8> = parse(&[row]);
            assert_eq!(is_continuous_line(&mask, 0), expected, "{row}");
        }
    }

    #[test]
    fn test_open_column_seeds_to_floor() {
        let free: Columns<u8> = parse(&[
            "XXXXXXXXXX",
            "XXXXXXXXXX",
            "XXXXXXXXXX",
            "XXXXXXXXXX",
            "XXXXXXXXXX",
            "XXXX..XXXX",
            "XXX....XXX",
            "XX......XX",
        ]);
        // spawn row clamps to the top bit
        assert_eq!(spawn_area(&free, 7), free);
    }

    #[test]
    fn test_band_stops_above_overhang() {
        let free: Columns<u16> = parse(&[
            "XXXXXXXXX.", // 4
            "..XXXX....", // 3
            "X.........", // 2
            "X........X", // 1
            "X.......XX", // 0
        ]);
        // highest overhang is lane 0: free at 2, blocked at 3
        let expected: Columns<u16> = parse(&["XXXXXXXXX.", "..XXXX....", "..........", "..........", ".........."]);
        assert_eq!(spawn_area(&free, 4), expected);
        assert_eq!(seed(&free, 4, 4), expected);
    }

    #[test]
    fn test_split_row_seeds_single_cell() {
        let free: Columns<u8> = parse(&["XXX..XXXXX", "XXXXXXXXXX"]);
        assert_eq!(seed(&free, 1, 1), Columns::single(1, 1));
    }

    #[test]
    fn test_spawn_piece_cells_checked() {
        use placer_core::{Orientation, Shape};

        let t = Piece::new(Shape::T, Orientation::North);
        let mut board = Columns::<u8>::zero();
        assert!(!is_blocked(&board, t, 4, 6));
        // the cell above the reference
        board.set(4, 7);
        assert!(is_blocked(&board, t, 4, 6));
        assert!(!is_blocked(&board, t, 6, 6));
        // off the left wall and below the floor
        assert!(is_blocked(&Columns::<u8>::zero(), t, 0, 3));
        let i_east = Piece::new(Shape::I, Orientation::East);
        assert!(is_blocked(&Columns::<u8>::zero(), i_east, 4, 1));
        assert!(!is_blocked(&Columns::<u8>::zero(), i_east, 4, 7));
    }

    #[test]
    fn test_blocked_spawn_is_empty() {
        let free: Columns<u8> = parse(&["XXXX.XXXXX", "XXXXXXXXXX"]);
        assert!(seed(&free, 4, 1).is_empty());
    }
}
