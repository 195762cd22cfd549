//! shared fixtures: board parsing and a cell-by-cell breadth-first reference search

#![allow(dead_code)]

use placer_core::{Board, Orientation, Piece, Rotation, Shape};
use placer_engine::{AllowMove, RotationSystem, Srs};
use std::collections::{BTreeSet, VecDeque};

/// Highest reference row the reference search explores.
const REFERENCE_CEILING: i32 = 72;

/// Rows listed top first, `#` marks an occupied cell. The last row is row 0.
pub fn board_from_rows(rows: &[&str]) -> [u64; 10] {
    let mut cols = [0u64; 10];
    for (i, row) in rows.iter().enumerate() {
        let y = rows.len() - 1 - i;
        for (x, ch) in row.chars().enumerate() {
            if ch == '#' {
                cols[x] |= 1 << y;
            }
        }
    }
    cols
}

pub fn narrow<T: TryFrom<u64>>(cols: [u64; 10]) -> [T; 10]
where
    T::Error: std::fmt::Debug,
{
    cols.map(|c| T::try_from(c).unwrap())
}

pub fn collides(board: &[u64; 10], piece: Piece, x: i32, y: i32) -> bool {
    piece.cells().iter().any(|c| {
        let (cx, cy) = (x + c.x as i32, y + c.y as i32);
        !(0..Board::WIDTH as i32).contains(&cx) || cy < 0 || (cy < 64 && (board[cx as usize] >> cy) & 1 == 1)
    })
}

/// Lock positions found by walking single moves and SRS rotations from the spawn.
/// Rows above 63 count as open air.
pub fn reference_locks(
    board: &[u64; 10],
    shape: Shape,
    spawn: Orientation,
    spawn_x: i32,
    spawn_y: i32,
) -> BTreeSet<(Orientation, usize, u32)> {
    reference_search(&Srs, AllowMove::Softdrop, board, shape, spawn, spawn_x, spawn_y)
}

/// `reference_locks` with an explicit rotation system and move rule. Under
/// `Harddrop` the walk uses shifts and rotations only, then drops every visited
/// position straight down.
pub fn reference_search(
    rotation_system: &impl RotationSystem,
    moves: AllowMove,
    board: &[u64; 10],
    shape: Shape,
    spawn: Orientation,
    spawn_x: i32,
    spawn_y: i32,
) -> BTreeSet<(Orientation, usize, u32)> {
    let spawn = if shape == Shape::O { Orientation::North } else { spawn };
    let mut locks = BTreeSet::new();
    if collides(board, Piece::new(shape, spawn), spawn_x, spawn_y) {
        return locks;
    }

    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    seen.insert((spawn.index(), spawn_x, spawn_y));
    queue.push_back((spawn, spawn_x, spawn_y));

    while let Some((orientation, x, y)) = queue.pop_front() {
        let piece = Piece::new(shape, orientation);
        let mut landing = y;
        while !collides(board, piece, x, landing - 1) {
            landing -= 1;
        }
        if moves == AllowMove::Harddrop || landing == y {
            locks.insert((orientation, x as usize, landing as u32));
        }

        let mut next = vec![(orientation, x - 1, y), (orientation, x + 1, y)];
        if moves == AllowMove::Softdrop {
            next.push((orientation, x, y - 1));
        }
        if shape != Shape::O {
            for rotation in Rotation::ALL {
                let to = piece.rotate(rotation);
                let kicked = rotation_system
                    .kicks(shape, orientation, rotation)
                    .iter()
                    .map(|k| (x + k.x as i32, y + k.y as i32))
                    .find(|&(nx, ny)| !collides(board, to, nx, ny));
                if let Some((nx, ny)) = kicked {
                    next.push((to.orientation, nx, ny));
                }
            }
        }

        for (o, nx, ny) in next {
            if ny > REFERENCE_CEILING || collides(board, Piece::new(shape, o), nx, ny) {
                continue;
            }
            if seen.insert((o.index(), nx, ny)) {
                queue.push_back((o, nx, ny));
            }
        }
    }
    locks
}

pub fn engine_locks<T: placer_engine::Lane>(p: &placer_engine::Placements<T>) -> BTreeSet<(Orientation, usize, u32)> {
    p.iter().collect()
}
