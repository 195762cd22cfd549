//! public entry - validate input, pick the narrowest lane width, run, widen back

use crate::columns::{Columns, WIDTH};
use crate::config::{AllowMove, SearchConfig, Spawn};
use crate::error::SearchError;
use crate::free_space::FreeSpaces;
use crate::kicks::{RotationSystem, Srs};
use crate::lane::{used_rows, Lane};
use crate::lock::lock_positions;
use crate::reachability::{drop_down, reachable};
use crate::spawn;
use log::debug;
use placer_core::{Board, Orientation, Piece, Shape};

/// Free rows required above the stack. A vertical I rests with its reference
/// cell up to three rows above the highest block.
pub const CEILING_MARGIN: i32 = 3;

const LANE_WIDTHS: [u32; 4] = [8, 16, 32, 64];

/// Lock positions for one shape, one mask per orientation in North, East,
/// South, West order. O only has North.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placements<T: Lane> {
    pub(crate) shape: Shape,
    pub(crate) locks: [Columns<T>; 4],
}

impl<T: Lane> Placements<T> {
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn orientation_count(&self) -> usize {
        self.shape.orientation_count()
    }

    #[inline]
    pub fn masks(&self) -> &[Columns<T>] {
        &self.locks[..self.orientation_count()]
    }

    /// Lock mask for `orientation`; always empty for orientations the shape does not track.
    #[inline]
    pub fn get(&self, orientation: Orientation) -> &Columns<T> {
        &self.locks[orientation.index()]
    }

    /// True when `orientation` locks with its reference at (x, y). Off-board
    /// positions are never contained.
    pub fn contains(&self, orientation: Orientation, x: usize, y: u32) -> bool {
        x < WIDTH && self.get(orientation).get(x, y)
    }

    /// Total number of lock positions.
    pub fn count(&self) -> u32 {
        self.masks().iter().map(Columns::count_ones).sum()
    }

    /// Every lock position as `(orientation, x, y)`.
    pub fn iter(&self) -> impl Iterator<Item = (Orientation, usize, u32)> + '_ {
        self.masks().iter().enumerate().flat_map(|(r, mask)| {
            let orientation = Orientation::from_index(r);
            mask.cells().map(move |(x, y)| (orientation, x, y))
        })
    }

    /// Masks laid end to end, ten lanes per orientation.
    pub fn as_flat(&self) -> Vec<T> {
        self.masks()
            .iter()
            .flat_map(|mask| mask.lanes().iter().copied())
            .collect()
    }
}

/// Find every lock position of `shape` reachable from the spawn with soft drops
/// and SRS kicks.
///
/// `spawn_y` past the top of the lane width is clamped to the top row, and
/// `spawn_orientation` is ignored for O. The board only needs to leave
/// `CEILING_MARGIN` free rows above its highest block at or below the spawn row.
pub fn search<T: Lane>(
    board: [T; WIDTH],
    shape: Shape,
    spawn_orientation: Orientation,
    spawn_x: u8,
    spawn_y: u8,
) -> Result<Placements<T>, SearchError> {
    let spawn = Spawn {
        orientation: spawn_orientation,
        x: spawn_x,
        y: spawn_y,
    };
    search_using(&Srs, board, shape, spawn, AllowMove::Softdrop)
}

/// `search` with an explicit rotation system and move rule.
///
/// A spawn piece that overlaps the stack or leaves the board finds nothing.
pub fn search_using<T: Lane, R: RotationSystem>(
    rotation_system: &R,
    board: [T; WIDTH],
    shape: Shape,
    spawn: Spawn,
    moves: AllowMove,
) -> Result<Placements<T>, SearchError> {
    if spawn.x as usize >= WIDTH {
        return Err(SearchError::InvalidSpawnPosition { x: spawn.x });
    }
    let top_y = stack_top(&board, spawn.y);
    let mut width = select_width(top_y, T::BITS).ok_or(SearchError::InvalidBoardHeight {
        top_y,
        width: T::BITS,
    })?;

    let orientation = if shape.orientation_count() == 1 {
        Orientation::North
    } else {
        spawn.orientation
    };
    let spawn_x = spawn.x as usize;
    let spawn_y = (spawn.y as u32).min(T::BITS - 1);
    let board = Columns::new(board);
    if spawn::is_blocked(&board, Piece::new(shape, orientation), spawn_x, spawn_y) {
        debug!("{shape:?}: spawn at ({spawn_x}, {spawn_y}) is blocked");
        return Ok(Placements {
            shape,
            locks: [Columns::zero(); 4],
        });
    }
    if moves == AllowMove::Harddrop {
        // shifts and rotations happen at the spawn row, keep it and the rows a kick can reach
        width = select_width(top_y.max(spawn_y as i32 + 2), T::BITS).unwrap_or(T::BITS);
    }
    debug!("{shape:?}: stack top {top_y}, searching {width} rows with {moves:?}");

    let start = (orientation, spawn_x, spawn_y);
    let locks = match width {
        8 => run::<T, u8, R>(rotation_system, board, shape, start, moves),
        16 => run::<T, u16, R>(rotation_system, board, shape, start, moves),
        32 => run::<T, u32, R>(rotation_system, board, shape, start, moves),
        _ => run::<T, u64, R>(rotation_system, board, shape, start, moves),
    };

    let placements = Placements { shape, locks };
    debug!("{shape:?}: {} lock positions", placements.count());
    Ok(placements)
}

/// `search` driven by a config, folding symmetric orientations when asked.
pub fn search_with<T: Lane>(
    board: [T; WIDTH],
    shape: Shape,
    config: &SearchConfig,
) -> Result<Placements<T>, SearchError> {
    let placements = search_using(&Srs, board, shape, config.spawn, config.moves)?;
    Ok(if config.canonical {
        placements.canonical()
    } else {
        placements
    })
}

/// `search_with` on a full 64-row board.
pub fn search_board(board: &Board, shape: Shape, config: &SearchConfig) -> Result<Placements<u64>, SearchError> {
    search_with(*board.columns(), shape, config)
}

/// Highest occupied row at or below `spawn_y`, -1 when there is none.
#[inline]
pub fn stack_top<T: Lane>(board: &[T; WIDTH], spawn_y: u8) -> i32 {
    (used_rows(board) & T::low_mask(spawn_y as u32 + 1)).msb_index()
}

/// Narrowest lane width, no wider than `max_width`, with room above `top_y`.
pub fn select_width(top_y: i32, max_width: u32) -> Option<u32> {
    LANE_WIDTHS
        .into_iter()
        .filter(|&width| width <= max_width)
        .find(|&width| top_y + CEILING_MARGIN < width as i32)
}

fn run<T: Lane, U: Lane, R: RotationSystem>(
    rotation_system: &R,
    board: Columns<T>,
    shape: Shape,
    (orientation, spawn_x, spawn_y): (Orientation, usize, u32),
    moves: AllowMove,
) -> [Columns<T>; 4] {
    let spaces = FreeSpaces::new(!board.convert::<U>(), shape);
    let spawn_y = spawn_y.min(U::BITS - 1);
    let spawn_free = spaces.get(orientation);
    let seed = match moves {
        AllowMove::Softdrop => spawn::seed(spawn_free, spawn_x, spawn_y),
        AllowMove::Harddrop => Columns::single(spawn_x, spawn_y) & *spawn_free,
    };
    let reached = reachable(&spaces, rotation_system, moves, orientation, seed);

    let mut locks = [Columns::zero(); 4];
    for (lock, (reach, free)) in locks.iter_mut().zip(reached.iter().zip(spaces.masks())) {
        let landed = match moves {
            AllowMove::Softdrop => *reach,
            AllowMove::Harddrop => drop_down(*reach, free),
        };
        *lock = lock_positions(&landed, free).convert();
    }
    locks
}
