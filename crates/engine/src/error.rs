use thiserror::Error;

/// Input rejected before the search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The highest block at or below the spawn row sits at `top_y`, and the
    /// board needs `top_y + 3 < width` so a vertical I can rest on it.
    #[error("stack top at row {top_y} leaves fewer than 3 free rows in a {width}-row board")]
    InvalidBoardHeight { top_y: i32, width: u32 },
    #[error("spawn column {x} is outside the 10-column board")]
    InvalidSpawnPosition { x: u8 },
}
