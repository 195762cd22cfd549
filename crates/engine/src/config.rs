use placer_core::Orientation;
use serde::{Deserialize, Serialize};

/// Where a piece enters the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    pub orientation: Orientation,
    pub x: u8,
    pub y: u8,
}

/// Which moves the piece may make before it locks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllowMove {
    /// Shifts, rotations and soft drops anywhere on the board.
    #[default]
    Softdrop,
    /// Shifts and rotations without soft drops, then one straight drop.
    Harddrop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub spawn: Spawn,
    /// Fold orientations that produce identical cells for O, I, S and Z.
    pub canonical: bool,
    #[serde(default)]
    pub moves: AllowMove,
}

impl Spawn {
    /// North, column 4, row 20: the usual guideline entry point.
    pub const fn standard() -> Self {
        Self {
            orientation: Orientation::North,
            x: 4,
            y: 20,
        }
    }
}

impl Default for Spawn {
    fn default() -> Self {
        Self::standard()
    }
}

impl SearchConfig {
    pub const fn standard() -> Self {
        Self {
            spawn: Spawn::standard(),
            canonical: false,
            moves: AllowMove::Softdrop,
        }
    }

    pub const fn canonical() -> Self {
        Self {
            spawn: Spawn::standard(),
            canonical: true,
            moves: AllowMove::Softdrop,
        }
    }

    pub const fn harddrop() -> Self {
        Self {
            spawn: Spawn::standard(),
            canonical: false,
            moves: AllowMove::Harddrop,
        }
    }

    pub const fn with_spawn(self, spawn: Spawn) -> Self {
        Self { spawn, ..self }
    }

    pub const fn with_moves(self, moves: AllowMove) -> Self {
        Self { moves, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::standard()
    }
}
