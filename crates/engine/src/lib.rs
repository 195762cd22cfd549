//! placer-engine - bit-parallel placement reachability for tetrominoes.
//!
//! Computes every resting position a piece can reach from its spawn through
//! shifts, soft drops and kicked rotations, working on whole columns at once.
//! A hard-drop mode restricts the piece to shifts and rotations before one
//! straight drop.

pub mod batch;
pub mod canonical;
pub mod columns;
pub mod config;
pub mod error;
pub mod free_space;
pub mod kicks;
pub mod lane;
pub mod lock;
pub mod reachability;
pub mod rotate;
pub mod search;
pub mod spawn;

pub use batch::{count_all_shapes, search_shapes};
pub use columns::Columns;
pub use config::{AllowMove, SearchConfig, Spawn};
pub use error::SearchError;
pub use free_space::FreeSpaces;
pub use kicks::{kicks, RotationSystem, Srs};
pub use lane::Lane;
pub use search::{search, search_board, search_using, search_with, Placements, CEILING_MARGIN};
