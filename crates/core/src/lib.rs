//! Placer core crate - board and piece types shared by the placement engine.

mod board;
mod piece;

pub use board::Board;
pub use piece::{Offset, Orientation, Piece, Rotation, Shape};
