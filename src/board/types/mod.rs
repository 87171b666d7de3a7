//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Color` - pieces and sides
//! - `Square` - checked (row, col) coordinate

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
