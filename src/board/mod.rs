//! Board representation.
//!
//! A plain 8x8 grid of optional pieces with no chess rules beyond automatic
//! promotion of pawns that reach the far row.
//!
//! # Example
//! ```
//! use chessboard::board::{Board, Color, PieceKind};
//!
//! let mut board = Board::new();
//! let e2 = board.cell_at(6, 4).unwrap().square;
//! let e4 = board.cell_at(4, 4).unwrap().square;
//! let record = board.move_piece(e2, e4).unwrap();
//! assert_eq!(record.piece.kind, PieceKind::Pawn);
//! assert_eq!(record.piece.color, Color::White);
//! assert!(board.piece_at(e2).is_none());
//! ```

mod builder;
mod error;
pub mod glyph;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::SquareError;
pub use state::{Board, Cell, MoveRecord};
pub use types::{Color, Piece, PieceKind, Square, BOARD_SIZE};
