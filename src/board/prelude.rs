//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chessboard::board::prelude::*;
//!
//! let controller = InteractionController::new();
//! assert_eq!(controller.turn_to_move(), Color::White);
//! ```

pub use super::{Board, BoardBuilder, Cell, Color, MoveRecord, Piece, PieceKind, Square, SquareError};
pub use crate::controller::{Effect, GameState, InteractionController, Selection};
