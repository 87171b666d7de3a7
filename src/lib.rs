pub mod board;
pub mod cli;
pub mod controller;
pub mod render;

pub use board::{Board, Color, Piece, PieceKind, Square, SquareError};
pub use controller::{Effect, GameState, InteractionController, Selection};
