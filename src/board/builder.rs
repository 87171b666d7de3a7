//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece instead of starting from the
//! standard setup and shuffling pieces around.
//!
//! # Example
//! ```
//! use chessboard::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1 = "e1".parse::<Square>().unwrap();
//! let e8 = "e8".parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
///
/// Pieces are stored exactly as given: a pawn put on its promotion row stays
/// a pawn, which lets tests set up positions one step away from promoting.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: board
                .iter()
                .filter_map(|cell| cell.occupant.map(|piece| (cell.square, piece)))
                .collect(),
        }
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.cells[square.row()][square.col()] = Some(piece);
        }
        board
    }
}
