use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square, SquareError, BOARD_SIZE};

/// Piece order along a back row, from the `a` file to the `h` file.
const BACK_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STANDARD_SETUP: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for color in Color::BOTH {
        for (col, kind) in BACK_ROW.iter().enumerate() {
            board.cells[color.back_row()][col] = Some(Piece::new(color, *kind));
            board.cells[color.pawn_row()][col] = Some(Piece::new(color, PieceKind::Pawn));
        }
    }
    board
});

/// A square together with whatever stands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub square: Square,
    pub occupant: Option<Piece>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// What `Board::move_piece` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it now stands on `to` (after any promotion)
    pub piece: Piece,
    /// Previous occupant of `to`, if any
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// An 8x8 grid of optional pieces.
///
/// The board performs no chess rule checking. The only automatic rule is
/// that a pawn placed on its promotion row becomes a queen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        STANDARD_SETUP.clone()
    }

    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Bounds-checked accessor.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, SquareError> {
        let square = Square::new(row, col)?;
        Ok(self.cell(square))
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        Cell {
            square,
            occupant: self.piece_at(square),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()]
    }

    /// Put `piece` on `square`, replacing any occupant.
    ///
    /// A pawn arriving on its promotion row is turned into a queen first.
    /// Returns the piece as placed.
    pub fn place_piece(&mut self, square: Square, mut piece: Piece) -> Piece {
        if piece.promotes_on(square.row()) {
            piece.promote(PieceKind::Queen);
        }
        self.cells[square.row()][square.col()] = Some(piece);
        piece
    }

    /// Clear `square`, returning what stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()].take()
    }

    /// Move whatever stands on `from` to `to`.
    ///
    /// No legality check of any kind: the destination may be unreachable,
    /// and may even hold a piece of the same color. Returns `None` and leaves
    /// the board untouched when `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let moving = self.piece_at(from)?;
        let captured = if from == to { None } else { self.piece_at(to) };

        let placed = self.place_piece(to, moving);
        if from != to {
            self.remove_piece(from);
        }

        Some(MoveRecord {
            from,
            to,
            piece: placed,
            captured,
            promoted: placed.kind != moving.kind,
        })
    }

    /// Occupied cells, row by row from a8 to h1.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .map(|piece| Cell {
                    square,
                    occupant: Some(piece),
                })
        })
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Number of pieces belonging to `color`.
    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.iter()
            .filter(|cell| cell.occupant.is_some_and(|p| p.color == color))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
