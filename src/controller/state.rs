#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Square};

/// Whether a square is currently highlighted awaiting a second click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(Square),
}

impl Selection {
    #[inline]
    #[must_use]
    pub const fn square(self) -> Option<Square> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(square) => Some(square),
        }
    }
}

/// Everything the state machine needs: the board, the side to move and the
/// current selection.
///
/// A selection may point at an empty square or at an opponent's piece. Such
/// a selection can never produce a move; the next click simply replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: Board,
    pub turn_to_move: Color,
    pub selection: Selection,
}

impl GameState {
    /// Standard starting position, White to move, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_board(Board::new(), Color::White)
    }

    /// Start from an arbitrary position with nothing selected.
    #[must_use]
    pub fn from_board(board: Board, turn_to_move: Color) -> Self {
        GameState {
            board,
            turn_to_move,
            selection: Selection::NoSelection,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
