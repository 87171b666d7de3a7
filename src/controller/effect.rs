#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Piece, Square};

/// Observable outcome of a click, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Effect {
    /// Highlight moves from `from` to `to`; either side may be absent.
    SelectionChanged {
        from: Option<Square>,
        to: Option<Square>,
    },
    /// A piece was relocated. `piece` is as it now stands on `to`.
    MovePerformed {
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promoted: bool,
    },
    TurnToggled { to_move: Color },
}
