//! Display glyphs for pieces.
//!
//! Static configuration read by renderers; nothing in the board model
//! depends on it.

use super::{Color, PieceKind};

/// Glyphs indexed by `[color][kind]`.
const GLYPHS: [[char; 6]; 2] = [
    // White: pawn, knight, bishop, rook, queen, king
    ['♙', '♘', '♗', '♖', '♕', '♔'],
    // Black
    ['♟', '♞', '♝', '♜', '♛', '♚'],
];

/// Glyph shown for a piece of `kind` belonging to `color`.
#[inline]
#[must_use]
pub fn glyph(color: Color, kind: PieceKind) -> char {
    GLYPHS[color.index()][kind.index()]
}
