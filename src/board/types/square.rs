//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

const FILE_LETTERS: &[u8; BOARD_SIZE] = b"abcdefgh";

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's back row (the top of the picture) and row 7 is White's.
/// Column 0 is the `a` file. A `Square` is always in range: the only public
/// constructors are checked, and deserialization goes through them too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square(usize, usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    pub fn new(row: usize, col: usize) -> Result<Self, SquareError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square(row, col))
        } else {
            Err(SquareError::OutOfRange { row, col })
        }
    }

    /// Caller guarantees both coordinates are below `BOARD_SIZE`.
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// True for light squares; a8 is light.
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.0 + self.1) % 2 == 0
    }

    /// All 64 squares, row by row from a8 to h1.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }

    /// File letter of this square ('a'..='h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        FILE_LETTERS[self.1] as char
    }

    /// Rank digit of this square ('8' on row 0 down to '1' on row 7)
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'8' - self.0 as u8) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (usize, usize) {
    fn from(square: Square) -> Self {
        (square.0, square.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(invalid()),
        };

        let row = match bytes[1] {
            r @ b'1'..=b'8' => (b'8' - r) as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
