use std::fmt;

use colored::{ColoredString, Colorize};

use crate::board::{Board, Square, BOARD_SIZE};

use super::palette::{self, Rgb};
use super::DisplayOptions;

const EMPTY: char = '·';

/// A printable picture of a board with the selected square highlighted.
///
/// Row 0 is drawn at the top, labelled `8`; column 0 is the `a` file.
pub struct BoardView<'a> {
    board: &'a Board,
    selected: Option<Square>,
    options: DisplayOptions,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn new(board: &'a Board, selected: Option<Square>, options: DisplayOptions) -> Self {
        BoardView {
            board,
            selected,
            options,
        }
    }

    fn cell_text(&self, square: Square) -> String {
        let symbol = self.board.piece_at(square).map_or(EMPTY, |piece| piece.glyph());
        let highlighted = self.selected == Some(square);

        if self.options.color {
            let bg = palette::square_color(square.is_light(), highlighted);
            paint(format!(" {symbol} "), palette::PIECE, bg).to_string()
        } else if highlighted {
            format!("[{symbol}]")
        } else {
            format!(" {symbol} ")
        }
    }

    fn label(&self, text: String) -> String {
        if self.options.color {
            paint(text, palette::label_color(false), palette::BACKGROUND).to_string()
        } else {
            text
        }
    }
}

fn paint(text: String, fg: Rgb, bg: Rgb) -> ColoredString {
    text.truecolor(fg.0, fg.1, fg.2).on_truecolor(bg.0, bg.1, bg.2)
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if self.options.coordinates {
                let rank = Square::at(row, 0).rank_char();
                write!(f, "{}", self.label(format!("{rank} ")))?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cell_text(Square::at(row, col)))?;
            }
            writeln!(f)?;
        }

        if self.options.coordinates {
            let mut files = String::from("  ");
            for col in 0..BOARD_SIZE {
                files.push(' ');
                files.push(Square::at(BOARD_SIZE - 1, col).file_char());
                files.push(' ');
            }
            writeln!(f, "{}", self.label(files))?;
        }
        Ok(())
    }
}
