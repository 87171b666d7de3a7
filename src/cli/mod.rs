//! Line-oriented terminal front-end.
//!
//! Reads one command per line, forwards clicks to the
//! [`InteractionController`] and redraws the board after every click.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::SquareError;
use crate::controller::{Effect, InteractionController};
use crate::render::{BoardView, DisplayOptions};

pub mod command;
pub mod options;

pub use command::{parse_command, Command};
pub use options::apply_setoption;

const HELP: &str = "\
commands:
  click <square>      click a square by name (e2) or by row and column (6 4)
  show                print the board
  turn                print the side to move
  selected            print the selected square
  set <option> <on|off>  options: color, coordinates
  help                print this list
  quit                leave";

/// Error type for a rejected command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A required argument was not given
    MissingArgument(&'static str),
    /// The square could not be built
    InvalidSquare(SquareError),
    /// `set` named an option that does not exist
    UnknownOption(String),
    /// An argument could not be parsed
    InvalidValue(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument(what) => write!(f, "Missing {what}"),
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            CommandError::InvalidValue(value) => write!(f, "Invalid value '{value}'"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidSquare(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

/// One interactive game on one output stream.
pub struct Session<W: Write> {
    controller: InteractionController,
    options: DisplayOptions,
    out: W,
}

impl<W: Write> Session<W> {
    #[must_use]
    pub fn new(out: W, options: DisplayOptions) -> Self {
        Session {
            controller: InteractionController::new(),
            options,
            out,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Print the opening board and side to move.
    pub fn greet(&mut self) -> io::Result<()> {
        self.print_board()?;
        writeln!(self.out, "{} to move", self.controller.turn_to_move())
    }

    /// Handle one input line. Returns `Ok(false)` once the user quits.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                self.report(&e)?;
                return Ok(true);
            }
        };

        match command {
            Command::Click { row, col } => self.click(row, col)?,
            Command::Show => self.print_board()?,
            Command::Turn => writeln!(self.out, "{} to move", self.controller.turn_to_move())?,
            Command::Selected => match self.controller.selected_cell() {
                Some(square) => writeln!(self.out, "{square}")?,
                None => writeln!(self.out, "none")?,
            },
            Command::SetOption { name, value } => {
                if let Err(e) = apply_setoption(&mut self.options, &name, &value) {
                    self.report(&e)?;
                }
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(false),
            Command::Unknown(text) => {
                self.report(&format!("Unknown command '{text}'"))?;
            }
        }
        Ok(true)
    }

    fn click(&mut self, row: usize, col: usize) -> io::Result<()> {
        let effects = match self.controller.on_cell_clicked(row, col) {
            Ok(effects) => effects,
            Err(e) => return self.report(&e),
        };

        for effect in &effects {
            match effect {
                Effect::MovePerformed {
                    from, to, piece, promoted, ..
                } => {
                    if *promoted {
                        writeln!(self.out, "move {from} {to} promotes to {}", piece.kind)?;
                    } else {
                        writeln!(self.out, "move {from} {to}")?;
                    }
                }
                Effect::SelectionChanged { to: Some(square), .. } => {
                    writeln!(self.out, "selected {square}")?;
                }
                Effect::SelectionChanged { to: None, .. } | Effect::TurnToggled { .. } => {}
            }
        }

        self.print_board()?;
        for effect in &effects {
            if let Effect::TurnToggled { to_move } = effect {
                writeln!(self.out, "{to_move} to move")?;
            }
        }
        Ok(())
    }

    fn print_board(&mut self) -> io::Result<()> {
        let view = BoardView::new(
            self.controller.board(),
            self.controller.selected_cell(),
            self.options,
        );
        write!(self.out, "{view}")?;
        self.out.flush()
    }

    fn report(&mut self, error: &dyn fmt::Display) -> io::Result<()> {
        #[cfg(feature = "logging")]
        log::warn!("rejected command: {error}");
        writeln!(self.out, "error: {error}")
    }
}

/// Run a session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: W,
    options: DisplayOptions,
) -> io::Result<()> {
    let mut session = Session::new(out, options);
    session.greet()?;
    for line in input.lines() {
        if !session.handle_line(&line?)? {
            break;
        }
    }
    Ok(())
}

/// Run a session on the process's stdin and stdout.
///
/// No logger is installed here. With the `logging` feature the controller
/// and session emit `log` records, which are dropped unless the embedding
/// program sets up a `log` implementation first.
pub fn run_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), DisplayOptions::default())
}
