use crate::board::Square;

use super::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw indices; bounds are checked by the controller.
    Click { row: usize, col: usize },
    Show,
    Turn,
    Selected,
    SetOption { name: String, value: String },
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };

    let cmd = match head {
        "click" => {
            let (row, col) = parse_click_target(&parts[1..])?;
            Command::Click { row, col }
        }
        "show" => Command::Show,
        "turn" => Command::Turn,
        "selected" => Command::Selected,
        "set" => {
            let name = parts.get(1).ok_or(CommandError::MissingArgument("option name"))?;
            let value = parts.get(2).ok_or(CommandError::MissingArgument("option value"))?;
            Command::SetOption {
                name: (*name).to_string(),
                value: (*value).to_string(),
            }
        }
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Ok(Some(cmd))
}

/// Either one algebraic name (`e2`) or a row and a column (`6 4`).
///
/// Numeric indices are passed through unchecked.
fn parse_click_target(args: &[&str]) -> Result<(usize, usize), CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument("square")),
        [name] => {
            let square = name.parse::<Square>()?;
            Ok((square.row(), square.col()))
        }
        [row, col, ..] => Ok((parse_index(row)?, parse_index(col)?)),
    }
}

fn parse_index(text: &str) -> Result<usize, CommandError> {
    text.parse::<usize>()
        .map_err(|_| CommandError::InvalidValue(text.to_string()))
}
