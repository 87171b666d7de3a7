use crate::render::DisplayOptions;

use super::CommandError;

/// Apply `set <name> <value>` to the display options.
///
/// Names are case-insensitive; values accept `on/off`, `true/false`, `yes/no`
/// and `1/0`.
pub fn apply_setoption(
    options: &mut DisplayOptions,
    name: &str,
    value: &str,
) -> Result<(), CommandError> {
    let normalized = name.trim().to_ascii_lowercase();
    let setting = match normalized.as_str() {
        "color" | "colour" => &mut options.color,
        "coordinates" | "coords" | "labels" => &mut options.coordinates,
        _ => return Err(CommandError::UnknownOption(name.to_string())),
    };
    *setting = parse_switch(value)?;
    Ok(())
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidValue(value.to_string())),
    }
}
