use super::MenuCommand;
use crate::engine::InputError;

/// Parse a menu choice
///
/// Supports:
/// - `1` → process text
/// - `2` → stride pattern
/// - `3` → examples
/// - `4` → clipboard help
/// - `5`, `q` or `:q` → quit
/// - anything else → Unknown
pub fn parse_menu_choice(input: &str) -> MenuCommand {
    let input = input.trim();

    match input {
        "1" => MenuCommand::ProcessText,
        "2" => MenuCommand::StridePattern,
        "3" => MenuCommand::ShowExamples,
        "4" => MenuCommand::ClipboardHelp,
        "5" | "q" | ":q" | ":quit" => MenuCommand::Quit,
        _ => MenuCommand::Unknown(input.to_string()),
    }
}

/// Trims operator text, rejecting blank input
pub fn parse_text(input: &str) -> Result<String, InputError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(InputError::EmptyText);
    }
    Ok(text.to_string())
}

/// Splits a comma-separated colour code list
///
/// Tokens are trimmed and empty ones dropped; markers are returned as typed,
/// without the sentinel added.
pub fn parse_markers(input: &str) -> Result<Vec<String>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::NoMarkers);
    }

    let markers: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|marker| !marker.is_empty())
        .map(str::to_string)
        .collect();

    if markers.is_empty() {
        return Err(InputError::NoValidMarkers);
    }

    Ok(markers)
}
