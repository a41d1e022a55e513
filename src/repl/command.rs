use crate::app::AppEvent;
use crate::engine::InputError;

/// Commands that can be picked from the menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    /// Decorate operator text by cycling colour codes
    ProcessText,

    /// Decorate operator text with a fixed stride pattern
    StridePattern,

    ShowExamples,

    /// Explain how clipboard copying is enabled
    ClipboardHelp,

    Quit,

    /// Unknown/invalid choice
    Unknown(String),
}

impl MenuCommand {
    /// True when the operator still has to type text and colour codes
    pub fn needs_operator_input(&self) -> bool {
        matches!(self, MenuCommand::ProcessText | MenuCommand::StridePattern)
    }
}

/// Convert a menu command into an AppEvent
///
/// Returns `None` for commands that need operator text first; the shell
/// prompts for it and builds the event with `request_to_app_event`.
pub fn command_to_app_event(command: MenuCommand) -> Option<AppEvent> {
    match command {
        MenuCommand::ProcessText | MenuCommand::StridePattern => None,
        MenuCommand::ShowExamples => Some(AppEvent::ShowExamples),
        MenuCommand::ClipboardHelp => Some(AppEvent::ClipboardHelp),
        MenuCommand::Quit => Some(AppEvent::Quit),
        MenuCommand::Unknown(input) => Some(AppEvent::Rejected(InputError::InvalidChoice(input))),
    }
}

/// Builds the decorate event for a prompted command
pub fn request_to_app_event(command: &MenuCommand, text: String, markers: Vec<String>) -> AppEvent {
    match command {
        MenuCommand::StridePattern => AppEvent::Stride { text, markers },
        _ => AppEvent::Decorate { text, markers },
    }
}
