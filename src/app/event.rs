use crate::engine::InputError;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Decorate { text: String, markers: Vec<String> },
    Stride { text: String, markers: Vec<String> },
    ShowExamples,
    ClipboardHelp,
    Quit,
    Rejected(InputError),
}
