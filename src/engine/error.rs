use std::path::PathBuf;
use thiserror::Error;

/// Operator input rejected by the shell before anything is decorated.
///
/// These are shown to the operator and the menu comes back; they never end
/// the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter some text.")]
    EmptyText,

    #[error("Please enter at least one colour code.")]
    NoMarkers,

    #[error("No valid colour codes found.")]
    NoValidMarkers,

    #[error("Stride patterns take 2 or 3 colour codes, got {0}.")]
    StrideMarkerCount(usize),

    #[error("Invalid choice. Please enter 1, 2, 3, 4, or 5.")]
    InvalidChoice(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::EmptyText.to_string(), "Please enter some text.");
        assert_eq!(
            InputError::NoMarkers.to_string(),
            "Please enter at least one colour code."
        );
        assert_eq!(
            InputError::NoValidMarkers.to_string(),
            "No valid colour codes found."
        );
    }

    #[test]
    fn test_stride_count_message_names_count() {
        let message = InputError::StrideMarkerCount(4).to_string();
        assert!(message.contains("got 4"));
    }

    #[test]
    fn test_invalid_choice_lists_options() {
        let message = InputError::InvalidChoice("9".to_string()).to_string();
        assert!(message.contains("1, 2, 3, 4, or 5"));
    }
}
