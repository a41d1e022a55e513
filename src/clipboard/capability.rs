//! Clipboard capability detection
//!
//! Resolved once at startup. When the system clipboard cannot be opened the
//! shell keeps working and the operator copies the raw output by hand.

/// Clipboard support levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardCapability {
    /// System clipboard opened successfully
    Available,
    /// Turned off in the config, never probed
    Disabled,
    /// Probe failed; carries the backend's reason
    Unavailable(String),
}

impl ClipboardCapability {
    /// Returns true if copy attempts should be made
    pub fn supports_copy(&self) -> bool {
        matches!(self, ClipboardCapability::Available)
    }

    /// One-line startup notice
    pub fn status_message(&self) -> String {
        match self {
            ClipboardCapability::Available => "✓ Clipboard support available".to_string(),
            ClipboardCapability::Disabled => {
                "⚠ Clipboard support disabled in config".to_string()
            }
            ClipboardCapability::Unavailable(reason) => {
                format!("⚠ Clipboard support not available ({})", reason)
            }
        }
    }
}

/// Help text for menu option 4
pub fn get_clipboard_help() -> &'static str {
    "Automatic copying uses the system clipboard (X11/Wayland, macOS or Windows).\n\
     Make sure a clipboard provider is running, set `enabled = true` under\n\
     [clipboard] in your config, then restart to use clipboard features."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_copy() {
        assert!(ClipboardCapability::Available.supports_copy());
        assert!(!ClipboardCapability::Disabled.supports_copy());
        assert!(!ClipboardCapability::Unavailable("no display".to_string()).supports_copy());
    }

    #[test]
    fn test_status_message_includes_reason() {
        let message = ClipboardCapability::Unavailable("no display".to_string()).status_message();
        assert!(message.contains("not available"));
        assert!(message.contains("no display"));
    }

    #[test]
    fn test_available_message() {
        assert!(ClipboardCapability::Available
            .status_message()
            .contains("available"));
    }

    #[test]
    fn test_help_mentions_restart() {
        assert!(get_clipboard_help().contains("restart"));
    }
}
