pub mod capability;

pub use capability::{get_clipboard_help, ClipboardCapability};

use crate::engine::config::ClipboardConfig;
use log::{debug, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("{0}")]
    Backend(#[from] arboard::Error),
}

/// Something text can be copied into
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard via arboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn open() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new()?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// Outcome of one copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Unavailable,
    Failed(String),
}

/// Clipboard handle threaded through the app, with its capability fixed at
/// construction.
pub struct Clipboard {
    capability: ClipboardCapability,
    sink: Option<Box<dyn ClipboardSink>>,
}

impl Clipboard {
    /// Probes the system clipboard once.
    pub fn detect(config: &ClipboardConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        match SystemClipboard::open() {
            Ok(system) => {
                debug!("system clipboard opened");
                Self::with_sink(Box::new(system))
            }
            Err(e) => {
                warn!("system clipboard unavailable: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn with_sink(sink: Box<dyn ClipboardSink>) -> Self {
        Self {
            capability: ClipboardCapability::Available,
            sink: Some(sink),
        }
    }

    pub fn disabled() -> Self {
        Self {
            capability: ClipboardCapability::Disabled,
            sink: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            capability: ClipboardCapability::Unavailable(reason.into()),
            sink: None,
        }
    }

    pub fn capability(&self) -> &ClipboardCapability {
        &self.capability
    }

    /// Copies `text` if a clipboard is available. Never fails the caller.
    pub fn copy(&mut self, text: &str) -> CopyStatus {
        let Some(sink) = self.sink.as_mut() else {
            return CopyStatus::Unavailable;
        };

        match sink.copy_text(text) {
            Ok(()) => CopyStatus::Copied,
            Err(e) => {
                warn!("copy to clipboard failed: {}", e);
                CopyStatus::Failed(e.to_string())
            }
        }
    }
}
