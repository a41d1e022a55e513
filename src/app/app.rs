use super::event::AppEvent;
use super::mode::AppMode;
use super::report::{build_examples, ExampleReport, PatternKind, Report};
use crate::clipboard::{get_clipboard_help, Clipboard, ClipboardCapability};
use crate::engine::{decorate, normalize_markers, Config, InputError, StridePattern};
use log::{debug, info};

/// What the shell should show after an event
#[derive(Debug, Clone, PartialEq)]
pub enum AppResponse {
    Decorated(Report),
    Examples(Vec<ExampleReport>),
    ClipboardHelp {
        capability: ClipboardCapability,
        help: &'static str,
    },
    Rejected(InputError),
    Goodbye,
}

pub struct App {
    pub mode: AppMode,
    pub config: Config,
    clipboard: Clipboard,
}

impl App {
    pub fn new(config: Config, clipboard: Clipboard) -> Self {
        Self {
            mode: AppMode::Menu,
            config,
            clipboard,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn clipboard_capability(&self) -> &ClipboardCapability {
        self.clipboard.capability()
    }

    pub fn handle_event(&mut self, event: AppEvent) -> AppResponse {
        debug!("handling {:?}", event);
        match event {
            AppEvent::Decorate { text, markers } => {
                let result = decorate(&text, &markers);
                AppResponse::Decorated(self.finish(PatternKind::Cycled, text, markers, result))
            }
            AppEvent::Stride { text, markers } => {
                let normalized = normalize_markers(&markers);
                match StridePattern::from_markers(&normalized) {
                    Ok(pattern) => {
                        let result = pattern.apply(&text);
                        AppResponse::Decorated(self.finish(
                            PatternKind::Stride,
                            text,
                            markers,
                            result,
                        ))
                    }
                    Err(e) => AppResponse::Rejected(e),
                }
            }
            AppEvent::ShowExamples => AppResponse::Examples(build_examples()),
            AppEvent::ClipboardHelp => AppResponse::ClipboardHelp {
                capability: self.clipboard.capability().clone(),
                help: get_clipboard_help(),
            },
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                AppResponse::Goodbye
            }
            AppEvent::Rejected(e) => AppResponse::Rejected(e),
        }
    }

    fn finish(
        &mut self,
        kind: PatternKind,
        text: String,
        markers: Vec<String>,
        result: String,
    ) -> Report {
        let copy_status = self.clipboard.copy(&result);
        info!(
            "{:?} pattern: {} chars in, {} chars out, copy {:?}",
            kind,
            text.chars().count(),
            result.chars().count(),
            copy_status
        );
        Report::new(kind, text, markers, result, copy_status)
    }
}
