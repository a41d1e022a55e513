use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, AppResponse, PatternKind};
use crate::clipboard::{Clipboard, ClipboardCapability, ClipboardError, ClipboardSink, CopyStatus};
use crate::engine::{Config, InputError};
use std::cell::RefCell;
use std::rc::Rc;

struct SharedSink(Rc<RefCell<Vec<String>>>);

impl ClipboardSink for SharedSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0.borrow_mut().push(text.to_string());
        Ok(())
    }
}

fn app_without_clipboard() -> App {
    App::new(Config::default(), Clipboard::unavailable("headless"))
}

fn markers(list: &[&str]) -> Vec<String> {
    list.iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_app_starts_in_menu() {
    let app = app_without_clipboard();
    assert_eq!(app.mode(), AppMode::Menu);
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = app_without_clipboard();
    assert_eq!(app.handle_event(AppEvent::Quit), AppResponse::Goodbye);
    assert_eq!(app.mode, AppMode::Quit);
}

#[test]
fn test_app_decorate_builds_report() {
    let mut app = app_without_clipboard();
    let response = app.handle_event(AppEvent::Decorate {
        text: "Hi!".to_string(),
        markers: markers(&["A", "B"]),
    });

    let AppResponse::Decorated(report) = response else {
        panic!("Expected Decorated response");
    };
    assert_eq!(report.kind, PatternKind::Cycled);
    assert_eq!(report.result, "~AH~Bi!");
    assert_eq!(report.copy_status, CopyStatus::Unavailable);
}

#[test]
fn test_app_decorate_copies_result() {
    let copied = Rc::new(RefCell::new(Vec::new()));
    let clipboard = Clipboard::with_sink(Box::new(SharedSink(copied.clone())));
    let mut app = App::new(Config::default(), clipboard);

    let response = app.handle_event(AppEvent::Decorate {
        text: "Hi".to_string(),
        markers: markers(&["A", "B"]),
    });

    assert!(matches!(
        response,
        AppResponse::Decorated(ref report) if report.copy_status == CopyStatus::Copied
    ));
    assert_eq!(copied.borrow().as_slice(), ["~AH~Bi".to_string()]);
}

#[test]
fn test_app_stride_normalizes_markers() {
    let mut app = app_without_clipboard();
    let response = app.handle_event(AppEvent::Stride {
        text: "ab c".to_string(),
        markers: markers(&["L7", "G2"]),
    });

    let AppResponse::Decorated(report) = response else {
        panic!("Expected Decorated response");
    };
    assert_eq!(report.kind, PatternKind::Stride);
    assert_eq!(report.result, "~L7a~G2b ~G2c");
}

#[test]
fn test_app_stride_rejects_wrong_marker_count() {
    let mut app = app_without_clipboard();
    let response = app.handle_event(AppEvent::Stride {
        text: "abc".to_string(),
        markers: markers(&["A"]),
    });
    assert_eq!(
        response,
        AppResponse::Rejected(InputError::StrideMarkerCount(1))
    );
    assert_eq!(app.mode(), AppMode::Menu);
}

#[test]
fn test_app_show_examples() {
    let mut app = app_without_clipboard();
    let AppResponse::Examples(examples) = app.handle_event(AppEvent::ShowExamples) else {
        panic!("Expected Examples response");
    };
    assert_eq!(examples.len(), 4);
}

#[test]
fn test_app_clipboard_help_reports_capability() {
    let mut app = app_without_clipboard();
    let response = app.handle_event(AppEvent::ClipboardHelp);
    assert!(matches!(
        response,
        AppResponse::ClipboardHelp {
            capability: ClipboardCapability::Unavailable(_),
            ..
        }
    ));
}

#[test]
fn test_app_rejected_event_keeps_menu() {
    let mut app = app_without_clipboard();
    let response = app.handle_event(AppEvent::Rejected(InputError::EmptyText));
    assert_eq!(response, AppResponse::Rejected(InputError::EmptyText));
    assert_eq!(app.mode(), AppMode::Menu);
}
