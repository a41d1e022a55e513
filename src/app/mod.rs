pub mod app;
#[cfg(test)]
mod app_tests;
pub mod event;
pub mod mode;
pub mod report;

pub use app::{App, AppResponse};
pub use event::AppEvent;
pub use mode::AppMode;
pub use report::{ExampleReport, PatternKind, Report};
