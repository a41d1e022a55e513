pub mod app;
pub mod clipboard;
pub mod engine;
pub mod repl;
pub mod ui;

pub use engine::{decorate, normalize_markers};
