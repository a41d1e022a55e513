//! Menu-driven shell
//!
//! ## Module Structure
//!
//! - **command.rs**: Menu commands and conversion to AppEvent
//! - **parser.rs**: Menu choice, operator text and colour code parsing
//! - **shell.rs**: The prompt loop over a reader/writer pair
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! let mut shell = Shell::new(stdin.lock(), stdout.lock(), painter);
//! shell.run(&mut app)?;
//! ```

pub mod command;
pub mod parser;
pub mod shell;

pub use command::MenuCommand;
pub use shell::Shell;
