//! Views
//!
//! The console view is the only front end; it reads view models and emits
//! actions, nothing else.

mod console_view;

pub use console_view::{help_text, ConsoleCommand, ConsoleView};
