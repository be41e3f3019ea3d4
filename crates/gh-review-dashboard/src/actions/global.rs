//! Global actions - not tied to any specific component
//!
//! These actions affect the application as a whole.

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
}
