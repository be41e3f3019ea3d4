//! Application State

use super::{AuthState, ReviewQueueState};

/// Application state
///
/// Each component owns its slice; the store holds the only copy.
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub auth: AuthState,
    pub review_queue: ReviewQueueState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            auth: AuthState::default(),
            review_queue: ReviewQueueState::default(),
        }
    }
}
