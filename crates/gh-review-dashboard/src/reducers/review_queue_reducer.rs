//! Review Queue Reducer
//!
//! Applies fetch results in issuance order: a completion whose request id is
//! not newer than the last applied one is discarded.

use crate::actions::ReviewQueueAction;
use crate::state::ReviewQueueState;

/// Reduce review queue state
pub fn reduce_review_queue(
    mut state: ReviewQueueState,
    action: &ReviewQueueAction,
) -> ReviewQueueState {
    match action {
        ReviewQueueAction::FetchStarted { request_id } => {
            state.latest_issued = state.latest_issued.max(*request_id);
        }
        ReviewQueueAction::Loaded { request_id, items } => {
            if state.accepts(*request_id) {
                log::info!(
                    "Review queue updated with {} pull requests (request {})",
                    items.len(),
                    request_id
                );
                state.items = items.clone();
                state.error = None;
                state.last_applied = *request_id;
                state.last_updated = Some(chrono::Local::now());
            } else {
                log::debug!("Discarding stale review queue result {}", request_id);
            }
        }
        ReviewQueueAction::LoadError { request_id, error } => {
            if state.accepts(*request_id) {
                state.items.clear();
                state.error = Some(error.clone());
                state.last_applied = *request_id;
            } else {
                log::debug!("Discarding stale review queue error {}", request_id);
            }
        }
        ReviewQueueAction::Cleared { request_id } => {
            state.latest_issued = state.latest_issued.max(*request_id);
            state.clear();
        }
        ReviewQueueAction::Refresh => {}
    }
    state
}
