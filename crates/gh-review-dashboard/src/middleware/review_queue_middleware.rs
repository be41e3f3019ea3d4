//! Review Queue Middleware
//!
//! Keeps the list of pull requests awaiting review in step with the session:
//! - `Event::AuthenticationChanged { true }` fetches
//! - `Event::AuthenticationChanged { false }` clears and voids outstanding fetches
//! - `ReviewQueueAction::Refresh` fetches again while authenticated

use crate::actions::{Action, Event, ReviewQueueAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_review_bridge::CommandBridge;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Middleware owning review queue fetches
pub struct ReviewQueueMiddleware {
    bridge: Arc<dyn CommandBridge>,
    /// Last issued request id; ids grow in issuance order
    last_request_id: u64,
    in_flight: Vec<JoinHandle<()>>,
}

impl ReviewQueueMiddleware {
    pub fn new(bridge: Arc<dyn CommandBridge>) -> Self {
        Self {
            bridge,
            last_request_id: 0,
            in_flight: Vec::new(),
        }
    }

    fn next_request_id(&mut self) -> u64 {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// Number of fetches that have not completed yet
    pub fn outstanding(&self) -> usize {
        self.in_flight.iter().filter(|h| !h.is_finished()).count()
    }

    /// Bring the list in line with the authenticated flag
    fn sync(&mut self, authenticated: bool, dispatcher: &Dispatcher) {
        self.in_flight.retain(|handle| !handle.is_finished());

        let request_id = self.next_request_id();
        if !authenticated {
            for handle in self.in_flight.drain(..) {
                handle.abort();
            }
            log::debug!("ReviewQueueMiddleware: cleared (request {})", request_id);
            dispatcher.dispatch(Action::ReviewQueue(ReviewQueueAction::Cleared {
                request_id,
            }));
            return;
        }

        log::info!(
            "ReviewQueueMiddleware: fetching review requests (request {})",
            request_id
        );
        dispatcher.dispatch(Action::ReviewQueue(ReviewQueueAction::FetchStarted {
            request_id,
        }));

        let bridge = Arc::clone(&self.bridge);
        let dispatcher = dispatcher.clone();
        self.in_flight.push(tokio::spawn(async move {
            let action = match bridge.fetch_review_requested_prs().await {
                Ok(items) => ReviewQueueAction::Loaded { request_id, items },
                Err(e) => {
                    log::error!("ReviewQueueMiddleware: fetch {} failed: {}", request_id, e);
                    ReviewQueueAction::LoadError {
                        request_id,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::ReviewQueue(action));
        }));
    }
}

impl Drop for ReviewQueueMiddleware {
    fn drop(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}

impl Middleware for ReviewQueueMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::AuthenticationChanged { authenticated }) => {
                self.sync(*authenticated, dispatcher);
                true
            }
            Action::ReviewQueue(ReviewQueueAction::Refresh) => {
                if state.auth.is_authenticated() {
                    self.sync(true, dispatcher);
                } else {
                    log::debug!("ReviewQueueMiddleware: refresh ignored, not signed in");
                }
                false
            }
            _ => true,
        }
    }
}
