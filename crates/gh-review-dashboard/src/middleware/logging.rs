use crate::actions::{Action, AuthAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Ticks fire every few seconds while waiting for approval
        match action {
            Action::Auth(AuthAction::PollTick { .. }) => log::trace!("Action: {:?}", action),
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
