use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod auth_middleware;
pub mod logging;
pub mod review_queue_middleware;

pub use auth_middleware::AuthMiddleware;
pub use logging::LoggingMiddleware;
pub use review_queue_middleware::ReviewQueueMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the store's task and must not block. Bridge calls are
/// spawned onto the runtime and report back through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
