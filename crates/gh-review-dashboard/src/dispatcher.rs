//! Dispatcher for middleware action dispatch
//!
//! When middleware or a spawned bridge task needs to dispatch actions that should
//! re-enter the middleware chain, it uses the Dispatcher. Actions dispatched via
//! Dispatcher go back through the full middleware chain (via the store's action
//! channel), one at a time and in send order.
//!
//! This enables patterns like:
//! - a device-flow poll result dispatches `LoginSucceeded`
//! - `Event::AuthenticationChanged` is handled by `ReviewQueueMiddleware`

use crate::actions::Action;
use tokio::sync::mpsc::UnboundedSender;

/// Dispatcher for sending actions through the middleware chain
///
/// Actions dispatched here re-enter the middleware chain from the beginning,
/// allowing middleware to trigger other middleware handlers.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    ///
    /// The action_tx should be a clone of the channel the store drains,
    /// so dispatched actions re-enter the middleware chain.
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    ///
    /// The action will re-enter the middleware chain from the beginning,
    /// ensuring all middleware can observe and react to it.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
