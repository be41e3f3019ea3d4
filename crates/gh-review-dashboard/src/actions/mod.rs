//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Global actions that affect the entire application
//! - Component actions targeted at the auth session or the review queue
//! - Events that only middleware observes

pub mod auth;
pub mod event;
pub mod global;
pub mod review_queue;

// Re-export all action types for convenience
pub use auth::AuthAction;
pub use event::Event;
pub use global::GlobalAction;
pub use review_queue::ReviewQueueAction;

/// Root action enum - tagged by component
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts/observations that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Global application actions
    Global(GlobalAction),

    /// Auth session actions
    Auth(AuthAction),

    /// Review queue actions
    ReviewQueue(ReviewQueueAction),
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will re-enter the middleware chain.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
