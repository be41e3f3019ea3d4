//! Event types
//!
//! Events represent facts/observations that have occurred and should be broadcast
//! to the middleware chain. Unlike commands (imperative actions), events allow
//! middleware to react to what happened elsewhere in the system.
//!
//! Events are only observed by middleware; the store never hands them to the
//! reducer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Send an event that will re-enter middleware chain
//! dispatcher.dispatch(Action::event(Event::AuthenticationChanged { authenticated: true }));
//!
//! // Handle event in middleware
//! Action::Event(Event::AuthenticationChanged { authenticated }) => {
//!     // React to the event
//! }
//! ```
//!
//! ## Naming Convention
//!
//! Events use past tense or descriptive names indicating something has happened:
//! - `AuthenticationChanged` (not `ChangeAuthentication`)

/// Events that re-enter the middleware chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The session's authenticated flag flipped
    ///
    /// Emitted once per transition, never for a repeated value.
    AuthenticationChanged { authenticated: bool },
}
