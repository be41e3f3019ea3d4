//! Core of the gh-review dashboard
//!
//! A Redux-style store drives two components against the host's command
//! bridge:
//!
//! - the auth session (device authorization grant, see [`middleware::AuthMiddleware`])
//! - the review queue (pull requests awaiting review, see
//!   [`middleware::ReviewQueueMiddleware`])
//!
//! ```text
//!  front end ──Action──▶ Store ──▶ Middleware chain ──▶ reducers ──▶ AppState
//!                          ▲              │
//!                          │        tokio::spawn(bridge call)
//!                          └── Dispatcher ◀┘ (result actions)
//! ```

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod poll_timer;
pub mod reducers;
pub mod state;
pub mod store;
pub mod view_models;
pub mod views;

#[cfg(test)]
mod test_support;

pub use actions::Action;
pub use dispatcher::Dispatcher;
pub use state::AppState;
pub use store::Store;
