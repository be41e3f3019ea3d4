//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod auth;
mod review_queue;

pub use app::AppState;
pub use auth::{ActiveDeviceFlow, AuthPhase, AuthState};
pub use review_queue::ReviewQueueState;
