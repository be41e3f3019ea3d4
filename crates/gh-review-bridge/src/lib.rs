//! Typed command bridge to the gh-review host process
//!
//! The dashboard never talks to GitHub. Every API call is a command sent to
//! a host process, which answers with JSON. This crate turns that untyped
//! channel into a typed, trait-based interface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              CommandBridge trait                 │
//! │  - check_auth_status()                           │
//! │  - start_device_flow() / poll_device_flow()      │
//! │  - logout()                                      │
//! │  - fetch_review_requested_prs()                  │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌─────────────────────┐
//!             │ InvokeBridge<I>     │  typed args/results,
//!             │                     │  error classification
//!             └─────────────────────┘
//!                        │ Invoke trait (untyped JSON)
//!                        ▼
//!             ┌─────────────────────┐
//!             │ IpcTransport        │  unix socket, JSON lines
//!             └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_review_bridge::{CommandBridge, InvokeBridge, IpcTransport};
//!
//! # async fn example() -> Result<(), gh_review_bridge::BridgeError> {
//! let bridge = InvokeBridge::new(IpcTransport::new("/tmp/gh-review-host.sock"));
//! let status = bridge.check_auth_status().await?;
//! println!("authenticated: {}", status.authenticated);
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod error;
pub mod invoke;
#[cfg(unix)]
pub mod ipc;
pub mod types;

pub use bridge::{commands, CommandBridge};
pub use error::BridgeError;
pub use invoke::{Invoke, InvokeBridge, InvokeError};
#[cfg(unix)]
pub use ipc::IpcTransport;
pub use types::{
    AuthStatus, CheckState, CheckStatus, DeviceFlowInit, Label, PullRequest, PullRequestState,
    PullRequestWithChecks, Repository, StatusCheck, User,
};
