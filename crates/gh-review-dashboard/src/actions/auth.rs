//! Authentication actions
//!
//! Intents (`CheckStatus`, `StartLogin`, `CancelLogin`, `Logout`) come from
//! the front end. Everything else is dispatched by `AuthMiddleware` when a
//! bridge call settles.
//!
//! Device-flow actions carry the `attempt` number of the login attempt they
//! belong to. A fresh login, a cancel or a logout starts a new attempt, so
//! anything still tagged with the old number is recognisably stale.

use chrono::{DateTime, Utc};
use gh_review_bridge::{AuthStatus, DeviceFlowInit};

/// Actions for the auth session
#[derive(Debug, Clone)]
pub enum AuthAction {
    // Status
    /// Ask the host whether we already hold a valid credential
    CheckStatus,
    /// Status query answered
    StatusChecked(AuthStatus),
    /// Status query failed (error message)
    StatusCheckFailed(String),

    // Device flow
    /// User asked to sign in
    StartLogin,
    /// Device flow requested from the host for a new attempt
    DeviceFlowRequested { attempt: u64 },
    /// Host handed out codes for the attempt
    DeviceFlowStarted {
        attempt: u64,
        flow: DeviceFlowInit,
        received_at: DateTime<Utc>,
    },
    /// Host could not start a device flow
    DeviceFlowFailed { attempt: u64, error: String },
    /// Poll timer fired for the attempt
    PollTick { attempt: u64 },
    /// Poll answered: user has not approved yet
    LoginPending { attempt: u64 },
    /// Poll answered: user approved the login
    LoginSucceeded { attempt: u64, status: AuthStatus },
    /// Poll failed terminally (denied, expired, bridge error, ...)
    LoginFailed { attempt: u64, error: String },
    /// User abandoned the device flow
    CancelLogin,

    // Logout
    /// User asked to sign out; local state clears immediately
    Logout,
    /// Host-side logout failed; recorded for display only
    LogoutFailed(String),

    /// Compare the reduced session against the last announced
    /// authentication flag; queued after every action that may flip it
    Reconcile,
}
