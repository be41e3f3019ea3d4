//! Auth session state

use chrono::{DateTime, Utc};
use gh_review_bridge::{AuthStatus, DeviceFlowInit};

/// Where the session currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Nothing known yet (before the startup status check)
    #[default]
    Unknown,
    /// Status query in flight
    Checking,
    /// No credential
    LoggedOut,
    /// Device flow requested, codes not received yet
    StartingFlow,
    /// Codes shown to the user, polling for approval
    AwaitingAuthorization,
    /// Credential held
    LoggedIn,
}

impl AuthPhase {
    pub fn label(&self) -> &'static str {
        match self {
            AuthPhase::Unknown => "unknown",
            AuthPhase::Checking => "checking",
            AuthPhase::LoggedOut => "logged out",
            AuthPhase::StartingFlow => "starting login",
            AuthPhase::AwaitingAuthorization => "awaiting authorization",
            AuthPhase::LoggedIn => "logged in",
        }
    }

    /// Phases from which a login may be (re)started
    pub fn accepts_login(&self) -> bool {
        matches!(
            self,
            AuthPhase::LoggedOut | AuthPhase::StartingFlow | AuthPhase::AwaitingAuthorization
        )
    }

    /// Phases that belong to a running device flow
    pub fn in_device_flow(&self) -> bool {
        matches!(
            self,
            AuthPhase::StartingFlow | AuthPhase::AwaitingAuthorization
        )
    }
}

/// Device flow the user is currently asked to complete
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDeviceFlow {
    /// Login attempt the flow belongs to
    pub attempt: u64,
    pub init: DeviceFlowInit,
    /// When the host handed out the codes
    pub received_at: DateTime<Utc>,
}

impl ActiveDeviceFlow {
    /// Seconds left until the host considers the codes expired, never negative
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> u64 {
        let elapsed = u64::try_from((now - self.received_at).num_seconds()).unwrap_or(0);
        self.init.expires_in.saturating_sub(elapsed)
    }
}

/// Auth session state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub status: AuthStatus,
    /// Last displayable error, if any
    pub error: Option<String>,
    /// Present only while awaiting authorization
    pub device_flow: Option<ActiveDeviceFlow>,
    /// Attempt number of the device flow being started or polled
    pub attempt: u64,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.status.authenticated
    }

    /// True until the startup status check has settled
    pub fn loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Unknown | AuthPhase::Checking)
    }

    /// Whether an action tagged with `attempt` belongs to the current flow
    pub fn is_current_attempt(&self, attempt: u64) -> bool {
        self.phase.in_device_flow() && self.attempt == attempt
    }

    pub(crate) fn reset_to_logged_out(&mut self) {
        self.phase = AuthPhase::LoggedOut;
        self.status = AuthStatus::logged_out();
        self.device_flow = None;
    }
}
