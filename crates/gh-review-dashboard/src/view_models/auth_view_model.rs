//! View model for the sign-in panel
//!
//! Pre-computes every text the front end shows for the auth session.

use crate::state::{AuthPhase, AuthState};
use chrono::{DateTime, Utc};
use gh_review_bridge::AuthStatus;

/// View model for the auth session
#[derive(Debug, Clone, PartialEq)]
pub struct AuthViewModel {
    pub status: AuthStatus,
    /// True until the startup status check has settled
    pub loading: bool,
    pub error: Option<String>,
    /// Present while the user is asked to approve a login
    pub device_flow: Option<DeviceFlowViewModel>,
    /// One line describing where the session is
    pub headline: String,
}

/// Prompt data for a running device flow
///
/// The device code is deliberately absent; it never reaches the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFlowViewModel {
    pub user_code: String,
    pub verification_uri: String,
    pub remaining_secs: u64,
    /// "expires in 14:30", or "code expired"
    pub expires_text: String,
}

impl AuthViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AuthState, now: DateTime<Utc>) -> Self {
        let device_flow = state.device_flow.as_ref().map(|flow| {
            let remaining_secs = flow.remaining_secs(now);
            DeviceFlowViewModel {
                user_code: flow.init.user_code.clone(),
                verification_uri: flow.init.verification_uri.clone(),
                remaining_secs,
                expires_text: format_expiry(remaining_secs),
            }
        });

        Self {
            status: state.status.clone(),
            loading: state.loading(),
            error: state.error.clone(),
            device_flow,
            headline: Self::headline(state),
        }
    }

    fn headline(state: &AuthState) -> String {
        match state.phase {
            AuthPhase::Unknown | AuthPhase::Checking => "Checking GitHub session...".to_string(),
            AuthPhase::LoggedOut => {
                "Sign in with GitHub to view pull requests awaiting your review.".to_string()
            }
            AuthPhase::StartingFlow => "Requesting a login code...".to_string(),
            AuthPhase::AwaitingAuthorization => "Waiting for authorization...".to_string(),
            AuthPhase::LoggedIn => format!(
                "Logged in as {}",
                state.status.username.as_deref().unwrap_or("unknown user")
            ),
        }
    }
}

fn format_expiry(remaining_secs: u64) -> String {
    if remaining_secs == 0 {
        "code expired".to_string()
    } else {
        format!(
            "expires in {}:{:02}",
            remaining_secs / 60,
            remaining_secs % 60
        )
    }
}
