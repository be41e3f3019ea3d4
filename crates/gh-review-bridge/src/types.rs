//! Host command payloads
//!
//! These types mirror the JSON the host process sends back over the bridge.
//! They are read-only snapshots; the dashboard never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Authentication status as reported by the host
///
/// `username` is `None` exactly when `authenticated` is false. The default is
/// the signed-out status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl AuthStatus {
    /// The status of a signed-out session
    pub fn logged_out() -> Self {
        Self {
            authenticated: false,
            username: None,
        }
    }

    /// The status of a session signed in as `username`
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
        }
    }
}

/// Device authorization grant handed out by the host for one login attempt
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceFlowInit {
    /// Code the user types in at the verification page
    pub user_code: String,
    /// Page the user visits to approve the login
    pub verification_uri: String,
    /// Polling token; never shown to the user
    pub device_code: String,
    /// Lifetime of the codes in seconds
    pub expires_in: u64,
    /// Minimum polling interval in seconds
    pub interval: u64,
}

// device_code is a bearer-ish secret, keep it out of logs
impl std::fmt::Debug for DeviceFlowInit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceFlowInit")
            .field("user_code", &self.user_code)
            .field("verification_uri", &self.verification_uri)
            .field("device_code", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("interval", &self.interval)
            .finish()
    }
}

/// A GitHub user (author or requested reviewer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// A label attached to a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
    /// Hex color without the leading `#`
    pub color: String,
    pub description: Option<String>,
}

/// The repository a pull request belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    pub html_url: String,
    pub owner: User,
}

/// Open/closed state of a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    Open,
    Closed,
}

/// A pull request awaiting the signed-in user's review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Stable identity across fetches
    pub id: i64,
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: PullRequestState,
    #[serde(default)]
    pub draft: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    /// Author
    pub user: User,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub requested_reviewers: Vec<User>,
    pub repository: Repository,
}

/// Rolled-up CI state for a commit
///
/// The set is closed: a state string outside these four fails to decode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckState {
    /// At least one check is still running
    Pending,
    /// All checks passed
    Success,
    /// At least one check failed
    Failure,
    /// A check could not report
    Error,
}

impl CheckState {
    /// Wire name of the state (`"pending"`, `"success"`, ...)
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// A single status reported against the head commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub state: CheckState,
    /// Status context (e.g., "ci/circleci")
    pub context: String,
    pub description: Option<String>,
    pub target_url: Option<String>,
}

/// Combined status for a pull request's head commit, aggregated by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStatus {
    pub state: CheckState,
    pub total_count: u64,
    #[serde(default)]
    pub statuses: Vec<StatusCheck>,
}

/// A pull request paired with its CI rollup
///
/// `check_status` is `None` when the host could not fetch checks. The pull
/// request travels nested under `pull_request`; a payload with its fields
/// flattened next to `check_status` does not decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestWithChecks {
    pub pull_request: PullRequest,
    pub check_status: Option<CheckStatus>,
}
