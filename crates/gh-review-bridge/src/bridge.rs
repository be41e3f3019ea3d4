//! Typed command bridge trait
//!
//! One method per host command. Implementations may be slow and may fail;
//! calls issued concurrently carry no ordering guarantee.

use crate::error::BridgeError;
use crate::types::{AuthStatus, DeviceFlowInit, PullRequestWithChecks};
use async_trait::async_trait;

/// Host command names, as registered by the host process
pub mod commands {
    pub const CHECK_AUTH_STATUS: &str = "check_auth_status";
    pub const START_DEVICE_FLOW: &str = "start_device_flow";
    pub const POLL_DEVICE_FLOW: &str = "poll_device_flow";
    pub const LOGOUT: &str = "logout";
    pub const FETCH_REVIEW_REQUESTED_PRS: &str = "fetch_review_requested_prs";
}

/// Asynchronous request/response channel to the host process
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single bridge can be shared
/// by every middleware through an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use gh_review_bridge::CommandBridge;
///
/// async fn whoami(bridge: &dyn CommandBridge) -> Option<String> {
///     bridge.check_auth_status().await.ok()?.username
/// }
/// ```
#[async_trait]
pub trait CommandBridge: Send + Sync {
    /// Ask the host whether a stored credential is present and valid
    async fn check_auth_status(&self) -> Result<AuthStatus, BridgeError>;

    /// Begin a device authorization grant
    ///
    /// Returns the user-facing code, the verification page and the polling
    /// parameters for this attempt.
    async fn start_device_flow(&self) -> Result<DeviceFlowInit, BridgeError>;

    /// Poll the authorization server once for the given device code
    ///
    /// # Errors
    ///
    /// [`BridgeError::AuthorizationPending`] while the user has not approved
    /// yet; any other variant is terminal for the attempt.
    async fn poll_device_flow(&self, device_code: &str) -> Result<AuthStatus, BridgeError>;

    /// Drop the host's stored credential
    async fn logout(&self) -> Result<(), BridgeError>;

    /// Fetch pull requests requesting the user's review, merged with CI rollups
    async fn fetch_review_requested_prs(&self) -> Result<Vec<PullRequestWithChecks>, BridgeError>;
}
