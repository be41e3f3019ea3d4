//! Review queue actions
//!
//! Fetch results are tagged with the `request_id` issued by
//! `ReviewQueueMiddleware`; ids grow monotonically in issuance order.

use gh_review_bridge::PullRequestWithChecks;

/// Actions for the list of pull requests awaiting review
#[derive(Debug, Clone)]
pub enum ReviewQueueAction {
    /// User asked to reload the list
    Refresh,
    /// Fetch issued
    FetchStarted { request_id: u64 },
    /// Fetch answered with the full list
    Loaded {
        request_id: u64,
        items: Vec<PullRequestWithChecks>,
    },
    /// Fetch failed (error message)
    LoadError { request_id: u64, error: String },
    /// List emptied because the session is not authenticated; everything
    /// issued before `request_id` is void
    Cleared { request_id: u64 },
}
