//! Review queue state

use chrono::{DateTime, Local};
use gh_review_bridge::PullRequestWithChecks;

/// Pull requests awaiting the signed-in user's review
#[derive(Debug, Clone, Default)]
pub struct ReviewQueueState {
    pub items: Vec<PullRequestWithChecks>,
    pub error: Option<String>,
    /// Id of the most recently issued fetch (or clear)
    pub latest_issued: u64,
    /// Id of the most recent fetch whose result was applied
    pub last_applied: u64,
    /// When the list was last replaced by a successful fetch
    pub last_updated: Option<DateTime<Local>>,
}

impl ReviewQueueState {
    /// True while the latest issued fetch has not been applied
    pub fn loading(&self) -> bool {
        self.latest_issued > self.last_applied
    }

    /// Whether a completion for `request_id` is newer than everything applied
    pub fn accepts(&self, request_id: u64) -> bool {
        request_id > self.last_applied
    }

    /// Empty the list and void every fetch issued so far
    pub fn clear(&mut self) {
        self.items.clear();
        self.error = None;
        self.last_applied = self.last_applied.max(self.latest_issued);
    }
}
