//! View model for the review queue
//!
//! Separates presentation logic from bridge data and view rendering.
//! Pre-computes all display text in the view model.

use crate::domain_models::{format_relative_time, CheckIndicator};
use crate::state::ReviewQueueState;
use chrono::{DateTime, Utc};
use gh_review_bridge::PullRequestWithChecks;

/// View model for the whole list
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestListViewModel {
    /// "3 pull requests awaiting review"
    pub header: String,
    pub items: Vec<PullRequestCardViewModel>,
    pub loading: bool,
    pub error: Option<String>,
    /// Loading, error or empty-list message, when one applies
    pub status_text: Option<String>,
}

/// View model for a single pull request card
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestCardViewModel {
    pub title: String,
    pub number: String, // "#123"
    pub url: String,
    pub repository: String, // "octo/app"
    pub author: String,
    pub author_avatar_url: String,
    pub draft: bool,
    pub labels: Vec<LabelViewModel>,
    pub reviewers: Vec<String>,
    pub updated: String, // "updated 2 hours ago"
    pub check: Option<CheckIndicator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelViewModel {
    pub name: String,
    /// CSS hex color, "#d73a4a"
    pub color: String,
}

impl PullRequestListViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &ReviewQueueState, now: DateTime<Utc>) -> Self {
        let items: Vec<_> = state
            .items
            .iter()
            .map(|item| PullRequestCardViewModel::from_item(item, now))
            .collect();

        let status_text = if state.loading() && items.is_empty() {
            Some("Loading pull requests...".to_string())
        } else if let Some(error) = &state.error {
            Some(format!("Error: {}", error))
        } else if items.is_empty() {
            Some("No pull requests awaiting your review".to_string())
        } else {
            None
        };

        Self {
            header: header_text(items.len()),
            items,
            loading: state.loading(),
            error: state.error.clone(),
            status_text,
        }
    }
}

fn header_text(count: usize) -> String {
    let noun = if count == 1 {
        "pull request"
    } else {
        "pull requests"
    };
    format!("{} {} awaiting review", count, noun)
}

impl PullRequestCardViewModel {
    pub fn from_item(item: &PullRequestWithChecks, now: DateTime<Utc>) -> Self {
        let pr = &item.pull_request;
        Self {
            title: pr.title.clone(),
            number: format!("#{}", pr.number),
            url: pr.html_url.clone(),
            repository: pr.repository.full_name.clone(),
            author: pr.user.login.clone(),
            author_avatar_url: pr.user.avatar_url.clone(),
            draft: pr.draft,
            labels: pr
                .labels
                .iter()
                .map(|label| LabelViewModel {
                    name: label.name.clone(),
                    color: format!("#{}", label.color),
                })
                .collect(),
            reviewers: pr
                .requested_reviewers
                .iter()
                .map(|reviewer| reviewer.login.clone())
                .collect(),
            updated: format!("updated {}", format_relative_time(pr.updated_at, now)),
            check: item
                .check_status
                .as_ref()
                .map(|status| CheckIndicator::from(status.state)),
        }
    }
}
