//! View Models
//!
//! Display-ready projections of state, recomputed on every render.

mod auth_view_model;
mod pull_request_view_model;

pub use auth_view_model::{AuthViewModel, DeviceFlowViewModel};
pub use pull_request_view_model::{
    LabelViewModel, PullRequestCardViewModel, PullRequestListViewModel,
};
