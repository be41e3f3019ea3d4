//! Display classification of CI rollup states

use gh_review_bridge::CheckState;

/// How a check state is presented on a pull request card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckIndicator {
    pub icon: &'static str,
    /// Style class for front ends that theme by class name
    pub class_name: &'static str,
    pub state: CheckState,
}

impl CheckIndicator {
    pub fn tooltip(&self) -> String {
        format!("CI status: {}", self.state.as_str())
    }
}

impl From<CheckState> for CheckIndicator {
    fn from(state: CheckState) -> Self {
        let (icon, class_name) = match state {
            CheckState::Success => ("✓", "check-success"),
            CheckState::Failure => ("✗", "check-failure"),
            CheckState::Pending => ("○", "check-pending"),
            CheckState::Error => ("!", "check-error"),
        };
        Self {
            icon,
            class_name,
            state,
        }
    }
}
