//! Line-oriented console front end
//!
//! Renders the view models as plain text and maps typed commands to actions.
//! Output is produced only when the rendered text differs from the last one.

use crate::actions::{Action, AuthAction, GlobalAction, ReviewQueueAction};
use crate::state::AppState;
use crate::view_models::{AuthViewModel, PullRequestListViewModel};
use chrono::{DateTime, Utc};
use std::fmt::Write;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A command typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConsoleCommand {
    Login,
    Cancel,
    #[strum(to_string = "refresh", serialize = "r")]
    Refresh,
    Logout,
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

impl ConsoleCommand {
    pub fn to_action(self) -> Action {
        match self {
            ConsoleCommand::Login => Action::Auth(AuthAction::StartLogin),
            ConsoleCommand::Cancel => Action::Auth(AuthAction::CancelLogin),
            ConsoleCommand::Refresh => Action::ReviewQueue(ReviewQueueAction::Refresh),
            ConsoleCommand::Logout => Action::Auth(AuthAction::Logout),
            ConsoleCommand::Quit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Parse one line of input, ignoring surrounding whitespace
    pub fn parse_line(line: &str) -> Result<Self, String> {
        line.trim()
            .parse()
            .map_err(|_| format!("unknown command '{}' ({})", line.trim(), help_text()))
    }
}

/// "commands: login, cancel, refresh, logout, quit"
pub fn help_text() -> String {
    let names: Vec<String> = ConsoleCommand::iter().map(|c| c.to_string()).collect();
    format!("commands: {}", names.join(", "))
}

/// Remembers the last output so unchanged screens are not printed again
#[derive(Debug, Default)]
pub struct ConsoleView {
    last_auth: Option<String>,
    last_queue: Option<String>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to print for `state`, or `None` when nothing changed
    pub fn render(&mut self, state: &AppState, now: DateTime<Utc>) -> Option<String> {
        let auth = render_auth(&AuthViewModel::from_state(&state.auth, now));
        let queue = state.auth.is_authenticated().then(|| {
            render_queue(&PullRequestListViewModel::from_state(
                &state.review_queue,
                now,
            ))
        });

        let mut out = String::new();
        if self.last_auth.as_ref() != Some(&auth) {
            out.push_str(&auth);
            self.last_auth = Some(auth);
        }
        if self.last_queue != queue {
            if let Some(queue) = &queue {
                out.push_str(queue);
            }
            self.last_queue = queue;
        }

        (!out.is_empty()).then_some(out)
    }
}

fn render_auth(vm: &AuthViewModel) -> String {
    let mut out = format!("== {}\n", vm.headline);
    if let Some(flow) = &vm.device_flow {
        let _ = writeln!(
            out,
            "   Enter code {} at {} ({})",
            flow.user_code, flow.verification_uri, flow.expires_text
        );
        out.push_str("   Type 'cancel' to abort.\n");
    }
    if let Some(error) = &vm.error {
        let _ = writeln!(out, "   Error: {}", error);
    }
    out
}

fn render_queue(vm: &PullRequestListViewModel) -> String {
    let mut out = format!("-- {}\n", vm.header);
    if let Some(status) = &vm.status_text {
        let _ = writeln!(out, "   {}", status);
    }
    for card in &vm.items {
        let check = card.check.map(|c| c.icon).unwrap_or(" ");
        let draft = if card.draft { " [Draft]" } else { "" };
        let _ = writeln!(
            out,
            " {} {} {}{} ({} by {}, {})",
            check, card.number, card.title, draft, card.repository, card.author, card.updated
        );
        if !card.labels.is_empty() {
            let labels: Vec<_> = card.labels.iter().map(|l| l.name.as_str()).collect();
            let _ = writeln!(out, "     labels: {}", labels.join(", "));
        }
        if !card.reviewers.is_empty() {
            let _ = writeln!(out, "     reviewers: {}", card.reviewers.join(", "));
        }
    }
    out
}
