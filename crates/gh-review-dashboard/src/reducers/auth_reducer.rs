//! Auth Reducer
//!
//! Handles the auth session state machine. Results carrying an `attempt`
//! number are applied only while that attempt is the current device flow.

use crate::actions::AuthAction;
use crate::state::{ActiveDeviceFlow, AuthPhase, AuthState};
use gh_review_bridge::AuthStatus;

/// Reduce auth session state
pub fn reduce_auth(mut state: AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::CheckStatus => {
            if state.phase == AuthPhase::Checking || state.phase.in_device_flow() {
                log::debug!("Ignoring status check in phase '{}'", state.phase.label());
            } else {
                state.phase = AuthPhase::Checking;
                state.error = None;
            }
        }
        AuthAction::StatusChecked(status) => {
            if state.phase == AuthPhase::Checking {
                apply_status(&mut state, status);
                state.error = None;
            }
        }
        AuthAction::StatusCheckFailed(error) => {
            if state.phase == AuthPhase::Checking {
                state.reset_to_logged_out();
                state.error = Some(error.clone());
            }
        }

        AuthAction::DeviceFlowRequested { attempt } => {
            if state.phase.accepts_login() {
                state.phase = AuthPhase::StartingFlow;
                state.attempt = *attempt;
                state.device_flow = None;
                state.error = None;
            }
        }
        AuthAction::DeviceFlowStarted {
            attempt,
            flow,
            received_at,
        } => {
            if state.phase == AuthPhase::StartingFlow && state.attempt == *attempt {
                state.phase = AuthPhase::AwaitingAuthorization;
                state.device_flow = Some(ActiveDeviceFlow {
                    attempt: *attempt,
                    init: flow.clone(),
                    received_at: *received_at,
                });
            } else {
                log::debug!("Dropping device flow of stale attempt {}", attempt);
            }
        }
        AuthAction::DeviceFlowFailed { attempt, error }
        | AuthAction::LoginFailed { attempt, error } => {
            if state.is_current_attempt(*attempt) {
                state.reset_to_logged_out();
                state.error = Some(error.clone());
            }
        }
        AuthAction::LoginSucceeded { attempt, status } => {
            if state.phase == AuthPhase::AwaitingAuthorization && state.attempt == *attempt {
                apply_status(&mut state, status);
                state.device_flow = None;
                state.error = None;
            }
        }
        AuthAction::CancelLogin => {
            if state.phase.in_device_flow() {
                state.reset_to_logged_out();
                state.error = None;
            }
        }

        AuthAction::Logout => {
            state.reset_to_logged_out();
            state.error = None;
        }
        AuthAction::LogoutFailed(error) => {
            if state.phase == AuthPhase::LoggedOut {
                state.error = Some(error.clone());
            }
        }

        // Side-effect only
        AuthAction::StartLogin
        | AuthAction::PollTick { .. }
        | AuthAction::LoginPending { .. }
        | AuthAction::Reconcile => {}
    }
    state
}

fn apply_status(state: &mut AuthState, status: &AuthStatus) {
    if status.authenticated {
        state.phase = AuthPhase::LoggedIn;
        state.status = status.clone();
    } else {
        state.reset_to_logged_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gh_review_bridge::DeviceFlowInit;

    fn init() -> DeviceFlowInit {
        DeviceFlowInit {
            user_code: "ABCD-1234".to_string(),
            verification_uri: "https://github.com/login/device".to_string(),
            device_code: "dc1".to_string(),
            expires_in: 900,
            interval: 5,
        }
    }

    fn awaiting(attempt: u64) -> AuthState {
        let state = reduce_auth(
            AuthState {
                phase: AuthPhase::LoggedOut,
                ..Default::default()
            },
            &AuthAction::DeviceFlowRequested { attempt },
        );
        reduce_auth(
            state,
            &AuthAction::DeviceFlowStarted {
                attempt,
                flow: init(),
                received_at: Utc::now(),
            },
        )
    }

    #[test]
    fn test_status_check_outcomes_settle() {
        let checking = reduce_auth(AuthState::default(), &AuthAction::CheckStatus);
        assert_eq!(checking.phase, AuthPhase::Checking);
        assert!(checking.loading());

        let logged_in = reduce_auth(
            checking.clone(),
            &AuthAction::StatusChecked(AuthStatus::logged_in("alice")),
        );
        assert_eq!(logged_in.phase, AuthPhase::LoggedIn);
        assert_eq!(logged_in.status.username.as_deref(), Some("alice"));

        let logged_out = reduce_auth(
            checking.clone(),
            &AuthAction::StatusChecked(AuthStatus::logged_out()),
        );
        assert_eq!(logged_out.phase, AuthPhase::LoggedOut);
        assert!(logged_out.error.is_none());

        let failed = reduce_auth(
            checking,
            &AuthAction::StatusCheckFailed("Bridge error: connection refused".to_string()),
        );
        assert_eq!(failed.phase, AuthPhase::LoggedOut);
        assert!(!failed.loading());
        assert_eq!(
            failed.error.as_deref(),
            Some("Bridge error: connection refused")
        );
    }

    #[test]
    fn test_status_drops_username_when_not_authenticated() {
        let checking = reduce_auth(AuthState::default(), &AuthAction::CheckStatus);
        let state = reduce_auth(
            checking,
            &AuthAction::StatusChecked(AuthStatus {
                authenticated: false,
                username: Some("ghost".to_string()),
            }),
        );
        assert_eq!(state.status, AuthStatus::logged_out());
    }

    #[test]
    fn test_second_check_while_checking_is_ignored() {
        let checking = reduce_auth(AuthState::default(), &AuthAction::CheckStatus);
        let again = reduce_auth(checking, &AuthAction::CheckStatus);
        assert_eq!(again.phase, AuthPhase::Checking);
    }

    #[test]
    fn test_device_flow_request_ignored_when_logged_in() {
        let state = AuthState {
            phase: AuthPhase::LoggedIn,
            status: AuthStatus::logged_in("alice"),
            ..Default::default()
        };
        let state = reduce_auth(state, &AuthAction::DeviceFlowRequested { attempt: 1 });
        assert_eq!(state.phase, AuthPhase::LoggedIn);
    }

    #[test]
    fn test_device_flow_started_stores_flow() {
        let state = awaiting(1);
        assert_eq!(state.phase, AuthPhase::AwaitingAuthorization);
        let flow = state.device_flow.as_ref().unwrap();
        assert_eq!(flow.init.user_code, "ABCD-1234");
        assert_eq!(flow.attempt, 1);
    }

    #[test]
    fn test_replacing_flow_drops_old_attempt_results() {
        let state = awaiting(1);
        let state = reduce_auth(state, &AuthAction::DeviceFlowRequested { attempt: 2 });
        assert_eq!(state.phase, AuthPhase::StartingFlow);
        assert!(state.device_flow.is_none());

        // late codes of attempt 1
        let state = reduce_auth(
            state,
            &AuthAction::DeviceFlowStarted {
                attempt: 1,
                flow: init(),
                received_at: Utc::now(),
            },
        );
        assert_eq!(state.phase, AuthPhase::StartingFlow);
        assert!(state.device_flow.is_none());

        // late failure of attempt 1
        let state = reduce_auth(
            state,
            &AuthAction::LoginFailed {
                attempt: 1,
                error: "expired_token".to_string(),
            },
        );
        assert_eq!(state.phase, AuthPhase::StartingFlow);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_login_succeeded_clears_flow() {
        let state = reduce_auth(
            awaiting(1),
            &AuthAction::LoginSucceeded {
                attempt: 1,
                status: AuthStatus::logged_in("alice"),
            },
        );
        assert_eq!(state.phase, AuthPhase::LoggedIn);
        assert!(state.device_flow.is_none());
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_login_failed_resets_with_error() {
        let state = reduce_auth(
            awaiting(1),
            &AuthAction::LoginFailed {
                attempt: 1,
                error: "access_denied".to_string(),
            },
        );
        assert_eq!(state.phase, AuthPhase::LoggedOut);
        assert!(state.device_flow.is_none());
        assert_eq!(state.error.as_deref(), Some("access_denied"));
    }

    #[test]
    fn test_pending_changes_nothing() {
        let before = awaiting(1);
        let after = reduce_auth(before.clone(), &AuthAction::LoginPending { attempt: 1 });
        assert_eq!(after.phase, before.phase);
        assert_eq!(after.device_flow, before.device_flow);
        assert!(after.error.is_none());
    }

    #[test]
    fn test_cancel_login_returns_to_logged_out_without_error() {
        let state = reduce_auth(awaiting(1), &AuthAction::CancelLogin);
        assert_eq!(state.phase, AuthPhase::LoggedOut);
        assert!(state.device_flow.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_logout_clears_immediately_and_keeps_failure_for_display() {
        let state = AuthState {
            phase: AuthPhase::LoggedIn,
            status: AuthStatus::logged_in("alice"),
            ..Default::default()
        };
        let state = reduce_auth(state, &AuthAction::Logout);
        assert_eq!(state.phase, AuthPhase::LoggedOut);
        assert_eq!(state.status, AuthStatus::logged_out());

        let state = reduce_auth(state, &AuthAction::LogoutFailed("host gone".to_string()));
        assert_eq!(state.phase, AuthPhase::LoggedOut);
        assert_eq!(state.error.as_deref(), Some("host gone"));
    }

    #[test]
    fn test_logout_failure_ignored_after_new_login() {
        let state = reduce_auth(awaiting(1), &AuthAction::LogoutFailed("late".to_string()));
        assert!(state.error.is_none());
    }
}
