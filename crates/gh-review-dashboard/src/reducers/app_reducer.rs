use crate::actions::{Action, GlobalAction, ReviewQueueAction};
use crate::reducers::{auth_reducer, review_queue_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
///
/// The review list is empty whenever the session is not authenticated: the
/// reduction that signs out also clears the list, and fetch results reaching
/// a signed-out session are dropped.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Auth(auth_action) => {
            let was_authenticated = state.auth.is_authenticated();
            state.auth = auth_reducer::reduce_auth(state.auth, auth_action);
            if was_authenticated && !state.auth.is_authenticated() {
                state.review_queue.clear();
            }
        }
        Action::ReviewQueue(
            ReviewQueueAction::Loaded { request_id, .. }
            | ReviewQueueAction::LoadError { request_id, .. },
        ) if !state.auth.is_authenticated() => {
            log::debug!(
                "Discarding review queue result {} while signed out",
                request_id
            );
        }
        Action::ReviewQueue(queue_action) => {
            state.review_queue =
                review_queue_reducer::reduce_review_queue(state.review_queue, queue_action);
        }
        // Events are for middleware
        Action::Event(_) => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::AuthAction;
    use crate::state::AuthPhase;
    use crate::test_support::pull_request;
    use gh_review_bridge::AuthStatus;

    fn signed_in_with_list() -> AppState {
        let mut state = AppState::default();
        state.auth.phase = AuthPhase::LoggedIn;
        state.auth.status = AuthStatus::logged_in("alice");
        let state = reduce(
            state,
            &Action::ReviewQueue(ReviewQueueAction::FetchStarted { request_id: 1 }),
        );
        reduce(
            state,
            &Action::ReviewQueue(ReviewQueueAction::Loaded {
                request_id: 1,
                items: vec![pull_request(1, "First")],
            }),
        )
    }

    #[test]
    fn test_logout_empties_list_in_same_reduction() {
        let state = signed_in_with_list();
        assert_eq!(state.review_queue.items.len(), 1);

        let state = reduce(
            state,
            &Action::ReviewQueue(ReviewQueueAction::FetchStarted { request_id: 2 }),
        );
        let state = reduce(state, &Action::Auth(AuthAction::Logout));

        assert!(!state.auth.is_authenticated());
        assert!(state.review_queue.items.is_empty());
        assert!(!state.review_queue.loading());
        assert!(!state.review_queue.accepts(2));
    }

    #[test]
    fn test_result_while_signed_out_is_dropped() {
        let state = reduce(
            signed_in_with_list(),
            &Action::Auth(AuthAction::Logout),
        );
        let state = reduce(
            state,
            &Action::ReviewQueue(ReviewQueueAction::FetchStarted { request_id: 3 }),
        );
        let state = reduce(
            state,
            &Action::ReviewQueue(ReviewQueueAction::Loaded {
                request_id: 3,
                items: vec![pull_request(3, "Late")],
            }),
        );
        assert!(state.review_queue.items.is_empty());

        let state = reduce(
            state,
            &Action::ReviewQueue(ReviewQueueAction::LoadError {
                request_id: 3,
                error: "late".to_string(),
            }),
        );
        assert!(state.review_queue.error.is_none());
    }

    #[test]
    fn test_staying_signed_in_keeps_list() {
        let state = reduce(
            signed_in_with_list(),
            &Action::Auth(AuthAction::CheckStatus),
        );
        assert_eq!(state.review_queue.items.len(), 1);
    }

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }
}
