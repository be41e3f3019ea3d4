//! Auth Session Middleware
//!
//! Drives the device authorization grant against the host:
//! - status check at startup
//! - device flow start, timed polling and cancellation
//! - logout
//!
//! After every action that may flip the authenticated flag it queues
//! `AuthAction::Reconcile`. By the time that is handled the flip has been
//! reduced, so `Event::AuthenticationChanged` goes out exactly once per
//! transition.

use crate::actions::{Action, AuthAction, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::poll_timer::{poll_period, PollTimer};
use crate::state::{AppState, AuthPhase};
use gh_review_bridge::CommandBridge;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Middleware owning the device-flow side effects
pub struct AuthMiddleware {
    bridge: Arc<dyn CommandBridge>,
    /// Slack added on top of the host's polling interval
    poll_grace: Duration,
    /// Last issued login attempt number
    last_attempt: u64,
    /// Attempt of the running device flow, if any
    active_attempt: Option<u64>,
    start_task: Option<JoinHandle<()>>,
    poll_timer: Option<PollTimer>,
    /// Outstanding poll of the active attempt
    poll_task: Option<JoinHandle<()>>,
    /// Authenticated flag last broadcast as an event
    announced_authenticated: bool,
}

impl AuthMiddleware {
    pub fn new(bridge: Arc<dyn CommandBridge>, poll_grace: Duration) -> Self {
        Self {
            bridge,
            poll_grace,
            last_attempt: 0,
            active_attempt: None,
            start_task: None,
            poll_timer: None,
            poll_task: None,
            announced_authenticated: false,
        }
    }

    /// Whether a poll timer is currently running
    pub fn is_polling(&self) -> bool {
        self.poll_timer.is_some()
    }

    fn is_active(&self, attempt: u64) -> bool {
        self.active_attempt == Some(attempt)
    }

    fn check_status(&self, dispatcher: &Dispatcher) {
        let bridge = Arc::clone(&self.bridge);
        let dispatcher = dispatcher.clone();

        tokio::spawn(async move {
            let action = match bridge.check_auth_status().await {
                Ok(status) => {
                    log::info!(
                        "AuthMiddleware: status checked, authenticated={}",
                        status.authenticated
                    );
                    AuthAction::StatusChecked(status)
                }
                Err(e) => {
                    log::error!("AuthMiddleware: status check failed: {}", e);
                    AuthAction::StatusCheckFailed(e.to_string())
                }
            };
            dispatcher.dispatch(Action::Auth(action));
        });
    }

    /// Begin a new attempt, discarding whatever flow was running
    fn start_login(&mut self, dispatcher: &Dispatcher) {
        self.end_flow();
        self.last_attempt += 1;
        let attempt = self.last_attempt;
        self.active_attempt = Some(attempt);

        dispatcher.dispatch(Action::Auth(AuthAction::DeviceFlowRequested { attempt }));

        let bridge = Arc::clone(&self.bridge);
        let dispatcher = dispatcher.clone();
        self.start_task = Some(tokio::spawn(async move {
            let action = match bridge.start_device_flow().await {
                Ok(flow) => {
                    log::info!(
                        "AuthMiddleware: device flow {} started, code {} at {}",
                        attempt,
                        flow.user_code,
                        flow.verification_uri
                    );
                    AuthAction::DeviceFlowStarted {
                        attempt,
                        flow,
                        received_at: chrono::Utc::now(),
                    }
                }
                Err(e) => {
                    log::error!("AuthMiddleware: failed to start device flow: {}", e);
                    AuthAction::DeviceFlowFailed {
                        attempt,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Auth(action));
        }));
    }

    fn start_polling(&mut self, attempt: u64, interval_secs: u64, dispatcher: &Dispatcher) {
        let timer = poll_period(interval_secs, self.poll_grace)
            .and_then(|period| PollTimer::start(attempt, period, dispatcher.clone()));
        match timer {
            Some(timer) => self.poll_timer = Some(timer),
            None => {
                log::error!(
                    "AuthMiddleware: polling interval of {}s is out of range",
                    interval_secs
                );
                self.end_flow();
                dispatcher.dispatch(Action::Auth(AuthAction::LoginFailed {
                    attempt,
                    error: format!(
                        "Polling interval of {} seconds is out of range",
                        interval_secs
                    ),
                }));
            }
        }
    }

    fn on_poll_tick(&mut self, attempt: u64, state: &AppState, dispatcher: &Dispatcher) {
        if !self.is_active(attempt) {
            log::debug!("AuthMiddleware: dropping tick of stale attempt {}", attempt);
            return;
        }
        if self.poll_task.is_some() {
            log::debug!("AuthMiddleware: previous poll still outstanding, skipping tick");
            return;
        }
        let Some(flow) = state
            .auth
            .device_flow
            .as_ref()
            .filter(|flow| flow.attempt == attempt)
        else {
            return;
        };

        let bridge = Arc::clone(&self.bridge);
        let dispatcher = dispatcher.clone();
        let device_code = flow.init.device_code.clone();

        self.poll_task = Some(tokio::spawn(async move {
            let action = match bridge.poll_device_flow(&device_code).await {
                Ok(status) if status.authenticated => {
                    AuthAction::LoginSucceeded { attempt, status }
                }
                // The host reports "not approved yet" as an unauthenticated status too
                Ok(_) => AuthAction::LoginPending { attempt },
                Err(e) if e.is_retryable() => AuthAction::LoginPending { attempt },
                Err(e) => {
                    log::warn!("AuthMiddleware: device flow {} failed: {}", attempt, e);
                    AuthAction::LoginFailed {
                        attempt,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Auth(action));
        }));
    }

    /// Tear down the running device flow, if any
    fn end_flow(&mut self) {
        self.active_attempt = None;
        self.poll_timer = None;
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
        if let Some(task) = self.start_task.take() {
            task.abort();
        }
    }

    fn logout(&self, dispatcher: &Dispatcher) {
        let bridge = Arc::clone(&self.bridge);
        let dispatcher = dispatcher.clone();

        tokio::spawn(async move {
            match bridge.logout().await {
                Ok(()) => log::info!("AuthMiddleware: host credential removed"),
                Err(e) => {
                    log::error!("AuthMiddleware: logout failed: {}", e);
                    dispatcher.dispatch(Action::Auth(AuthAction::LogoutFailed(e.to_string())));
                }
            }
        });
    }

    fn queue_reconcile(&self, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::Auth(AuthAction::Reconcile));
    }

    fn reconcile(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let authenticated = state.auth.is_authenticated();
        if authenticated != self.announced_authenticated {
            self.announced_authenticated = authenticated;
            log::info!("AuthMiddleware: authenticated changed to {}", authenticated);
            dispatcher.dispatch(Action::event(Event::AuthenticationChanged { authenticated }));
        }
    }
}

impl Drop for AuthMiddleware {
    fn drop(&mut self) {
        self.end_flow();
    }
}

impl Middleware for AuthMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Auth(auth_action) = action else {
            return true;
        };

        match auth_action {
            AuthAction::CheckStatus => {
                if state.auth.phase == AuthPhase::Checking || state.auth.phase.in_device_flow() {
                    log::debug!(
                        "AuthMiddleware: ignoring status check while {}",
                        state.auth.phase.label()
                    );
                    return false;
                }
                self.check_status(dispatcher);
                true
            }
            AuthAction::StatusChecked(_) | AuthAction::StatusCheckFailed(_) => {
                self.queue_reconcile(dispatcher);
                true
            }

            AuthAction::StartLogin => {
                if state.auth.phase.accepts_login() {
                    self.start_login(dispatcher);
                } else {
                    log::debug!(
                        "AuthMiddleware: ignoring login while {}",
                        state.auth.phase.label()
                    );
                }
                false
            }
            AuthAction::DeviceFlowStarted { attempt, flow, .. } => {
                if self.is_active(*attempt) {
                    self.start_task = None;
                    self.start_polling(*attempt, flow.interval, dispatcher);
                }
                true
            }
            AuthAction::DeviceFlowFailed { attempt, .. }
            | AuthAction::LoginFailed { attempt, .. } => {
                if self.is_active(*attempt) {
                    self.end_flow();
                }
                true
            }
            AuthAction::PollTick { attempt } => {
                self.on_poll_tick(*attempt, state, dispatcher);
                false
            }
            AuthAction::LoginPending { attempt } => {
                if self.is_active(*attempt) {
                    log::debug!("AuthMiddleware: authorization pending");
                    self.poll_task = None;
                }
                true
            }
            AuthAction::LoginSucceeded { attempt, status } => {
                if self.is_active(*attempt) {
                    log::info!(
                        "AuthMiddleware: signed in as {}",
                        status.username.as_deref().unwrap_or("<unknown>")
                    );
                    self.end_flow();
                    self.queue_reconcile(dispatcher);
                }
                true
            }
            AuthAction::CancelLogin => {
                if !state.auth.phase.in_device_flow() {
                    return false;
                }
                log::info!("AuthMiddleware: login cancelled");
                self.end_flow();
                true
            }

            AuthAction::Logout => {
                self.end_flow();
                self.logout(dispatcher);
                self.queue_reconcile(dispatcher);
                true
            }

            AuthAction::Reconcile => {
                self.reconcile(state, dispatcher);
                false
            }

            AuthAction::DeviceFlowRequested { .. } | AuthAction::LogoutFailed(_) => true,
        }
    }
}
