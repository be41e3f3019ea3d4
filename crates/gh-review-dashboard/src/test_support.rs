//! Test doubles and drivers shared by the middleware tests

use crate::middleware::{AuthMiddleware, LoggingMiddleware, ReviewQueueMiddleware};
use crate::state::AppState;
use crate::store::Store;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use gh_review_bridge::{
    AuthStatus, BridgeError, CheckState, CheckStatus, CommandBridge, DeviceFlowInit, PullRequest,
    PullRequestState, PullRequestWithChecks, Repository, User,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

struct Reply<T> {
    delay: Duration,
    result: Result<T, BridgeError>,
}

#[derive(Default)]
struct Script {
    check: VecDeque<Reply<AuthStatus>>,
    start: VecDeque<Reply<DeviceFlowInit>>,
    poll: VecDeque<Reply<AuthStatus>>,
    logout: VecDeque<Reply<()>>,
    fetch: VecDeque<Reply<Vec<PullRequestWithChecks>>>,
    check_calls: usize,
    start_calls: usize,
    poll_calls: Vec<(Instant, String)>,
    fetch_calls: usize,
}

/// Bridge replaying queued replies in order
///
/// Once a queue runs dry the bridge answers: logged out for status checks,
/// a transport error for device flow starts, `AuthorizationPending` for
/// polls, success for logout and an empty list for fetches.
#[derive(Default)]
pub struct ScriptedBridge {
    script: Mutex<Script>,
}

impl ScriptedBridge {
    pub fn on_check(&self, result: Result<AuthStatus, BridgeError>) {
        self.script.lock().unwrap().check.push_back(now(result));
    }

    pub fn on_start(&self, result: Result<DeviceFlowInit, BridgeError>) {
        self.script.lock().unwrap().start.push_back(now(result));
    }

    pub fn on_poll(&self, result: Result<AuthStatus, BridgeError>) {
        self.on_poll_delayed(Duration::ZERO, result);
    }

    pub fn on_poll_delayed(&self, delay: Duration, result: Result<AuthStatus, BridgeError>) {
        self.script
            .lock()
            .unwrap()
            .poll
            .push_back(Reply { delay, result });
    }

    pub fn on_logout(&self, result: Result<(), BridgeError>) {
        self.script.lock().unwrap().logout.push_back(now(result));
    }

    pub fn on_fetch(&self, result: Result<Vec<PullRequestWithChecks>, BridgeError>) {
        self.on_fetch_delayed(Duration::ZERO, result);
    }

    pub fn on_fetch_delayed(
        &self,
        delay: Duration,
        result: Result<Vec<PullRequestWithChecks>, BridgeError>,
    ) {
        self.script
            .lock()
            .unwrap()
            .fetch
            .push_back(Reply { delay, result });
    }

    pub fn check_count(&self) -> usize {
        self.script.lock().unwrap().check_calls
    }

    pub fn start_count(&self) -> usize {
        self.script.lock().unwrap().start_calls
    }

    /// When each poll was issued and with which device code
    pub fn polls(&self) -> Vec<(Instant, String)> {
        self.script.lock().unwrap().poll_calls.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.script.lock().unwrap().fetch_calls
    }
}

fn now<T>(result: Result<T, BridgeError>) -> Reply<T> {
    Reply {
        delay: Duration::ZERO,
        result,
    }
}

async fn deliver<T>(
    reply: Option<Reply<T>>,
    fallback: Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    match reply {
        Some(reply) => {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            reply.result
        }
        None => fallback,
    }
}

#[async_trait]
impl CommandBridge for ScriptedBridge {
    async fn check_auth_status(&self) -> Result<AuthStatus, BridgeError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.check_calls += 1;
            script.check.pop_front()
        };
        deliver(reply, Ok(AuthStatus::logged_out())).await
    }

    async fn start_device_flow(&self) -> Result<DeviceFlowInit, BridgeError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.start_calls += 1;
            script.start.pop_front()
        };
        deliver(
            reply,
            Err(BridgeError::Transport("no scripted device flow".to_string())),
        )
        .await
    }

    async fn poll_device_flow(&self, device_code: &str) -> Result<AuthStatus, BridgeError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script
                .poll_calls
                .push((Instant::now(), device_code.to_string()));
            script.poll.pop_front()
        };
        deliver(reply, Err(BridgeError::AuthorizationPending)).await
    }

    async fn logout(&self) -> Result<(), BridgeError> {
        let reply = self.script.lock().unwrap().logout.pop_front();
        deliver(reply, Ok(())).await
    }

    async fn fetch_review_requested_prs(&self) -> Result<Vec<PullRequestWithChecks>, BridgeError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.fetch_calls += 1;
            script.fetch.pop_front()
        };
        deliver(reply, Ok(Vec::new())).await
    }
}

/// Store wired the way the binary wires it, on top of `bridge`
pub fn store_with(bridge: &Arc<ScriptedBridge>) -> Store {
    let mut store = Store::new(AppState::default());
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(AuthMiddleware::new(
        bridge.clone(),
        Duration::from_secs(1),
    )));
    store.add_middleware(Box::new(ReviewQueueMiddleware::new(bridge.clone())));
    store
}

/// Process actions until `done` holds, giving up after ten minutes of
/// (virtual) time
pub async fn run_until(store: &mut Store, done: impl Fn(&AppState) -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(600);
    while !done(store.state()) {
        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => return false,
            _ = store.process_next() => {}
        }
    }
    true
}

/// Process actions for `duration` of (virtual) time
pub async fn run_for(store: &mut Store, duration: Duration) {
    let deadline = Instant::now() + duration;
    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => break,
            _ = store.process_next() => {}
        }
    }
    store.process_pending();
}

pub fn device_flow(device_code: &str, interval: u64) -> DeviceFlowInit {
    DeviceFlowInit {
        user_code: "ABCD-1234".to_string(),
        verification_uri: "https://github.com/login/device".to_string(),
        device_code: device_code.to_string(),
        expires_in: 900,
        interval,
    }
}

pub fn user(id: i64, login: &str) -> User {
    User {
        id,
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/u/{}", id),
        html_url: format!("https://github.com/{}", login),
    }
}

pub fn pull_request(number: u64, title: &str) -> PullRequestWithChecks {
    let owner = user(1, "octo");
    PullRequestWithChecks {
        pull_request: PullRequest {
            id: 1000 + number as i64,
            number,
            title: title.to_string(),
            html_url: format!("https://github.com/octo/app/pull/{}", number),
            state: PullRequestState::Open,
            draft: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap(),
            merged_at: None,
            user: user(7, "bob"),
            labels: Vec::new(),
            requested_reviewers: vec![user(8, "alice")],
            repository: Repository {
                id: 99,
                name: "app".to_string(),
                full_name: "octo/app".to_string(),
                html_url: "https://github.com/octo/app".to_string(),
                owner,
            },
        },
        check_status: Some(CheckStatus {
            state: CheckState::Success,
            total_count: 1,
            statuses: Vec::new(),
        }),
    }
}
