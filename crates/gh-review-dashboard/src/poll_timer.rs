//! Device-flow poll timer
//!
//! A `PollTimer` owns the task that emits `PollTick` actions for one login
//! attempt. Dropping the timer aborts the task, so every path that clears the
//! device flow only has to drop it.

use crate::actions::{Action, AuthAction};
use crate::dispatcher::Dispatcher;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Lower bound for the slack added to the host's polling interval
pub const MIN_POLL_GRACE: Duration = Duration::from_secs(1);

/// Period between polls: the host's interval plus a grace of at least one second
///
/// `None` when the sum does not fit in a `Duration`.
pub fn poll_period(interval_secs: u64, grace: Duration) -> Option<Duration> {
    Duration::from_secs(interval_secs).checked_add(grace.max(MIN_POLL_GRACE))
}

/// Repeating tick source for one device-flow attempt
#[derive(Debug)]
pub struct PollTimer {
    attempt: u64,
    period: Duration,
    handle: JoinHandle<()>,
}

impl PollTimer {
    /// Start ticking for `attempt`; the first tick fires one full period from now
    ///
    /// Returns `None` without spawning anything when the tick deadlines
    /// cannot be represented as instants.
    pub fn start(attempt: u64, period: Duration, dispatcher: Dispatcher) -> Option<Self> {
        let first = Instant::now().checked_add(period)?;
        first.checked_add(period)?;

        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(first, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                dispatcher.dispatch(Action::Auth(AuthAction::PollTick { attempt }));
            }
        });

        log::debug!(
            "Poll timer started for attempt {} every {:?}",
            attempt,
            period
        );

        Some(Self {
            attempt,
            period,
            handle,
        })
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.handle.abort();
        log::debug!("Poll timer stopped for attempt {}", self.attempt);
    }
}
