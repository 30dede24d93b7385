// src/runner.rs
use log::{debug, error, info};
use std::time::Duration;

use crate::errors::{BotError, Result};
use crate::models::{check_response, current_date, parse_status};
use crate::notifier::Notifier;
use crate::providers::{Messenger, ReviewApi};

/// Waits between poll cycles.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Real-time sleeper backed by the tokio timer.
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Mutable state carried from one cycle to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopState {
    /// Lower bound passed as `from_date` on the next request.
    pub timestamp: i64,
    /// Text of the last error that was actually delivered to the chat.
    pub last_error: Option<String>,
}

impl LoopState {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            last_error: None,
        }
    }
}

/// What a single poll cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    NoUpdates,
    Notified(String),
    Failed(String),
}

/// Text relayed to the chat when a cycle fails.
pub fn failure_message(err: &BotError) -> String {
    format!("Program failure: {}", err)
}

pub struct Poller<A, M, S> {
    api: A,
    notifier: Notifier<M>,
    sleeper: S,
    interval: Duration,
    state: LoopState,
}

impl<A, M, S> Poller<A, M, S>
where
    A: ReviewApi,
    M: Messenger,
    S: Sleeper,
{
    pub fn new(
        api: A,
        notifier: Notifier<M>,
        sleeper: S,
        interval: Duration,
        start_timestamp: i64,
    ) -> Self {
        Self {
            api,
            notifier,
            sleeper,
            interval,
            state: LoopState::new(start_timestamp),
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Polls forever. Only process termination stops it.
    pub async fn run(mut self) {
        info!(
            "Polling every {}s starting from {}",
            self.interval.as_secs(),
            self.state.timestamp
        );
        loop {
            self.tick().await;
        }
    }

    /// One cycle followed by the configured pause.
    pub async fn tick(&mut self) -> CycleOutcome {
        let outcome = self.run_cycle().await;
        self.sleeper.sleep(self.interval).await;
        outcome
    }

    /// Fetch, validate, format and notify once. Every error is absorbed here.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => {
                // Only a delivered status message resets error suppression.
                if matches!(outcome, CycleOutcome::Notified(_)) {
                    self.state.last_error = None;
                }
                outcome
            }
            Err(err) => self.report(err).await,
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome> {
        let answer = self.api.homework_statuses(self.state.timestamp).await?;

        let outcome = match check_response(&answer)? {
            None => {
                debug!("No updates");
                CycleOutcome::NoUpdates
            }
            Some(record) => {
                let message = parse_status(record)?;
                debug!("Formatted message: {}", message);
                self.notifier.send(&message).await?;
                CycleOutcome::Notified(message)
            }
        };

        if let Some(next) = current_date(&answer) {
            debug!("Advancing timestamp {} -> {}", self.state.timestamp, next);
            self.state.timestamp = next;
        }

        Ok(outcome)
    }

    async fn report(&mut self, err: BotError) -> CycleOutcome {
        let message = failure_message(&err);

        // The notifier has already logged this one at error level.
        if err.is_delivery_failure() {
            debug!("{}", message);
            return CycleOutcome::Failed(message);
        }

        error!("{} ({:?})", message, err);

        if self.state.last_error.as_deref() == Some(message.as_str()) {
            debug!("Error already reported, not sending again");
            return CycleOutcome::Failed(message);
        }

        // Remembered only once delivered, so an undelivered report is retried.
        if self.notifier.send(&message).await.is_ok() {
            self.state.last_error = Some(message.clone());
        }

        CycleOutcome::Failed(message)
    }
}
