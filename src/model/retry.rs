/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_ACTIVATION_DEADLINE_MS, DEFAULT_MAIL_LIMIT, DEFAULT_POLL_ATTEMPTS,
    DEFAULT_POLL_DELAY_MS,
};
use crate::error::AppError;
use crate::utils::config::get_env_or_default;
use async_trait::async_trait;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration of the activation-token poll
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Number of fetch-and-scan attempts (at least one is always made)
    pub attempts: u32,
    /// Fixed delay in milliseconds between attempts
    pub delay_ms: u64,
    /// Number of newest messages fetched per attempt
    pub limit: u32,
    /// Upper bound in milliseconds for the token to appear after registration
    pub activation_deadline_ms: u64,
}

impl PollConfig {
    /// Creates a poll configuration with the built-in defaults (5 × 1000 ms, 50 messages, 3 s deadline)
    #[must_use]
    pub fn new() -> Self {
        Self {
            attempts: DEFAULT_POLL_ATTEMPTS,
            delay_ms: DEFAULT_POLL_DELAY_MS,
            limit: DEFAULT_MAIL_LIMIT,
            activation_deadline_ms: DEFAULT_ACTIVATION_DEADLINE_MS,
        }
    }

    /// Reads `TOKEN_POLL_ATTEMPTS`, `TOKEN_POLL_DELAY_MS`, `TOKEN_POLL_LIMIT` and
    /// `ACTIVATION_DEADLINE_MS`, falling back to the defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            attempts: get_env_or_default("TOKEN_POLL_ATTEMPTS", DEFAULT_POLL_ATTEMPTS),
            delay_ms: get_env_or_default("TOKEN_POLL_DELAY_MS", DEFAULT_POLL_DELAY_MS),
            limit: get_env_or_default("TOKEN_POLL_LIMIT", DEFAULT_MAIL_LIMIT),
            activation_deadline_ms: get_env_or_default(
                "ACTIVATION_DEADLINE_MS",
                DEFAULT_ACTIVATION_DEADLINE_MS,
            ),
        }
    }

    /// Sets the number of attempts
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets the delay between attempts
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Sets the number of messages fetched per attempt
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the activation deadline
    #[must_use]
    pub fn with_activation_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.activation_deadline_ms = deadline_ms;
        self
    }

    /// Attempts actually made: zero is treated as one
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.attempts.max(1)
    }

    /// Delay between attempts
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Activation deadline
    #[must_use]
    pub fn activation_deadline(&self) -> Duration {
        Duration::from_millis(self.activation_deadline_ms)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of time for polling and deadline checks
///
/// Production code uses [`TokioClock`]; tests substitute a clock that
/// advances instantly.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;

    /// Waits for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Runs `attempt` until it yields `Some`, at most `config.max_attempts()` times
///
/// Sleeps `config.delay()` between attempts (never after the last one).
/// `Ok(None)` means the budget ran out; errors from `attempt` are returned
/// immediately without further retries.
pub async fn poll_until_some<T, F, Fut>(
    config: &PollConfig,
    clock: &dyn Clock,
    mut attempt: F,
) -> Result<Option<T>, AppError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Option<T>, AppError>>,
{
    let max_attempts = config.max_attempts();
    for n in 1..=max_attempts {
        if let Some(value) = attempt(n).await? {
            return Ok(Some(value));
        }
        if n < max_attempts {
            debug!(
                "Attempt {}/{} found nothing, waiting {:?}",
                n,
                max_attempts,
                config.delay()
            );
            clock.sleep(config.delay()).await;
        }
    }
    Ok(None)
}
