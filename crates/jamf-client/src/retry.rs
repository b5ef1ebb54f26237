//! Retry policy with exponential backoff and jitter.
//!
//! Deciding *whether* to retry is [`RetryConfig::should_retry`]; deciding *how
//! long* to wait and *how often* is [`RetryPolicy`]. Both are pure, so the
//! decision can be tested without a server.

use rand::Rng;
use std::time::Duration;

use crate::error::Result;
use crate::request::ResponsePredicate;
use crate::response::Response;

/// How an HTTP 424 (Failed Dependency) response is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailedDependencyRetry {
    /// Retry 424 unless retries are disabled.
    #[default]
    UnlessDisabled,
    /// Retry 424 even when retries are disabled.
    Always,
    /// Never retry 424.
    Never,
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Turns off every retry except [`FailedDependencyRetry::Always`].
    pub disabled: bool,
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    /// Initial delay before first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Backoff strategy to use.
    pub backoff: BackoffStrategy,
    /// Whether to respect Retry-After headers.
    pub respect_retry_after: bool,
    /// Maximum time to wait from Retry-After header.
    pub max_retry_after: Duration,
    /// Treatment of HTTP 424.
    pub failed_dependency: FailedDependencyRetry,
    /// Whether the baseline policy retries 5xx responses (501 never is).
    pub retry_server_errors: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff: BackoffStrategy::Exponential { factor: 2.0 },
            respect_retry_after: true,
            max_retry_after: Duration::from_secs(60),
            failed_dependency: FailedDependencyRetry::default(),
            retry_server_errors: true,
        }
    }
}

impl RetryConfig {
    /// Set the total number of attempts.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the initial delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff strategy.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Set how HTTP 424 is treated.
    pub fn with_failed_dependency(mut self, mode: FailedDependencyRetry) -> Self {
        self.failed_dependency = mode;
        self
    }

    /// Enable or disable baseline retries of 5xx responses.
    pub fn with_server_error_retry(mut self, enabled: bool) -> Self {
        self.retry_server_errors = enabled;
        self
    }

    /// Enable or disable honouring Retry-After.
    pub fn with_respect_retry_after(mut self, enabled: bool) -> Self {
        self.respect_retry_after = enabled;
        self
    }

    /// Disable retries.
    pub fn no_retry() -> Self {
        Self {
            disabled: true,
            ..Default::default()
        }
    }

    /// Aggressive retry config for callers that create and immediately read back.
    pub fn aggressive() -> Self {
        Self {
            max_attempts: 10,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(60),
            backoff: BackoffStrategy::ExponentialWithJitter { factor: 2.0 },
            max_retry_after: Duration::from_secs(120),
            ..Default::default()
        }
    }

    /// Decide whether an attempt's outcome warrants another attempt.
    ///
    /// Order: global disable flag, HTTP 424, the caller's consistency-failure
    /// predicate, then the baseline transport policy (connection errors,
    /// timeouts, 429, 5xx except 501).
    pub fn should_retry(
        &self,
        outcome: &Result<Response>,
        consistency_failure: Option<&ResponsePredicate>,
    ) -> bool {
        let response = outcome.as_ref().ok();
        let failed_dependency = response.is_some_and(|r| r.status() == 424);

        if self.disabled {
            return failed_dependency && self.failed_dependency == FailedDependencyRetry::Always;
        }

        if failed_dependency && self.failed_dependency != FailedDependencyRetry::Never {
            return true;
        }

        match outcome {
            Ok(response) => {
                if consistency_failure.is_some_and(|predicate| predicate(response)) {
                    return true;
                }
                self.is_baseline_retryable_status(response.status())
            }
            Err(err) => err.is_retryable(),
        }
    }

    fn is_baseline_retryable_status(&self, status: u16) -> bool {
        status == 429 || (self.retry_server_errors && (500..600).contains(&status) && status != 501)
    }
}

/// Backoff strategy for determining retry delays.
#[derive(Debug, Clone, Copy)]
pub enum BackoffStrategy {
    /// Constant delay between retries.
    Constant,
    /// Linear increase in delay (delay * attempt).
    Linear,
    /// Exponential increase in delay (delay * factor^attempt).
    Exponential { factor: f64 },
    /// Exponential with random jitter to avoid thundering herd.
    ExponentialWithJitter { factor: f64 },
}

impl BackoffStrategy {
    /// Calculate the delay for a given retry number (0-indexed).
    pub fn delay(&self, attempt: u32, initial_delay: Duration, max_delay: Duration) -> Duration {
        let delay = match self {
            BackoffStrategy::Constant => initial_delay,
            BackoffStrategy::Linear => initial_delay.saturating_mul(attempt + 1),
            BackoffStrategy::Exponential { factor } => {
                let multiplier = factor.powi(attempt as i32);
                secs_f64_saturating(initial_delay.as_secs_f64() * multiplier, max_delay)
            }
            BackoffStrategy::ExponentialWithJitter { factor } => {
                let base_delay = initial_delay.as_secs_f64() * factor.powi(attempt as i32);
                let jitter = rand::rng().random::<f64>() * base_delay;
                secs_f64_saturating(base_delay + jitter, max_delay)
            }
        };

        std::cmp::min(delay, max_delay)
    }
}

fn secs_f64_saturating(secs: f64, max_delay: Duration) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(max_delay)
}

/// Per-call attempt counter that hands out backoff delays.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
    attempt: u32,
}

impl RetryPolicy {
    /// Create a new retry policy from config.
    pub fn new(config: RetryConfig) -> Self {
        Self { config, attempt: 0 }
    }

    /// Number of retries handed out so far.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Returns true while another attempt fits within `max_attempts`.
    pub fn should_retry(&self) -> bool {
        self.attempt + 1 < self.config.max_attempts
    }

    /// Record a retry and return the delay before it.
    /// Returns None once all attempts are used up.
    pub fn next_delay(&mut self, retry_after: Option<Duration>) -> Option<Duration> {
        if !self.should_retry() {
            return None;
        }

        let delay = match retry_after {
            Some(retry_after) if self.config.respect_retry_after => {
                std::cmp::min(retry_after, self.config.max_retry_after)
            }
            _ => self.config.backoff.delay(
                self.attempt,
                self.config.initial_delay,
                self.config.max_delay,
            ),
        };

        self.attempt += 1;
        Some(delay)
    }
}
