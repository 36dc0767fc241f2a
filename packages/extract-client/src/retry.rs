//! Explicit retry policy for extraction calls.
//!
//! The client itself performs exactly one attempt per call; callers opt into
//! retries through [`RetryPolicy`] so the count and backoff are visible
//! configuration rather than a hidden default. Retries are invisible to any
//! state machine observing the call: the future resolves once, with the
//! final outcome.

use std::future::Future;
use std::time::Duration;

use crate::error::{ExtractError, Result};

/// Retry configuration for a single logical extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure.
    pub max_retries: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// No retries: every failure surfaces immediately.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }

    /// Run `op`, re-invoking it after [`ExtractError::is_retryable`] failures
    /// until it succeeds or the attempt budget is spent.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0u32;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::debug!(attempt, error = %err, "Extraction attempt failed, retrying");
                    sleep(self.backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn server_error() -> ExtractError {
        ExtractError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        }
    }

    #[tokio::test]
    async fn test_retries_once_then_succeeds() {
        let policy = RetryPolicy {
            max_retries: 1,
            backoff: Duration::ZERO,
        };
        let calls = Cell::new(0u32);

        let result = policy
            .run(|| {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt == 1 {
                        Err(server_error())
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_attempt_budget_is_bounded() {
        let policy = RetryPolicy {
            max_retries: 2,
            backoff: Duration::ZERO,
        };
        let calls = Cell::new(0u32);

        let result: Result<()> = policy
            .run(|| {
                calls.set(calls.get() + 1);
                async { Err(server_error()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_none_makes_exactly_one_attempt() {
        let policy = RetryPolicy::none();
        let calls = Cell::new(0u32);

        let result: Result<()> = policy
            .run(|| {
                calls.set(calls.get() + 1);
                async { Err(server_error()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let policy = RetryPolicy::default();
        let calls = Cell::new(0u32);

        let result: Result<()> = policy
            .run(|| {
                calls.set(calls.get() + 1);
                async {
                    Err(ExtractError::Api {
                        status: 400,
                        message: "Failed to generate schema".into(),
                    })
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}
