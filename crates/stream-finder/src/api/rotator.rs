//! Endpoint rotation with failover.
//!
//! Keeps an ordered list of interchangeable mirror base URLs and a rotation
//! cursor. Every failed attempt advances the cursor, and one logical call
//! never tries more mirrors than the list holds, so each mirror is visited
//! at most once per call.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Failure of a single attempt against a single mirror.
///
/// Recovered locally by rotating to the next mirror; callers of
/// [`EndpointRotator::perform_with_failover`] never see it.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("request failed with status {0}")]
    Http(reqwest::StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("attempt timed out")]
    TimedOut,
}

/// Terminal outcome of a logical operation.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("mirror endpoint list is empty")]
    NoEndpoints,

    /// Every mirror in the attempt budget failed. Distinguishable from a
    /// successful-but-empty response, which comes back as `Ok` with an
    /// empty collection.
    #[error("all mirrors failed after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Rotates through mirror base URLs, advancing on failure.
///
/// The cursor is not reset between calls by default: a logical call picks
/// up from wherever the previous one stopped, so a known-bad mirror is not
/// retried first on every call. Set `sticky` to `false` to start every
/// call from the first mirror instead.
#[derive(Debug)]
pub struct EndpointRotator {
    endpoints: Vec<String>,
    /// Relaxed atomic: concurrent calls may interleave advances and lose
    /// updates, which costs at worst a sub-optimal mirror choice.
    cursor: AtomicUsize,
    request_timeout: Duration,
    sticky: bool,
}

impl EndpointRotator {
    /// Create a rotator over the given mirror list.
    pub fn new(
        endpoints: Vec<String>,
        request_timeout: Duration,
        sticky: bool,
    ) -> Result<Self, MirrorError> {
        if endpoints.is_empty() {
            return Err(MirrorError::NoEndpoints);
        }

        Ok(Self {
            endpoints,
            cursor: AtomicUsize::new(0),
            request_timeout,
            sticky,
        })
    }

    /// All configured mirror base URLs, in rotation order.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Number of configured mirrors.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Relaxed) % self.endpoints.len()
    }

    /// Base URL the rotator currently considers active.
    pub fn current_endpoint(&self) -> &str {
        &self.endpoints[self.cursor()]
    }

    /// Move the cursor to the next mirror.
    ///
    /// Returns `false` when the advance wrapped back to the first mirror,
    /// meaning a full cycle has been completed. Retry bounding is done by
    /// attempt counting in [`perform_with_failover`](Self::perform_with_failover);
    /// the return value is informational.
    pub fn advance(&self) -> bool {
        let next = (self.cursor() + 1) % self.endpoints.len();
        self.cursor.store(next, Ordering::Relaxed);
        next != 0
    }

    /// Run `op` against the active mirror, rotating on failure.
    ///
    /// Each attempt is bounded by the rotator's request timeout; a timeout
    /// aborts the in-flight attempt and counts as a failure like any other.
    /// At most `max_attempts` mirrors are tried (capped at the list length,
    /// which is also the default), each at most once. The first success is
    /// returned as-is; exhausting the budget yields
    /// [`MirrorError::Exhausted`].
    pub async fn perform_with_failover<T, F, Fut>(
        &self,
        what: &str,
        max_attempts: Option<usize>,
        op: F,
    ) -> Result<T, MirrorError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<T, AttemptError>>,
    {
        if !self.sticky {
            self.cursor.store(0, Ordering::Relaxed);
        }

        let budget = max_attempts
            .unwrap_or(self.endpoints.len())
            .min(self.endpoints.len());

        for attempt in 1..=budget {
            let base = self.current_endpoint().to_string();
            debug!(operation = what, endpoint = %base, attempt, "Trying mirror");

            let error = match timeout(self.request_timeout, op(base.clone())).await {
                Ok(Ok(value)) => {
                    debug!(operation = what, endpoint = %base, attempt, "Mirror request succeeded");
                    return Ok(value);
                }
                Ok(Err(error)) => error,
                Err(_) => AttemptError::TimedOut,
            };

            warn!(
                operation = what,
                endpoint = %base,
                attempt,
                error = %error,
                "Mirror attempt failed"
            );

            self.advance();
        }

        warn!(operation = what, attempts = budget, "All mirrors failed");
        Err(MirrorError::Exhausted { attempts: budget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;
    use std::time::Instant;

    fn rotator(endpoints: &[&str]) -> EndpointRotator {
        EndpointRotator::new(
            endpoints.iter().map(|e| e.to_string()).collect(),
            Duration::from_millis(200),
            true,
        )
        .unwrap()
    }

    fn failure() -> AttemptError {
        AttemptError::Http(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[test]
    fn test_empty_endpoint_list_rejected() {
        let result = EndpointRotator::new(Vec::new(), Duration::from_secs(1), true);
        assert!(matches!(result, Err(MirrorError::NoEndpoints)));
    }

    #[test]
    fn test_advance_signals_wrap() {
        let rotator = rotator(&["a", "b", "c"]);
        assert_eq!(rotator.current_endpoint(), "a");
        assert!(rotator.advance());
        assert_eq!(rotator.current_endpoint(), "b");
        assert!(rotator.advance());
        assert_eq!(rotator.current_endpoint(), "c");
        // Wrapping back to the first mirror reports a completed cycle
        assert!(!rotator.advance());
        assert_eq!(rotator.current_endpoint(), "a");
    }

    #[tokio::test]
    async fn test_exhaustion_visits_each_mirror_once() {
        let rotator = rotator(&["a", "b", "c"]);
        let visited = Mutex::new(Vec::new());

        let result = rotator
            .perform_with_failover("op", None, |base| {
                let visited = &visited;
                async move {
                    visited.lock().unwrap().push(base);
                    Err::<(), _>(failure())
                }
            })
            .await;

        assert!(matches!(result, Err(MirrorError::Exhausted { attempts: 3 })));
        assert_eq!(
            *visited.lock().unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[tokio::test]
    async fn test_success_short_circuits() {
        let rotator = rotator(&["a", "b", "c"]);
        let attempts = AtomicUsize::new(0);

        let result = rotator
            .perform_with_failover("op", None, |base| {
                let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n == 2 {
                        Ok(base)
                    } else {
                        Err(failure())
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "b");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cursor_sticks_across_calls() {
        let rotator = rotator(&["a", "b", "c"]);

        // Two failed attempts leave the cursor on the third mirror
        let result = rotator
            .perform_with_failover("op", Some(2), |_| async { Err::<(), _>(failure()) })
            .await;
        assert!(matches!(result, Err(MirrorError::Exhausted { attempts: 2 })));
        assert_eq!(rotator.cursor(), 2);

        // The next unrelated call starts where the previous one stopped
        let first_tried = rotator
            .perform_with_failover("op", None, |base| async move { Ok::<_, AttemptError>(base) })
            .await
            .unwrap();
        assert_eq!(first_tried, "c");
        assert_eq!(rotator.cursor(), 2);
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failure() {
        let rotator = EndpointRotator::new(
            vec!["a".to_string()],
            Duration::from_millis(50),
            true,
        )
        .unwrap();

        let started = Instant::now();
        let result = rotator
            .perform_with_failover("op", None, |_| {
                std::future::pending::<Result<(), AttemptError>>()
            })
            .await;

        assert!(matches!(result, Err(MirrorError::Exhausted { attempts: 1 })));
        // The never-resolving attempt was cut off, not left pending
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_two_failures_then_success() {
        // endpoints [a, b, c], cursor at 0; a and b fail, c succeeds
        let rotator = rotator(&["a", "b", "c"]);
        let attempts = AtomicUsize::new(0);

        let result = rotator
            .perform_with_failover("op", None, |base| {
                attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if base == "c" {
                        Ok(vec!["x".to_string()])
                    } else {
                        Err(failure())
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), vec!["x".to_string()]);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert_eq!(rotator.cursor(), 2);
    }

    #[tokio::test]
    async fn test_wrapped_cursor_reused_by_next_call() {
        // A fully exhausted call on two mirrors wraps the cursor back to
        // the first; the next call tries it first and succeeds.
        let rotator = rotator(&["a", "b"]);

        let result = rotator
            .perform_with_failover("op", None, |_| async { Err::<(), _>(failure()) })
            .await;
        assert!(matches!(result, Err(MirrorError::Exhausted { attempts: 2 })));
        assert_eq!(rotator.cursor(), 0);

        let attempts = AtomicUsize::new(0);
        let first_tried = rotator
            .perform_with_failover("op", None, |base| {
                attempts.fetch_add(1, Ordering::SeqCst);
                async move { Ok::<_, AttemptError>(base) }
            })
            .await
            .unwrap();

        assert_eq!(first_tried, "a");
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(rotator.cursor(), 0);
    }

    #[tokio::test]
    async fn test_non_sticky_resets_cursor_per_call() {
        let rotator = EndpointRotator::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            Duration::from_millis(200),
            false,
        )
        .unwrap();

        let result = rotator
            .perform_with_failover("op", Some(1), |_| async { Err::<(), _>(failure()) })
            .await;
        assert!(matches!(result, Err(MirrorError::Exhausted { attempts: 1 })));
        assert_eq!(rotator.cursor(), 1);

        let first_tried = rotator
            .perform_with_failover("op", None, |base| async move { Ok::<_, AttemptError>(base) })
            .await
            .unwrap();
        assert_eq!(first_tried, "a");
    }
}
