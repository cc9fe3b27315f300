//! Detection retry policy.
//!
//! The page reschedules itself 1s after every non-abort failure, forever.
//! Modeling that as an explicit policy keeps the delay injectable and lets
//! callers bound the loop if they want to.

use std::time::Duration;

/// Retry policy for failed detection attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay between a failed attempt and the next one.
    pub delay: Duration,
    /// Maximum number of retries; `None` retries forever.
    pub max_retries: Option<u32>,
}

impl RetryPolicy {
    /// Retry forever with the given delay.
    #[must_use]
    pub const fn unbounded(delay: Duration) -> Self {
        Self {
            delay,
            max_retries: None,
        }
    }

    /// Retry at most `max_retries` times with the given delay.
    #[must_use]
    pub const fn bounded(delay: Duration, max_retries: u32) -> Self {
        Self {
            delay,
            max_retries: Some(max_retries),
        }
    }

    /// Whether another retry is allowed after `retries_so_far` retries.
    #[must_use]
    pub fn allows_retry(&self, retries_so_far: u32) -> bool {
        self.max_retries.is_none_or(|max| retries_so_far < max)
    }
}

impl Default for RetryPolicy {
    /// The page's behavior: retry every second, forever.
    fn default() -> Self {
        Self::unbounded(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_second_unbounded() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert!(policy.allows_retry(0));
        assert!(policy.allows_retry(1_000_000));
    }

    #[test]
    fn test_bounded_policy_exhausts() {
        let policy = RetryPolicy::bounded(Duration::from_millis(100), 2);
        assert!(policy.allows_retry(0));
        assert!(policy.allows_retry(1));
        assert!(!policy.allows_retry(2));
    }
}
