//! Rate limit details attached to rate limit failures.
//!
//! Runs never wait for a rate limit window to reset. When GitHub refuses a
//! request because the quota is spent, the gateway fetches the current quota
//! so the error shown to the user says when the window reopens.

/// Quota snapshot fetched from the `/rate_limit` endpoint.
///
/// # Example
///
/// ```
/// use contrib_stats::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 0, 1_700_000_000);
/// assert_eq!(info.remaining(), 0);
/// assert_eq!(info.reset_at(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    /// Unix timestamp when the quota resets.
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit snapshot.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Returns the maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the Unix timestamp when the quota resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Formats the snapshot as a suffix for error messages.
    pub(crate) fn describe(&self) -> String {
        format!(
            "{remaining}/{limit} requests left, resets at {reset}",
            remaining = self.remaining,
            limit = self.limit,
            reset = self.reset_at
        )
    }
}
