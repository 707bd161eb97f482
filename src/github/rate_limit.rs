//! Rate limit details attached to rate limit failures.

/// Snapshot of the core rate limit returned by `GET /rate_limit`.
///
/// # Example
///
/// ```
/// use prharvest::github::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 0, 1_700_000_000);
/// assert!(info.is_exhausted());
/// assert_eq!(info.reset_at(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
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

    /// Converts the counters reported by Octocrab, rejecting values that do
    /// not fit in `u32`.
    #[must_use]
    pub fn from_counters(limit: usize, remaining: usize, reset_at: u64) -> Option<Self> {
        Some(Self::new(
            u32::try_from(limit).ok()?,
            u32::try_from(remaining).ok()?,
            reset_at,
        ))
    }

    /// Maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp at which the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true once no requests remain.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
