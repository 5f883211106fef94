//! View-count provider port
//!
//! Any real implementation calls third-party platform APIs; latency is
//! unbounded, so the accrual engine wraps calls in a timeout. Unavailability
//! is not an error - just no progress this tick.

use async_trait::async_trait;

use crate::value_objects::Platform;

#[async_trait]
pub trait ViewSource: Send + Sync {
    /// Fetch the current view count for a video, or `None` if the provider
    /// cannot answer right now.
    async fn fetch_view_count(&self, video_url: &str, platform: Platform) -> Option<u64>;
}

/// Fit a provider count into the store's signed view columns; an absurd
/// count saturates instead of wrapping negative
#[must_use]
pub fn clamp_view_count(views: u64) -> i64 {
    i64::try_from(views).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_passes_ordinary_counts() {
        assert_eq!(clamp_view_count(0), 0);
        assert_eq!(clamp_view_count(1_234_567), 1_234_567);
    }

    #[test]
    fn test_clamp_saturates_oversized_counts() {
        assert_eq!(clamp_view_count(u64::MAX), i64::MAX);
        assert_eq!(clamp_view_count(i64::MAX as u64 + 1), i64::MAX);
    }
}
