//! View sources
//!
//! Real platform APIs sit behind the `ViewSource` port. Until API credentials
//! are wired in, the simulated source produces plausible, monotonically
//! growing counts so the whole accrual path runs end to end.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use clip_core::traits::ViewSource;
use clip_core::value_objects::Platform;

/// Simulated view source.
///
/// First fetch for a URL seeds a random base count; every later fetch adds
/// random growth, per URL, so counts only move forward.
pub struct SimulatedViewSource {
    counts: Mutex<HashMap<String, u64>>,
}

impl SimulatedViewSource {
    /// Create a new SimulatedViewSource
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for SimulatedViewSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewSource for SimulatedViewSource {
    async fn fetch_view_count(&self, video_url: &str, platform: Platform) -> Option<u64> {
        let mut counts = self.counts.lock().ok()?;
        let mut rng = rand::thread_rng();

        let count = counts
            .entry(video_url.to_string())
            .and_modify(|c| *c += rng.gen_range(100..=1_000))
            .or_insert_with(|| rng.gen_range(1_000..=50_000));

        debug!(video_url = %video_url, platform = %platform, views = *count, "Simulated view count");
        Some(*count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_only_grow() {
        let source = SimulatedViewSource::new();
        let url = "https://tiktok.com/@c/video/1";

        let first = source.fetch_view_count(url, Platform::TikTok).await.unwrap();
        let second = source.fetch_view_count(url, Platform::TikTok).await.unwrap();
        let third = source.fetch_view_count(url, Platform::TikTok).await.unwrap();

        assert!((1_000..=50_000).contains(&first));
        assert!(second > first);
        assert!(third > second);
    }

    #[tokio::test]
    async fn test_urls_are_independent() {
        let source = SimulatedViewSource::new();
        let a = source
            .fetch_view_count("https://tiktok.com/@c/video/1", Platform::TikTok)
            .await
            .unwrap();
        source
            .fetch_view_count("https://tiktok.com/@c/video/2", Platform::TikTok)
            .await
            .unwrap();
        let a_again = source
            .fetch_view_count("https://tiktok.com/@c/video/1", Platform::TikTok)
            .await
            .unwrap();

        assert!(a_again > a);
    }
}
