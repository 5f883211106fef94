//! Earnings accrual engine
//!
//! Each tick walks the working set of tracked submissions, fetches fresh view
//! counts, converts growth into cents at the campaign's better-paying tier,
//! clamps at the per-post and per-creator caps, and applies each grant as one
//! atomic store transaction. A grant that no longer fits the remaining budget
//! is rejected whole: the budget is zeroed and the post stops tracking with
//! nothing granted.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{info, instrument, warn};

use clip_core::entities::{ActivityLog, RateCard};
use clip_core::error::DomainError;
use clip_core::traits::{
    clamp_view_count, AccrualGrant, ActivityLogRepository, TrackedSubmission, TrackingRepository,
    ViewSource,
};
use clip_core::value_objects::UsdCents;

/// Views per milestone bucket; crossing a bucket boundary gets logged
const MILESTONE_BUCKET: i64 = 10_000;

/// What happened to one working-set row in a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Earnings granted and all balances moved
    Granted(UsdCents),
    /// No view growth (or growth too small to pay a cent)
    NoGrowth,
    /// View source timed out or had no data; retried next tick
    SourceUnavailable,
    /// Remaining budget gone, either already exhausted or overdrawn by this
    /// grant; campaign depleted, tracking stopped, nothing paid
    BudgetDepleted,
    /// Creator cap already consumed by sibling posts; nothing paid
    CapExhausted,
    /// A store guard failed mid-grant; retried next tick
    Contention,
}

/// Counters for one engine tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub processed: usize,
    pub granted: usize,
    pub total_granted: UsdCents,
    pub depleted: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// The accrual engine; one instance drives the whole working set
pub struct AccrualEngine {
    tracking_repo: Arc<dyn TrackingRepository>,
    activity_repo: Arc<dyn ActivityLogRepository>,
    view_source: Arc<dyn ViewSource>,
    fetch_timeout: Duration,
}

impl AccrualEngine {
    /// Create a new AccrualEngine
    pub fn new(
        tracking_repo: Arc<dyn TrackingRepository>,
        activity_repo: Arc<dyn ActivityLogRepository>,
        view_source: Arc<dyn ViewSource>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            tracking_repo,
            activity_repo,
            view_source,
            fetch_timeout,
        }
    }

    /// Run one full pass over the working set.
    ///
    /// Never fails the tick as a whole: per-row errors are logged and counted,
    /// and the row is retried on the next pass.
    #[instrument(skip(self))]
    pub async fn tick(&self) -> TickSummary {
        let rows = match self.tracking_repo.working_set().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Failed to load accrual working set");
                return TickSummary {
                    errors: 1,
                    ..TickSummary::default()
                };
            }
        };

        let mut summary = TickSummary {
            processed: rows.len(),
            ..TickSummary::default()
        };
        for row in &rows {
            match self.process(row).await {
                Ok(Outcome::Granted(delta)) => {
                    summary.granted += 1;
                    summary.total_granted += delta;
                }
                Ok(Outcome::BudgetDepleted) => summary.depleted += 1,
                Ok(_) => summary.skipped += 1,
                Err(e) => {
                    warn!(
                        submission_id = row.submission_id,
                        error = %e,
                        "Accrual failed for submission"
                    );
                    summary.errors += 1;
                }
            }
        }

        if summary.granted > 0 || summary.depleted > 0 {
            info!(
                processed = summary.processed,
                granted = summary.granted,
                total = %summary.total_granted,
                depleted = summary.depleted,
                "Accrual tick complete"
            );
        }
        summary
    }

    /// Process one tracked submission
    async fn process(&self, row: &TrackedSubmission) -> Result<Outcome, DomainError> {
        if !row.remaining_budget.is_positive() {
            // An exhausted campaign stops the row outright; no point paying
            // for a view fetch first
            self.tracking_repo
                .deplete_budget(row.campaign_id, row.submission_id)
                .await?;
            info!(
                campaign_id = row.campaign_id,
                submission_id = row.submission_id,
                "Campaign budget exhausted, tracking stopped"
            );
            return Ok(Outcome::BudgetDepleted);
        }

        let fetched = tokio::time::timeout(
            self.fetch_timeout,
            self.view_source.fetch_view_count(&row.video_url, row.platform),
        )
        .await;
        let Ok(Some(views)) = fetched else {
            return Ok(Outcome::SourceUnavailable);
        };

        let new_views = clamp_view_count(views);
        if new_views <= row.current_views {
            // Platform counters occasionally dip; never pay for a dip and
            // never move the anchor backwards
            return Ok(Outcome::NoGrowth);
        }
        let increase = (new_views - row.current_views) as u64;

        let card = RateCard {
            rate_per_100k: row.rate_per_100k,
            rate_per_1m: row.rate_per_1m,
        };
        let raw = card.earnings_for(increase);
        if !raw.is_positive() {
            return Ok(Outcome::NoGrowth);
        }

        let post_headroom = row.max_earn_per_post.saturating_sub(row.earnings);
        let creator_headroom = row
            .max_earn_per_creator
            .saturating_sub(row.creator_campaign_earnings);
        let delta = raw.min(post_headroom).min(creator_headroom);
        if !delta.is_positive() {
            return Ok(Outcome::CapExhausted);
        }

        if delta > row.remaining_budget {
            self.tracking_repo
                .deplete_budget(row.campaign_id, row.submission_id)
                .await?;
            warn!(
                campaign_id = row.campaign_id,
                submission_id = row.submission_id,
                rejected = %delta,
                "Campaign budget depleted, grant rejected"
            );
            return Ok(Outcome::BudgetDepleted);
        }

        let grant = AccrualGrant {
            submission_id: row.submission_id,
            campaign_id: row.campaign_id,
            discord_id: row.discord_id.clone(),
            new_views,
            delta,
            post_cap: row.max_earn_per_post,
        };
        if !self.tracking_repo.apply_accrual(&grant).await? {
            return Ok(Outcome::Contention);
        }

        if new_views / MILESTONE_BUCKET > row.current_views / MILESTONE_BUCKET {
            info!(
                submission_id = row.submission_id,
                views = new_views,
                "View milestone crossed"
            );
            self.activity_repo
                .append(
                    &ActivityLog::new("VIEW_MILESTONE", &row.discord_id)
                        .target(&row.discord_id)
                        .details(json!({
                            "submission_id": row.submission_id,
                            "views": new_views,
                        })),
                )
                .await?;
        }

        Ok(Outcome::Granted(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use clip_core::traits::RepoResult;
    use clip_core::value_objects::Platform;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeTracking {
        rows: Vec<TrackedSubmission>,
        accept: bool,
        grants: Mutex<Vec<AccrualGrant>>,
        depletions: Mutex<Vec<(i64, i64)>>,
    }

    impl FakeTracking {
        fn new(rows: Vec<TrackedSubmission>) -> Self {
            Self {
                rows,
                accept: true,
                grants: Mutex::new(Vec::new()),
                depletions: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TrackingRepository for FakeTracking {
        async fn working_set(&self) -> RepoResult<Vec<TrackedSubmission>> {
            Ok(self.rows.clone())
        }

        async fn deplete_budget(&self, campaign_id: i64, submission_id: i64) -> RepoResult<()> {
            self.depletions.lock().unwrap().push((campaign_id, submission_id));
            Ok(())
        }

        async fn apply_accrual(&self, grant: &AccrualGrant) -> RepoResult<bool> {
            if !self.accept {
                return Ok(false);
            }
            self.grants.lock().unwrap().push(grant.clone());
            Ok(true)
        }
    }

    struct FakeActivity {
        entries: Mutex<Vec<ActivityLog>>,
    }

    #[async_trait]
    impl ActivityLogRepository for FakeActivity {
        async fn append(&self, entry: &ActivityLog) -> RepoResult<()> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(())
        }

        async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> RepoResult<u64> {
            Ok(0)
        }
    }

    struct FakeSource {
        views: Option<u64>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(views: Option<u64>) -> Self {
            Self {
                views,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ViewSource for FakeSource {
        async fn fetch_view_count(&self, _video_url: &str, _platform: Platform) -> Option<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.views
        }
    }

    fn row() -> TrackedSubmission {
        TrackedSubmission {
            submission_id: 1,
            discord_id: "creator-1".to_string(),
            campaign_id: 7,
            video_url: "https://tiktok.com/@c/video/1".to_string(),
            platform: Platform::TikTok,
            current_views: 100_000,
            earnings: UsdCents::ZERO,
            rate_per_100k: UsdCents::from_dollars(10),
            rate_per_1m: UsdCents::from_dollars(80),
            max_earn_per_post: UsdCents::from_dollars(200),
            max_earn_per_creator: UsdCents::from_dollars(500),
            remaining_budget: UsdCents::from_dollars(1_000),
            creator_campaign_earnings: UsdCents::ZERO,
        }
    }

    fn engine(
        tracking: Arc<FakeTracking>,
        activity: Arc<FakeActivity>,
        views: Option<u64>,
    ) -> AccrualEngine {
        AccrualEngine::new(
            tracking,
            activity,
            Arc::new(FakeSource::new(views)),
            Duration::from_secs(5),
        )
    }

    fn fakes(rows: Vec<TrackedSubmission>) -> (Arc<FakeTracking>, Arc<FakeActivity>) {
        (
            Arc::new(FakeTracking::new(rows)),
            Arc::new(FakeActivity {
                entries: Mutex::new(Vec::new()),
            }),
        )
    }

    #[tokio::test]
    async fn test_growth_pays_at_better_tier() {
        let (tracking, activity) = fakes(vec![row()]);
        // 600k new views: $10/100k tier pays $60, beats $80/1M's $48
        let summary = engine(tracking.clone(), activity, Some(700_000)).tick().await;

        assert_eq!(summary.granted, 1);
        assert_eq!(summary.total_granted, UsdCents::from_dollars(60));
        let grants = tracking.grants.lock().unwrap();
        assert_eq!(grants[0].new_views, 700_000);
        assert_eq!(grants[0].delta, UsdCents::from_dollars(60));
    }

    #[tokio::test]
    async fn test_no_growth_pays_nothing() {
        let (tracking, activity) = fakes(vec![row()]);
        let summary = engine(tracking.clone(), activity, Some(100_000)).tick().await;

        assert_eq!(summary.granted, 0);
        assert_eq!(summary.skipped, 1);
        assert!(tracking.grants.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_view_dip_is_ignored() {
        let (tracking, activity) = fakes(vec![row()]);
        let summary = engine(tracking.clone(), activity, Some(90_000)).tick().await;

        assert_eq!(summary.skipped, 1);
        assert!(tracking.grants.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_source_skips_row() {
        let (tracking, activity) = fakes(vec![row()]);
        let summary = engine(tracking.clone(), activity, None).tick().await;

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors, 0);
        assert!(tracking.grants.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_cap_clamps_grant() {
        let mut r = row();
        r.earnings = UsdCents::from_dollars(190);
        let (tracking, activity) = fakes(vec![r]);
        // Raw growth pays $60 but only $10 of post headroom remains
        let summary = engine(tracking.clone(), activity, Some(700_000)).tick().await;

        assert_eq!(summary.total_granted, UsdCents::from_dollars(10));
        let grants = tracking.grants.lock().unwrap();
        assert_eq!(grants[0].delta, UsdCents::from_dollars(10));
    }

    #[tokio::test]
    async fn test_creator_cap_counts_sibling_posts() {
        let mut r = row();
        // Sibling submissions already consumed $495 of the $500 creator cap
        r.creator_campaign_earnings = UsdCents::new(49_500);
        let (tracking, activity) = fakes(vec![r]);
        let summary = engine(tracking.clone(), activity, Some(700_000)).tick().await;

        assert_eq!(summary.total_granted, UsdCents::from_dollars(5));
    }

    #[tokio::test]
    async fn test_exhausted_creator_cap_grants_nothing() {
        let mut r = row();
        r.creator_campaign_earnings = UsdCents::from_dollars(500);
        let (tracking, activity) = fakes(vec![r]);
        let summary = engine(tracking.clone(), activity, Some(700_000)).tick().await;

        assert_eq!(summary.granted, 0);
        assert_eq!(summary.skipped, 1);
        assert!(tracking.grants.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exhausted_budget_stops_row_without_fetching() {
        let mut r = row();
        r.remaining_budget = UsdCents::ZERO;
        let (tracking, activity) = fakes(vec![r]);
        let source = Arc::new(FakeSource::new(Some(700_000)));
        let summary = AccrualEngine::new(
            tracking.clone(),
            activity,
            source.clone(),
            Duration::from_secs(5),
        )
        .tick()
        .await;

        assert_eq!(summary.depleted, 1);
        assert_eq!(summary.granted, 0);
        assert_eq!(summary.skipped, 0);
        // The row is stopped before the provider is ever consulted
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(*tracking.depletions.lock().unwrap(), vec![(7, 1)]);
        assert!(tracking.grants.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overdraft_depletes_and_rejects_whole_grant() {
        let mut r = row();
        r.remaining_budget = UsdCents::from_dollars(30);
        let (tracking, activity) = fakes(vec![r]);
        // $60 grant against $30 of budget: nothing paid, campaign zeroed
        let summary = engine(tracking.clone(), activity, Some(700_000)).tick().await;

        assert_eq!(summary.granted, 0);
        assert_eq!(summary.depleted, 1);
        assert!(tracking.grants.lock().unwrap().is_empty());
        assert_eq!(*tracking.depletions.lock().unwrap(), vec![(7, 1)]);
    }

    #[tokio::test]
    async fn test_guard_failure_retries_next_tick() {
        let mut tracking = FakeTracking::new(vec![row()]);
        tracking.accept = false;
        let tracking = Arc::new(tracking);
        let activity = Arc::new(FakeActivity {
            entries: Mutex::new(Vec::new()),
        });
        let summary = engine(tracking.clone(), activity, Some(700_000)).tick().await;

        assert_eq!(summary.granted, 0);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors, 0);
    }

    #[tokio::test]
    async fn test_milestone_logged_on_bucket_crossing() {
        let (tracking, activity) = fakes(vec![row()]);
        engine(tracking, activity.clone(), Some(700_000)).tick().await;

        let entries = activity.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action_type, "VIEW_MILESTONE");
    }

    #[tokio::test]
    async fn test_no_milestone_within_same_bucket() {
        let mut r = row();
        r.current_views = 12_000;
        let (tracking, activity) = fakes(vec![r]);
        // 12,000 -> 19,000 stays inside the 10k bucket
        engine(tracking, activity.clone(), Some(19_000)).tick().await;

        assert!(activity.entries.lock().unwrap().is_empty());
    }
}
