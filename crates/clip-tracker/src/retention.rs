//! Retention sweeper
//!
//! Deletes audit rows past their retention window. Entity tables (users,
//! profiles, campaigns, submissions, payouts) are never swept.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};

use clip_core::traits::{ActivityLogRepository, ViewHistoryRepository};

/// Rows deleted by one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub activity_logs: u64,
    pub view_history: u64,
}

/// The retention sweeper
pub struct RetentionSweeper {
    activity_repo: Arc<dyn ActivityLogRepository>,
    view_history_repo: Arc<dyn ViewHistoryRepository>,
    activity_log_days: i64,
    view_history_days: i64,
}

impl RetentionSweeper {
    /// Create a new RetentionSweeper with per-table retention windows in days
    pub fn new(
        activity_repo: Arc<dyn ActivityLogRepository>,
        view_history_repo: Arc<dyn ViewHistoryRepository>,
        activity_log_days: i64,
        view_history_days: i64,
    ) -> Self {
        Self {
            activity_repo,
            view_history_repo,
            activity_log_days,
            view_history_days,
        }
    }

    /// Run one sweep. Failures are logged per table; one table failing does
    /// not stop the other.
    #[instrument(skip(self))]
    pub async fn sweep(&self) -> SweepSummary {
        let now = Utc::now();
        let mut summary = SweepSummary::default();

        match self
            .activity_repo
            .delete_older_than(now - Duration::days(self.activity_log_days))
            .await
        {
            Ok(deleted) => summary.activity_logs = deleted,
            Err(e) => warn!(error = %e, "Activity log sweep failed"),
        }

        match self
            .view_history_repo
            .delete_older_than(now - Duration::days(self.view_history_days))
            .await
        {
            Ok(deleted) => summary.view_history = deleted,
            Err(e) => warn!(error = %e, "View history sweep failed"),
        }

        if summary.activity_logs > 0 || summary.view_history > 0 {
            info!(
                activity_logs = summary.activity_logs,
                view_history = summary.view_history,
                "Retention sweep complete"
            );
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::DateTime;
    use clip_core::entities::{ActivityLog, ViewHistory};
    use clip_core::error::DomainError;
    use clip_core::traits::RepoResult;
    use std::sync::Mutex;

    struct FakeActivity {
        cutoffs: Mutex<Vec<DateTime<Utc>>>,
        fail: bool,
    }

    #[async_trait]
    impl ActivityLogRepository for FakeActivity {
        async fn append(&self, _entry: &ActivityLog) -> RepoResult<()> {
            Ok(())
        }

        async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
            if self.fail {
                return Err(DomainError::DatabaseError("down".to_string()));
            }
            self.cutoffs.lock().unwrap().push(cutoff);
            Ok(3)
        }
    }

    struct FakeHistory {
        cutoffs: Mutex<Vec<DateTime<Utc>>>,
    }

    #[async_trait]
    impl ViewHistoryRepository for FakeHistory {
        async fn for_submission(
            &self,
            _submission_id: i64,
            _limit: i64,
        ) -> RepoResult<Vec<ViewHistory>> {
            Ok(Vec::new())
        }

        async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
            self.cutoffs.lock().unwrap().push(cutoff);
            Ok(5)
        }
    }

    #[tokio::test]
    async fn test_sweeps_both_tables_with_their_own_windows() {
        let activity = Arc::new(FakeActivity {
            cutoffs: Mutex::new(Vec::new()),
            fail: false,
        });
        let history = Arc::new(FakeHistory {
            cutoffs: Mutex::new(Vec::new()),
        });
        let sweeper = RetentionSweeper::new(activity.clone(), history.clone(), 90, 60);

        let summary = sweeper.sweep().await;
        assert_eq!(summary.activity_logs, 3);
        assert_eq!(summary.view_history, 5);

        let now = Utc::now();
        let activity_cutoff = activity.cutoffs.lock().unwrap()[0];
        let history_cutoff = history.cutoffs.lock().unwrap()[0];
        assert!((now - activity_cutoff).num_days() >= 89);
        assert!((now - history_cutoff).num_days() >= 59);
        assert!(history_cutoff > activity_cutoff);
    }

    #[tokio::test]
    async fn test_one_table_failing_does_not_stop_the_other() {
        let activity = Arc::new(FakeActivity {
            cutoffs: Mutex::new(Vec::new()),
            fail: true,
        });
        let history = Arc::new(FakeHistory {
            cutoffs: Mutex::new(Vec::new()),
        });
        let sweeper = RetentionSweeper::new(activity, history.clone(), 90, 60);

        let summary = sweeper.sweep().await;
        assert_eq!(summary.activity_logs, 0);
        assert_eq!(summary.view_history, 5);
    }
}
