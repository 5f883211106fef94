//! PostgreSQL implementation of TrackingRepository
//!
//! `apply_accrual` is the one multi-statement transaction in the store. Every
//! statement carries an optimistic guard in its WHERE clause; if any guard
//! matches zero rows the whole transaction rolls back and the caller retries
//! on the next tick.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clip_core::traits::{AccrualGrant, RepoResult, TrackedSubmission, TrackingRepository};

use crate::models::TrackedSubmissionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TrackingRepository
#[derive(Clone)]
pub struct PgTrackingRepository {
    pool: PgPool,
}

impl PgTrackingRepository {
    /// Create a new PgTrackingRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackingRepository for PgTrackingRepository {
    #[instrument(skip(self))]
    async fn working_set(&self) -> RepoResult<Vec<TrackedSubmission>> {
        let rows = sqlx::query_as::<_, TrackedSubmissionModel>(
            r"
            SELECT s.id AS submission_id, s.discord_id, s.campaign_id, s.video_url,
                   s.platform, s.current_views, s.earnings,
                   c.rate_per_100k, c.rate_per_1m, c.max_earn_per_post,
                   c.max_earn_per_creator, c.remaining_budget,
                   (SELECT COALESCE(SUM(s2.earnings), 0)
                    FROM submissions s2
                    WHERE s2.discord_id = s.discord_id
                      AND s2.campaign_id = s.campaign_id) AS creator_campaign_earnings
            FROM submissions s
            JOIN campaigns c ON s.campaign_id = c.id
            JOIN social_profiles p ON s.social_profile_id = p.id
            WHERE s.tracking
              AND s.status = 'approved'
              AND c.status = 'live'
              AND p.status <> 'banned'
              AND NOT EXISTS (
                  SELECT 1 FROM banned_profiles b WHERE b.normalized_id = p.normalized_id
              )
            ORDER BY s.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TrackedSubmission::from).collect())
    }

    #[instrument(skip(self))]
    async fn deplete_budget(&self, campaign_id: i64, submission_id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("UPDATE campaigns SET remaining_budget = 0 WHERE id = $1")
            .bind(campaign_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("UPDATE submissions SET tracking = FALSE WHERE id = $1")
            .bind(submission_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, grant), fields(submission_id = grant.submission_id))]
    async fn apply_accrual(&self, grant: &AccrualGrant) -> RepoResult<bool> {
        let delta = grant.delta.into_inner();
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Views move forward only, and the row must still be tracked. A cap
        // hit turns tracking off in the same statement.
        let submission = sqlx::query(
            r"
            UPDATE submissions
            SET current_views = $2,
                earnings = earnings + $3,
                tracking = CASE WHEN earnings + $3 >= $4 THEN FALSE ELSE tracking END
            WHERE id = $1 AND tracking AND current_views <= $2
            ",
        )
        .bind(grant.submission_id)
        .bind(grant.new_views)
        .bind(delta)
        .bind(grant.post_cap.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if submission.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        let campaign = sqlx::query(
            r"
            UPDATE campaigns
            SET remaining_budget = remaining_budget - $2
            WHERE id = $1 AND status = 'live' AND remaining_budget >= $2
            ",
        )
        .bind(grant.campaign_id)
        .bind(delta)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if campaign.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        let user = sqlx::query(
            r"
            UPDATE users
            SET total_earnings = total_earnings + $2,
                pending_earnings = pending_earnings + $2
            WHERE discord_id = $1
            ",
        )
        .bind(&grant.discord_id)
        .bind(delta)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if user.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        sqlx::query("INSERT INTO view_history (submission_id, views) VALUES ($1, $2)")
            .bind(grant.submission_id)
            .bind(grant.new_views)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }
}
