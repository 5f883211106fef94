//! PostgreSQL implementation of SubmissionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use clip_core::entities::Submission;
use clip_core::error::DomainError;
use clip_core::traits::{PendingSubmission, RepoResult, SubmissionRepository};

use crate::models::{PendingSubmissionModel, SubmissionModel};

use super::error::{map_db_error, map_unique_violation};

const SUBMISSION_COLUMNS: &str = r"
    id, discord_id, campaign_id, social_profile_id, video_url, normalized_video_id,
    platform, starting_views, current_views, earnings, status, tracking,
    submitted_at, approved_at, approved_by, message_id
";

/// PostgreSQL implementation of SubmissionRepository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    /// Create a new PgSubmissionRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    #[instrument(skip(self, submission))]
    async fn create(&self, submission: &Submission) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO submissions
                (discord_id, campaign_id, social_profile_id, video_url,
                 normalized_video_id, platform, starting_views, current_views)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id
            ",
        )
        .bind(&submission.discord_id)
        .bind(submission.campaign_id)
        .bind(submission.social_profile_id)
        .bind(&submission.video_url)
        .bind(&submission.normalized_video_id)
        .bind(submission.platform.as_str())
        .bind(submission.starting_views)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::VideoAlreadySubmitted))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Submission>> {
        let result = sqlx::query_as::<_, SubmissionModel>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Submission::from))
    }

    #[instrument(skip(self))]
    async fn find_by_video_id(
        &self,
        normalized_video_id: &str,
    ) -> RepoResult<Option<Submission>> {
        let result = sqlx::query_as::<_, SubmissionModel>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE normalized_video_id = $1"
        ))
        .bind(normalized_video_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Submission::from))
    }

    #[instrument(skip(self))]
    async fn pending(&self, limit: i64) -> RepoResult<Vec<PendingSubmission>> {
        let rows = sqlx::query_as::<_, PendingSubmissionModel>(
            r"
            SELECT s.id, s.discord_id, s.campaign_id, s.social_profile_id, s.video_url,
                   s.normalized_video_id, s.platform, s.starting_views, s.current_views,
                   s.earnings, s.status, s.tracking, s.submitted_at, s.approved_at,
                   s.approved_by, s.message_id,
                   u.username, c.name AS campaign_name, p.profile_url
            FROM submissions s
            JOIN users u ON s.discord_id = u.discord_id
            JOIN campaigns c ON s.campaign_id = c.id
            JOIN social_profiles p ON s.social_profile_id = p.id
            WHERE s.status = 'pending'
            ORDER BY s.submitted_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PendingSubmission::from).collect())
    }

    #[instrument(skip(self))]
    async fn approve(&self, id: i64, approved_by: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE submissions
            SET status = 'approved', tracking = TRUE, approved_at = $2, approved_by = $3
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id)
        .bind(at)
        .bind(approved_by)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn reject(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE submissions
            SET status = 'rejected', tracking = FALSE
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn stop_tracking_for_profile(&self, normalized_id: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE submissions SET tracking = FALSE
            WHERE social_profile_id IN (
                SELECT id FROM social_profiles WHERE normalized_id = $1
            )
            ",
        )
        .bind(normalized_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn stop_tracking_for_campaign(&self, campaign_id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE submissions SET tracking = FALSE WHERE campaign_id = $1
            ",
        )
        .bind(campaign_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn set_message_id(&self, id: i64, message_id: &str) -> RepoResult<()> {
        sqlx::query("UPDATE submissions SET message_id = $2 WHERE id = $1")
            .bind(id)
            .bind(message_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
