//! PostgreSQL implementations of the audit repositories

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use clip_core::entities::{ActivityLog, ViewHistory};
use clip_core::traits::{ActivityLogRepository, RepoResult, ViewHistoryRepository};

use crate::models::ViewHistoryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActivityLogRepository
#[derive(Clone)]
pub struct PgActivityLogRepository {
    pool: PgPool,
}

impl PgActivityLogRepository {
    /// Create a new PgActivityLogRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLogRepository for PgActivityLogRepository {
    #[instrument(skip(self, entry), fields(action = %entry.action_type))]
    async fn append(&self, entry: &ActivityLog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO activity_logs (action_type, performed_by, target_user, details)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&entry.action_type)
        .bind(&entry.performed_by)
        .bind(&entry.target_user)
        .bind(&entry.details)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM activity_logs WHERE timestamp < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

/// PostgreSQL implementation of ViewHistoryRepository
#[derive(Clone)]
pub struct PgViewHistoryRepository {
    pool: PgPool,
}

impl PgViewHistoryRepository {
    /// Create a new PgViewHistoryRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewHistoryRepository for PgViewHistoryRepository {
    #[instrument(skip(self))]
    async fn for_submission(
        &self,
        submission_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<ViewHistory>> {
        let rows = sqlx::query_as::<_, ViewHistoryModel>(
            r"
            SELECT id, submission_id, views, recorded_at
            FROM view_history
            WHERE submission_id = $1
            ORDER BY recorded_at DESC
            LIMIT $2
            ",
        )
        .bind(submission_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ViewHistory::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM view_history WHERE recorded_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
