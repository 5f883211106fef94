//! PostgreSQL implementation of BanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clip_core::entities::BannedProfile;
use clip_core::error::DomainError;
use clip_core::traits::{BanRepository, RepoResult};

use crate::models::BannedProfileModel;

use super::error::{map_db_error, map_unique_violation};

const BAN_COLUMNS: &str = r"
    id, platform, profile_url, normalized_id, reason, banned_by, banned_at
";

/// PostgreSQL implementation of BanRepository
#[derive(Clone)]
pub struct PgBanRepository {
    pool: PgPool,
}

impl PgBanRepository {
    /// Create a new PgBanRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BanRepository for PgBanRepository {
    #[instrument(skip(self))]
    async fn find_by_normalized_id(
        &self,
        normalized_id: &str,
    ) -> RepoResult<Option<BannedProfile>> {
        let result = sqlx::query_as::<_, BannedProfileModel>(&format!(
            "SELECT {BAN_COLUMNS} FROM banned_profiles WHERE normalized_id = $1"
        ))
        .bind(normalized_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BannedProfile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BannedProfile>> {
        let result = sqlx::query_as::<_, BannedProfileModel>(&format!(
            "SELECT {BAN_COLUMNS} FROM banned_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BannedProfile::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> RepoResult<Vec<BannedProfile>> {
        let rows = sqlx::query_as::<_, BannedProfileModel>(&format!(
            "SELECT {BAN_COLUMNS} FROM banned_profiles ORDER BY banned_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BannedProfile::from).collect())
    }

    #[instrument(skip(self, ban))]
    async fn insert(&self, ban: &BannedProfile) -> RepoResult<i64> {
        let reason = ban.reason.clone();
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO banned_profiles (platform, profile_url, normalized_id, reason, banned_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(ban.platform.as_str())
        .bind(&ban.profile_url)
        .bind(&ban.normalized_id)
        .bind(&ban.reason)
        .bind(&ban.banned_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ProfileBanned { reason }))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM banned_profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
