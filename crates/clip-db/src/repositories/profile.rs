//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use clip_core::entities::{ProfileStatus, SocialProfile};
use clip_core::error::DomainError;
use clip_core::traits::{ProfileRepository, RepoResult};

use crate::models::SocialProfileModel;

use super::error::{map_db_error, map_unique_violation};

const PROFILE_COLUMNS: &str = r"
    id, discord_id, platform, profile_url, normalized_id, status, followers,
    tier, verified_at, verified_by, rejection_reason, created_at
";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self, profile))]
    async fn create(&self, profile: &SocialProfile) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO social_profiles (discord_id, platform, profile_url, normalized_id, status)
            VALUES ($1, $2, $3, $4, 'pending')
            RETURNING id
            ",
        )
        .bind(&profile.discord_id)
        .bind(profile.platform.as_str())
        .bind(&profile.profile_url)
        .bind(&profile.normalized_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ProfileAlreadyRegistered))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SocialProfile>> {
        let result = sqlx::query_as::<_, SocialProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM social_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SocialProfile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_normalized_id(
        &self,
        normalized_id: &str,
    ) -> RepoResult<Option<SocialProfile>> {
        let result = sqlx::query_as::<_, SocialProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM social_profiles WHERE normalized_id = $1"
        ))
        .bind(normalized_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SocialProfile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner_and_url(
        &self,
        discord_id: &str,
        profile_url: &str,
    ) -> RepoResult<Option<SocialProfile>> {
        let result = sqlx::query_as::<_, SocialProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM social_profiles
             WHERE discord_id = $1 AND profile_url = $2"
        ))
        .bind(discord_id)
        .bind(profile_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SocialProfile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, discord_id: &str) -> RepoResult<Vec<SocialProfile>> {
        let rows = sqlx::query_as::<_, SocialProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM social_profiles
             WHERE discord_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(discord_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SocialProfile::from).collect())
    }

    #[instrument(skip(self))]
    async fn pending(&self, limit: i64) -> RepoResult<Vec<SocialProfile>> {
        let rows = sqlx::query_as::<_, SocialProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM social_profiles
             WHERE status = 'pending'
             ORDER BY created_at DESC
             LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SocialProfile::from).collect())
    }

    #[instrument(skip(self))]
    async fn approve(&self, id: i64, approved_by: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE social_profiles
            SET status = 'approved', verified_at = $2, verified_by = $3
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

    #[instrument(skip(self, reason))]
    async fn reject(&self, id: i64, reason: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE social_profiles
            SET status = 'rejected', rejection_reason = $2
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id)
        .bind(reason)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_status_by_normalized_id(
        &self,
        normalized_id: &str,
        status: ProfileStatus,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE social_profiles SET status = $2 WHERE normalized_id = $1
            ",
        )
        .bind(normalized_id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
