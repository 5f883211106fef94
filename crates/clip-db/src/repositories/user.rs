//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clip_core::entities::User;
use clip_core::traits::{RepoResult, UserRepository, UserStats};
use clip_core::value_objects::UsdCents;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_discord_id(&self, discord_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT discord_id, username, usdt_wallet, total_earnings, paid_earnings,
                   pending_earnings, created_at
            FROM users
            WHERE discord_id = $1
            ",
        )
        .bind(discord_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn create_if_absent(&self, discord_id: &str, username: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO users (discord_id, username)
            VALUES ($1, $2)
            ON CONFLICT (discord_id) DO NOTHING
            ",
        )
        .bind(discord_id)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, wallet))]
    async fn set_wallet(&self, discord_id: &str, wallet: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE users SET usdt_wallet = $2 WHERE discord_id = $1
            ",
        )
        .bind(discord_id)
        .bind(wallet)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self, discord_id: &str) -> RepoResult<UserStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            r"
            SELECT
                COUNT(DISTINCT s.id) AS total_submissions,
                COUNT(DISTINCT s.id) FILTER (WHERE s.status = 'approved') AS approved_submissions,
                COUNT(DISTINCT s.campaign_id) AS campaigns_participated,
                COALESCE(SUM(s.current_views), 0) AS total_views,
                COALESCE(SUM(s.earnings), 0) AS total_earned,
                MAX(s.submitted_at) AS last_submission
            FROM submissions s
            WHERE s.discord_id = $1
            ",
        )
        .bind(discord_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(UserStats {
            total_submissions: row.total_submissions,
            approved_submissions: row.approved_submissions,
            campaigns_participated: row.campaigns_participated,
            total_views: row.total_views,
            total_earned: UsdCents::new(row.total_earned),
            last_submission: row.last_submission,
        })
    }

    #[instrument(skip(self))]
    async fn active_campaigns(&self, discord_id: &str) -> RepoResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT c.name
            FROM submissions s
            JOIN campaigns c ON s.campaign_id = c.id
            WHERE s.discord_id = $1 AND c.status = 'live' AND s.status = 'approved'
            ",
        )
        .bind(discord_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(names)
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total_submissions: i64,
    approved_submissions: i64,
    campaigns_participated: i64,
    total_views: i64,
    total_earned: i64,
    last_submission: Option<chrono::DateTime<chrono::Utc>>,
}
