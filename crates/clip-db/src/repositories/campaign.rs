//! PostgreSQL implementation of CampaignRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use clip_core::entities::Campaign;
use clip_core::error::DomainError;
use clip_core::traits::{CampaignRepository, RepoResult};

use crate::models::CampaignModel;

use super::error::{map_db_error, map_unique_violation};

const CAMPAIGN_COLUMNS: &str = r"
    id, name, platform, total_budget, rate_per_100k, rate_per_1m, min_views,
    min_followers, max_earn_per_creator, max_earn_per_post, status, created_by,
    ended_at, remaining_budget, created_at
";

/// PostgreSQL implementation of CampaignRepository
#[derive(Clone)]
pub struct PgCampaignRepository {
    pool: PgPool,
}

impl PgCampaignRepository {
    /// Create a new PgCampaignRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    #[instrument(skip(self, campaign))]
    async fn create(&self, campaign: &Campaign) -> RepoResult<i64> {
        let name = campaign.name.clone();
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO campaigns
                (name, platform, total_budget, rate_per_100k, rate_per_1m, min_views,
                 min_followers, max_earn_per_creator, max_earn_per_post, created_by,
                 remaining_budget)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $3)
            RETURNING id
            ",
        )
        .bind(&campaign.name)
        .bind(campaign.platform.as_str())
        .bind(campaign.total_budget.into_inner())
        .bind(campaign.rate_per_100k.into_inner())
        .bind(campaign.rate_per_1m.into_inner())
        .bind(campaign.min_views)
        .bind(campaign.min_followers)
        .bind(campaign.max_earn_per_creator.into_inner())
        .bind(campaign.max_earn_per_post.into_inner())
        .bind(&campaign.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CampaignNameTaken(name)))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Campaign>> {
        let result = sqlx::query_as::<_, CampaignModel>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Campaign::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Campaign>> {
        let result = sqlx::query_as::<_, CampaignModel>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Campaign::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Campaign>> {
        let rows = sqlx::query_as::<_, CampaignModel>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns
             ORDER BY CASE status WHEN 'live' THEN 1 ELSE 2 END, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_live(&self, term: &str, limit: i64) -> RepoResult<Vec<Campaign>> {
        let rows = sqlx::query_as::<_, CampaignModel>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns
             WHERE status = 'live' AND name ILIKE $1
             LIMIT $2"
        ))
        .bind(format!("%{term}%"))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    #[instrument(skip(self))]
    async fn end(&self, id: i64, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE campaigns
            SET status = 'ended', ended_at = $2
            WHERE id = $1 AND status = 'live'
            ",
        )
        .bind(id)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
