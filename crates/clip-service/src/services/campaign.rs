//! Campaign service
//!
//! Handles campaign creation, listing, and the end-of-life cascade.

use serde_json::json;
use tracing::{info, instrument};

use clip_core::entities::{ActivityLog, Campaign, CampaignStatus};
use clip_core::value_objects::{Platform, UsdCents};
use clip_core::DomainError;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Parameters for creating a campaign
#[derive(Debug, Clone)]
pub struct NewCampaign {
    pub name: String,
    pub platform: Platform,
    pub total_budget: UsdCents,
    pub rate_per_100k: UsdCents,
    pub rate_per_1m: UsdCents,
    pub min_views: i64,
    pub min_followers: i64,
    pub max_earn_per_creator: UsdCents,
    pub max_earn_per_post: UsdCents,
}

/// Campaign service
pub struct CampaignService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CampaignService<'a> {
    /// Create a new CampaignService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a live campaign with its remaining budget anchored at the total
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create(&self, params: NewCampaign, admin_id: &str) -> ServiceResult<Campaign> {
        if !params.total_budget.is_positive() {
            return Err(ServiceError::validation("Budget must be positive"));
        }
        if !params.rate_per_100k.is_positive() && !params.rate_per_1m.is_positive() {
            return Err(ServiceError::validation(
                "At least one payout rate must be positive",
            ));
        }

        let mut campaign = Campaign {
            id: 0,
            name: params.name,
            platform: params.platform,
            total_budget: params.total_budget,
            rate_per_100k: params.rate_per_100k,
            rate_per_1m: params.rate_per_1m,
            min_views: params.min_views,
            min_followers: params.min_followers,
            max_earn_per_creator: params.max_earn_per_creator,
            max_earn_per_post: params.max_earn_per_post,
            status: CampaignStatus::Live,
            created_by: admin_id.to_string(),
            ended_at: None,
            remaining_budget: params.total_budget,
            created_at: chrono::Utc::now(),
        };
        campaign.id = self.ctx.campaign_repo().create(&campaign).await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("CAMPAIGN_CREATED", admin_id).details(json!({
                    "campaign_id": campaign.id,
                    "name": campaign.name,
                    "platform": campaign.platform.as_str(),
                    "total_budget_cents": campaign.total_budget.into_inner(),
                })),
            )
            .await?;

        info!(
            campaign_id = campaign.id,
            name = %campaign.name,
            budget = %campaign.total_budget,
            "Campaign created"
        );
        Ok(campaign)
    }

    /// End a live campaign and stop tracking on all of its submissions.
    /// Accrued earnings stay on the books.
    #[instrument(skip(self))]
    pub async fn end(&self, name: &str, admin_id: &str) -> ServiceResult<u64> {
        let campaign = self
            .ctx
            .campaign_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::CampaignNotFound(name.to_string()))?;

        let ended = self
            .ctx
            .campaign_repo()
            .end(campaign.id, chrono::Utc::now())
            .await?;
        if !ended {
            return Err(DomainError::CampaignNotLive(name.to_string()).into());
        }

        let stopped = self
            .ctx
            .submission_repo()
            .stop_tracking_for_campaign(campaign.id)
            .await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("CAMPAIGN_ENDED", admin_id).details(json!({
                    "campaign_id": campaign.id,
                    "name": campaign.name,
                    "submissions_stopped": stopped,
                })),
            )
            .await?;

        info!(campaign_id = campaign.id, name = %name, stopped, "Campaign ended");
        Ok(stopped)
    }

    /// Get one campaign by name
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> ServiceResult<Campaign> {
        self.ctx
            .campaign_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::CampaignNotFound(name.to_string()).into())
    }

    /// All campaigns, live first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Campaign>> {
        Ok(self.ctx.campaign_repo().list_all().await?)
    }

    /// Live campaigns matching a search term (for autocomplete)
    #[instrument(skip(self))]
    pub async fn search_live(&self, term: &str, limit: i64) -> ServiceResult<Vec<Campaign>> {
        Ok(self.ctx.campaign_repo().search_live(term, limit).await?)
    }
}
