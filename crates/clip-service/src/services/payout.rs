//! Payout service
//!
//! Records manual settlements. The transfer itself happens off-system; this
//! only moves the amount from pending to paid and keeps the ledger.

use serde_json::json;
use tracing::{info, instrument};

use clip_core::entities::{ActivityLog, Payout};
use clip_core::value_objects::UsdCents;
use clip_core::DomainError;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Payout service
pub struct PayoutService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PayoutService<'a> {
    /// Create a new PayoutService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a completed settlement for one creator in one campaign
    #[instrument(skip(self, tx_hash))]
    pub async fn record(
        &self,
        discord_id: &str,
        campaign_name: &str,
        amount: UsdCents,
        tx_hash: &str,
        admin_id: &str,
    ) -> ServiceResult<i64> {
        if !amount.is_positive() {
            return Err(ServiceError::validation("Payout amount must be positive"));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(discord_id.to_string()))?;
        if amount > user.pending_earnings {
            return Err(ServiceError::validation(format!(
                "Payout of {amount} exceeds pending earnings of {}",
                user.pending_earnings
            )));
        }

        let campaign = self
            .ctx
            .campaign_repo()
            .find_by_name(campaign_name)
            .await?
            .ok_or_else(|| DomainError::CampaignNotFound(campaign_name.to_string()))?;

        let payout = Payout::paid(
            discord_id.to_string(),
            campaign.id,
            amount,
            tx_hash.to_string(),
            admin_id.to_string(),
        );
        let payout_id = self.ctx.payout_repo().record(&payout).await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("PAYOUT_RECORDED", admin_id)
                    .target(discord_id)
                    .details(json!({
                        "payout_id": payout_id,
                        "campaign_id": campaign.id,
                        "amount_cents": amount.into_inner(),
                        "tx_hash": tx_hash,
                    })),
            )
            .await?;

        info!(payout_id, discord_id = %discord_id, amount = %amount, "Payout recorded");
        Ok(payout_id)
    }

    /// Settlement history for one creator, newest first
    #[instrument(skip(self))]
    pub async fn history(&self, discord_id: &str) -> ServiceResult<Vec<Payout>> {
        Ok(self.ctx.payout_repo().find_by_user(discord_id).await?)
    }
}
