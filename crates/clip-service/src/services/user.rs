//! User service
//!
//! Handles account bootstrap, wallet management, and creator statistics.

use serde_json::json;
use tracing::{info, instrument};

use clip_core::entities::{ActivityLog, User};
use clip_core::traits::UserStats;
use clip_core::validate::is_valid_usdt_wallet;
use clip_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ensure the account row exists; every user-facing operation calls this
    /// first so the row materializes on first interaction
    #[instrument(skip(self))]
    pub async fn ensure(&self, discord_id: &str, username: &str) -> ServiceResult<()> {
        let created = self
            .ctx
            .user_repo()
            .create_if_absent(discord_id, username)
            .await?;

        if created {
            info!(discord_id = %discord_id, "User account created");
        }
        Ok(())
    }

    /// Get a user by Discord id
    #[instrument(skip(self))]
    pub async fn get(&self, discord_id: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(discord_id.to_string()))?;

        Ok(user)
    }

    /// Set the payout wallet, validating the ERC-20 address shape
    #[instrument(skip(self, wallet))]
    pub async fn set_wallet(
        &self,
        discord_id: &str,
        username: &str,
        wallet: &str,
    ) -> ServiceResult<()> {
        if !is_valid_usdt_wallet(wallet) {
            return Err(DomainError::InvalidWallet.into());
        }

        self.ensure(discord_id, username).await?;
        self.ctx.user_repo().set_wallet(discord_id, wallet).await?;

        self.ctx
            .activity_repo()
            .append(
                &ActivityLog::new("WALLET_UPDATED", discord_id)
                    .target(discord_id)
                    .details(json!({ "wallet": wallet })),
            )
            .await?;

        info!(discord_id = %discord_id, "Wallet updated");
        Ok(())
    }

    /// Aggregate submission and earnings statistics for one creator
    #[instrument(skip(self))]
    pub async fn stats(&self, discord_id: &str) -> ServiceResult<UserStats> {
        Ok(self.ctx.user_repo().stats(discord_id).await?)
    }

    /// Names of live campaigns the creator has approved submissions in
    #[instrument(skip(self))]
    pub async fn active_campaigns(&self, discord_id: &str) -> ServiceResult<Vec<String>> {
        Ok(self.ctx.user_repo().active_campaigns(discord_id).await?)
    }
}
