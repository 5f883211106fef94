//! PostgreSQL implementation of PayoutRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clip_core::entities::Payout;
use clip_core::error::DomainError;
use clip_core::traits::{PayoutRepository, RepoResult};

use crate::models::PayoutModel;

use super::error::map_db_error;

const PAYOUT_COLUMNS: &str = r"
    id, discord_id, campaign_id, amount, status, usdt_tx_hash, paid_by, paid_at, created_at
";

/// PostgreSQL implementation of PayoutRepository
#[derive(Clone)]
pub struct PgPayoutRepository {
    pool: PgPool,
}

impl PgPayoutRepository {
    /// Create a new PgPayoutRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayoutRepository for PgPayoutRepository {
    #[instrument(skip(self, payout), fields(discord_id = %payout.discord_id))]
    async fn record(&self, payout: &Payout) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO payouts
                (discord_id, campaign_id, amount, status, usdt_tx_hash, paid_by, paid_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(&payout.discord_id)
        .bind(payout.campaign_id)
        .bind(payout.amount.into_inner())
        .bind(payout.status.as_str())
        .bind(&payout.usdt_tx_hash)
        .bind(&payout.paid_by)
        .bind(payout.paid_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Guarded like the accrual updates: a concurrent settlement that
        // drained the balance first makes this match zero rows
        let moved = sqlx::query(
            r"
            UPDATE users
            SET paid_earnings = paid_earnings + $2,
                pending_earnings = pending_earnings - $2
            WHERE discord_id = $1 AND pending_earnings >= $2
            ",
        )
        .bind(&payout.discord_id)
        .bind(payout.amount.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;
        if moved.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(DomainError::InsufficientPendingEarnings);
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, discord_id: &str) -> RepoResult<Vec<Payout>> {
        let rows = sqlx::query_as::<_, PayoutModel>(&format!(
            "SELECT {PAYOUT_COLUMNS} FROM payouts
             WHERE discord_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(discord_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Payout::from).collect())
    }
}
