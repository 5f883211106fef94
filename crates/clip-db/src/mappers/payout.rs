//! Payout entity <-> model mapper

use clip_core::entities::Payout;
use clip_core::value_objects::UsdCents;

use super::common::parse_payout_status;
use crate::models::PayoutModel;

impl From<PayoutModel> for Payout {
    fn from(model: PayoutModel) -> Self {
        Payout {
            id: model.id,
            discord_id: model.discord_id,
            campaign_id: model.campaign_id,
            amount: UsdCents::new(model.amount),
            status: parse_payout_status(&model.status),
            usdt_tx_hash: model.usdt_tx_hash,
            paid_by: model.paid_by,
            paid_at: model.paid_at,
            created_at: model.created_at,
        }
    }
}
