//! User entity <-> model mapper

use clip_core::entities::User;
use clip_core::value_objects::UsdCents;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            discord_id: model.discord_id,
            username: model.username,
            usdt_wallet: model.usdt_wallet,
            total_earnings: UsdCents::new(model.total_earnings),
            paid_earnings: UsdCents::new(model.paid_earnings),
            pending_earnings: UsdCents::new(model.pending_earnings),
            created_at: model.created_at,
        }
    }
}
