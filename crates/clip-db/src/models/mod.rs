//! Database models (FromRow structs, raw column types)

mod audit;
mod ban;
mod campaign;
mod payout;
mod profile;
mod submission;
mod tracking;
mod user;

pub use audit::{ActivityLogModel, ViewHistoryModel};
pub use ban::BannedProfileModel;
pub use campaign::CampaignModel;
pub use payout::PayoutModel;
pub use profile::SocialProfileModel;
pub use submission::{PendingSubmissionModel, SubmissionModel};
pub use tracking::TrackedSubmissionModel;
pub use user::UserModel;
