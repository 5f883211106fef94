//! Domain entities

mod audit;
mod ban;
mod campaign;
mod payout;
mod profile;
mod submission;
mod user;

pub use audit::{ActivityLog, ViewHistory};
pub use ban::BannedProfile;
pub use campaign::{Campaign, CampaignStatus, RateCard};
pub use payout::{Payout, PayoutStatus};
pub use profile::{ProfileStatus, SocialProfile, UnknownStatus};
pub use submission::{Submission, SubmissionStatus};
pub use user::User;
