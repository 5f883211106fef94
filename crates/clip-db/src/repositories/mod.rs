//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in clip-core.
//! Each repository handles database operations for a specific domain entity.

mod audit;
mod ban;
mod campaign;
mod error;
mod payout;
mod profile;
mod submission;
mod tracking;
mod user;

pub use audit::{PgActivityLogRepository, PgViewHistoryRepository};
pub use ban::PgBanRepository;
pub use campaign::PgCampaignRepository;
pub use payout::PgPayoutRepository;
pub use profile::PgProfileRepository;
pub use submission::PgSubmissionRepository;
pub use tracking::PgTrackingRepository;
pub use user::PgUserRepository;
