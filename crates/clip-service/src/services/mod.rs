//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod campaign;
pub mod context;
pub mod error;
pub mod payout;
pub mod profile;
pub mod submission;
pub mod user;

// Re-export all services for convenience
pub use campaign::{CampaignService, NewCampaign};
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use payout::PayoutService;
pub use profile::{BanOutcome, ProfileService};
pub use submission::SubmissionService;
pub use user::UserService;
