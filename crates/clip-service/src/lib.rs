//! # clip-service
//!
//! Application layer: registries, submission workflow, and payouts built on
//! the repository ports from `clip-core`.

pub mod services;

pub use services::{
    BanOutcome, CampaignService, NewCampaign, PayoutService, ProfileService, ServiceContext,
    ServiceError, ServiceResult, SubmissionService, UserService,
};
