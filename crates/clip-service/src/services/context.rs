//! Service context - dependency container for services
//!
//! Holds all repositories and the view source needed by services.

use std::sync::Arc;

use clip_common::config::SurfaceConfig;
use clip_core::traits::{
    ActivityLogRepository, BanRepository, CampaignRepository, PayoutRepository,
    ProfileRepository, SubmissionRepository, TrackingRepository, UserRepository,
    ViewHistoryRepository, ViewSource,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The platform view source
/// - Surface configuration (role names, channel ids)
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    ban_repo: Arc<dyn BanRepository>,
    campaign_repo: Arc<dyn CampaignRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,
    tracking_repo: Arc<dyn TrackingRepository>,
    payout_repo: Arc<dyn PayoutRepository>,
    activity_repo: Arc<dyn ActivityLogRepository>,
    view_history_repo: Arc<dyn ViewHistoryRepository>,

    view_source: Arc<dyn ViewSource>,

    surface: SurfaceConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        ban_repo: Arc<dyn BanRepository>,
        campaign_repo: Arc<dyn CampaignRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
        tracking_repo: Arc<dyn TrackingRepository>,
        payout_repo: Arc<dyn PayoutRepository>,
        activity_repo: Arc<dyn ActivityLogRepository>,
        view_history_repo: Arc<dyn ViewHistoryRepository>,
        view_source: Arc<dyn ViewSource>,
        surface: SurfaceConfig,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            ban_repo,
            campaign_repo,
            submission_repo,
            tracking_repo,
            payout_repo,
            activity_repo,
            view_history_repo,
            view_source,
            surface,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the ban repository
    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    /// Get the campaign repository
    pub fn campaign_repo(&self) -> &dyn CampaignRepository {
        self.campaign_repo.as_ref()
    }

    /// Get the submission repository
    pub fn submission_repo(&self) -> &dyn SubmissionRepository {
        self.submission_repo.as_ref()
    }

    /// Get the tracking repository
    pub fn tracking_repo(&self) -> &dyn TrackingRepository {
        self.tracking_repo.as_ref()
    }

    /// Get the payout repository
    pub fn payout_repo(&self) -> &dyn PayoutRepository {
        self.payout_repo.as_ref()
    }

    /// Get the activity log repository
    pub fn activity_repo(&self) -> &dyn ActivityLogRepository {
        self.activity_repo.as_ref()
    }

    /// Get the view history repository
    pub fn view_history_repo(&self) -> &dyn ViewHistoryRepository {
        self.view_history_repo.as_ref()
    }

    // === Other dependencies ===

    /// Get the platform view source
    pub fn view_source(&self) -> &dyn ViewSource {
        self.view_source.as_ref()
    }

    /// Get the surface configuration
    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }
}
