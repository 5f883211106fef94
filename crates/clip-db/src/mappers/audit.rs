//! Audit entity <-> model mappers

use clip_core::entities::{ActivityLog, ViewHistory};

use crate::models::{ActivityLogModel, ViewHistoryModel};

impl From<ActivityLogModel> for ActivityLog {
    fn from(model: ActivityLogModel) -> Self {
        ActivityLog {
            id: model.id,
            action_type: model.action_type,
            performed_by: model.performed_by,
            target_user: model.target_user,
            details: model.details,
            timestamp: model.timestamp,
        }
    }
}

impl From<ViewHistoryModel> for ViewHistory {
    fn from(model: ViewHistoryModel) -> Self {
        ViewHistory {
            id: model.id,
            submission_id: model.submission_id,
            views: model.views,
            recorded_at: model.recorded_at,
        }
    }
}
