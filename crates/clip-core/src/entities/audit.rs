//! Append-only audit entities: activity log and view history

use chrono::{DateTime, Utc};
use serde_json::Value;

/// One audit-trail row for a mutating action.
///
/// Retention-swept after the configured window (default 90 days).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    pub id: i64,
    pub action_type: String,
    pub performed_by: String,
    pub target_user: Option<String>,
    pub details: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    #[must_use]
    pub fn new(action_type: &str, performed_by: &str) -> Self {
        Self {
            id: 0,
            action_type: action_type.to_string(),
            performed_by: performed_by.to_string(),
            target_user: None,
            details: None,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn target(mut self, target_user: &str) -> Self {
        self.target_user = Some(target_user.to_string());
        self
    }

    #[must_use]
    pub fn details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// One observed view count for a submission, produced by the accrual engine.
///
/// Retention-swept after the configured window (default 60 days).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHistory {
    pub id: i64,
    pub submission_id: i64,
    pub views: i64,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_style_log_entry() {
        let entry = ActivityLog::new("PROFILE_APPROVED", "staff-1")
            .target("user-9")
            .details(json!({ "profile_id": 3 }));
        assert_eq!(entry.action_type, "PROFILE_APPROVED");
        assert_eq!(entry.target_user.as_deref(), Some("user-9"));
        assert_eq!(entry.details.unwrap()["profile_id"], 3);
    }
}
