use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pagination;

/// Lifecycle of a customer project submission. Transitions are driven by
/// admin action only; the submission itself is created outside this console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Pending,
    InReview,
    Approved,
    Rejected,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 6] = [
        ProjectStatus::Pending,
        ProjectStatus::InReview,
        ProjectStatus::Approved,
        ProjectStatus::Rejected,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    /// The backend's wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::InReview => "in-review",
            ProjectStatus::Approved => "approved",
            ProjectStatus::Rejected => "rejected",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::InReview => "In Review",
            ProjectStatus::Approved => "Approved",
            ProjectStatus::Rejected => "Rejected",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<ProjectStatus> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A customer project submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// One page of the projects listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPage {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_value(ProjectStatus::InReview).unwrap(),
            json!("in-review")
        );
        assert_eq!(
            serde_json::from_value::<ProjectStatus>(json!("in-progress")).unwrap(),
            ProjectStatus::InProgress
        );
    }

    #[test]
    fn test_status_parse_matches_wire() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::parse("archived"), None);
    }

    #[test]
    fn test_project_from_backend_json() {
        let project: Project = serde_json::from_value(json!({
            "_id": "abc123",
            "userName": "Ravi Kumar",
            "email": "ravi@example.com",
            "projectType": "IoT Prototype",
            "budget": "$5k-10k",
            "timeline": "3 months",
            "description": "Soil moisture sensor network",
            "status": "in-review",
            "submittedAt": "2024-06-01T08:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(project.status, ProjectStatus::InReview);
        assert_eq!(project.budget.as_deref(), Some("$5k-10k"));
    }

    #[test]
    fn test_sparse_project_defaults_to_pending() {
        let project: Project = serde_json::from_value(json!({"_id": "x"})).unwrap();
        assert_eq!(project.status, ProjectStatus::Pending);
        assert!(project.budget.is_none());
        assert!(project.submitted_at.is_none());
    }
}
