//! Project submission queue service.

use serde::Serialize;
use serde_json::json;
use session::SessionStore;

use crate::client::ApiClient;
use crate::envelope;
use crate::error::ApiError;
use crate::models::{Project, ProjectPage, ProjectStatus};

/// Query parameters for the projects listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectListParams {
    /// Newest submissions first, optionally narrowed to one status.
    pub fn recent_first(limit: u32, status: Option<ProjectStatus>) -> Self {
        Self {
            page: None,
            limit: Some(limit),
            sort_by: Some("submittedAt".to_string()),
            sort_order: Some("desc".to_string()),
            status,
        }
    }
}

#[derive(Clone)]
pub struct ProjectService<S: SessionStore> {
    client: ApiClient<S>,
}

impl<S: SessionStore> ProjectService<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// Paginated, sortable, status-filterable listing.
    pub async fn all(&self, params: &ProjectListParams) -> Result<ProjectPage, ApiError> {
        let body = self
            .client
            .get_query("/projects", params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "projects fetch failed"))?;
        envelope::decode(envelope::payload(&body))
    }

    /// Transition a submission to a new status.
    pub async fn update_status(
        &self,
        id: &str,
        status: ProjectStatus,
    ) -> Result<Project, ApiError> {
        tracing::info!(id, status = status.as_str(), "updating project status");
        let body = self
            .client
            .patch(&format!("/projects/{id}/status"), &json!({ "status": status }))
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "status update failed"))?;
        envelope::decode(envelope::field(&body, "project"))
    }

    /// Remove a submission. Deleting an id that is already gone surfaces the
    /// backend's error; there is no silent success.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!(id, "deleting project");
        self.client
            .delete(&format!("/projects/{id}"))
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "project delete failed"))
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_serialize_to_backend_names() {
        let params = ProjectListParams::recent_first(100, Some(ProjectStatus::InReview));
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "limit": 100,
                "sortBy": "submittedAt",
                "sortOrder": "desc",
                "status": "in-review"
            })
        );
    }

    #[test]
    fn test_unfiltered_params_omit_status() {
        let params = ProjectListParams::recent_first(100, None);
        let value = serde_json::to_value(&params).unwrap();
        assert!(value.get("status").is_none());
    }
}
