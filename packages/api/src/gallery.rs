//! Gallery curation service.

use serde::Serialize;
use session::SessionStore;

use crate::client::ApiClient;
use crate::envelope;
use crate::error::ApiError;
use crate::models::{GalleryItem, GalleryItemDraft, GalleryItemPatch, GalleryPage};

/// Query parameters for the admin gallery listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl GalleryListParams {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            page: None,
            limit: Some(limit),
        }
    }
}

#[derive(Clone)]
pub struct GalleryService<S: SessionStore> {
    client: ApiClient<S>,
}

impl<S: SessionStore> GalleryService<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// Full listing, inactive items included.
    pub async fn all(&self, params: &GalleryListParams) -> Result<GalleryPage, ApiError> {
        let body = self
            .client
            .get_query("/gallery/admin/all", params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "gallery fetch failed"))?;
        envelope::decode(envelope::payload(&body))
    }

    pub async fn create(&self, draft: &GalleryItemDraft) -> Result<GalleryItem, ApiError> {
        tracing::info!(title = %draft.title, "creating gallery item");
        let body = self
            .client
            .post("/gallery", draft)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "gallery create failed"))?;
        envelope::decode(envelope::field(&body, "galleryItem"))
    }

    /// Partial update: only the fields present on the patch are sent.
    pub async fn update(&self, id: &str, patch: &GalleryItemPatch) -> Result<GalleryItem, ApiError> {
        tracing::info!(id, "updating gallery item");
        let body = self
            .client
            .patch(&format!("/gallery/{id}"), patch)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "gallery update failed"))?;
        envelope::decode(envelope::field(&body, "galleryItem"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!(id, "deleting gallery item");
        self.client
            .delete(&format!("/gallery/{id}"))
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "gallery delete failed"))
            .map(drop)
    }

    /// The category enumeration, empty when the backend returns none.
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let body = self
            .client
            .get("/gallery/categories")
            .await
            .inspect_err(|e| tracing::error!(error = %e, "categories fetch failed"))?;
        let value = envelope::field(&body, "categories");
        if value.is_array() {
            envelope::decode(value)
        } else {
            Ok(Vec::new())
        }
    }
}
