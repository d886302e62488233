//! Authentication service: login, current identity, logout, users listing.

use serde::Serialize;
use serde_json::Value;
use session::SessionStore;

use crate::client::ApiClient;
use crate::envelope;
use crate::error::ApiError;
use crate::models::{Role, User, UserPage};

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Query parameters for the users listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserListParams {
    /// Newest accounts first.
    pub fn recent_first(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            sort_by: Some("createdAt".to_string()),
            sort_order: Some("desc".to_string()),
            role: None,
        }
    }
}

#[derive(Clone)]
pub struct AuthService<S: SessionStore> {
    client: ApiClient<S>,
}

impl<S: SessionStore> AuthService<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session token.
    ///
    /// The token is stored as a side effect when the response carries one;
    /// callers check [`is_authenticated`](Self::is_authenticated) afterwards.
    /// A 2xx response without a token leaves the session logged out.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        tracing::info!(email = %credentials.email, "logging in");
        let body = self
            .client
            .post("/auth/admin/login", credentials)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "login failed"))?;
        self.absorb_token(&body);
        Ok(())
    }

    /// The identity behind the stored token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let body = self
            .client
            .get("/auth/me")
            .await
            .inspect_err(|e| tracing::error!(error = %e, "current-user fetch failed"))?;
        envelope::decode(envelope::field(&body, "user"))
    }

    /// Invalidate the session server-side, best effort: the local token is
    /// cleared even when the remote call fails, and the failure still
    /// propagates for logging.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.client.post_empty("/auth/logout").await;
        self.client.session().clear();
        result.map(drop)
    }

    /// Whether a session token is currently stored. Says nothing about the
    /// token still being valid — only the backend knows that.
    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_present()
    }

    /// Paginated users listing, optionally filtered by role.
    pub async fn all_users(&self, params: &UserListParams) -> Result<UserPage, ApiError> {
        let body = self
            .client
            .get_query("/auth/admin/all", params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "users fetch failed"))?;
        envelope::decode(envelope::payload(&body))
    }

    fn absorb_token(&self, body: &Value) {
        match envelope::token(body) {
            Some(token) => {
                self.client.session().set(token);
                tracing::info!("session token stored");
            }
            None => tracing::warn!("no token in login response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use session::MemoryStore;

    fn service(store: MemoryStore) -> AuthService<MemoryStore> {
        AuthService::new(ApiClient::new("http://backend.test/api", store))
    }

    #[test]
    fn test_absorb_token_stores_from_any_shape() {
        let store = MemoryStore::new();
        let svc = service(store.clone());

        svc.absorb_token(&json!({"token": "abc", "user": {"role": "admin"}}));
        assert_eq!(store.get().as_deref(), Some("abc"));

        svc.absorb_token(&json!({"data": {"token": "nested"}}));
        assert_eq!(store.get().as_deref(), Some("nested"));
    }

    #[test]
    fn test_absorb_token_without_token_leaves_session() {
        let store = MemoryStore::new();
        let svc = service(store.clone());
        svc.absorb_token(&json!({"success": false}));
        assert!(!store.is_present());
        assert!(!svc.is_authenticated());
    }

    #[test]
    fn test_user_params_omit_unset_filters() {
        let params = UserListParams::recent_first(1, 10);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({"page": 1, "limit": 10, "sortBy": "createdAt", "sortOrder": "desc"})
        );
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_remote_fails() {
        // Port 9 is unroutable: the remote call fails with a transport error,
        // the local session must be gone regardless.
        let store = MemoryStore::new();
        store.set("abc");
        let svc = AuthService::new(ApiClient::new("http://127.0.0.1:9/api", store.clone()));

        let result = svc.logout().await;
        assert!(result.is_err());
        assert!(!store.is_present());
    }
}
