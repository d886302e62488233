//! # HTTP client adapter
//!
//! The single point through which every backend call passes. Attaches the
//! bearer token from the injected [`SessionStore`], opts into cross-origin
//! credentials on the web target (both mechanisms are sent; the backend
//! chooses which to honor), and maps response statuses onto [`ApiError`].
//!
//! A 401 clears the session store and comes back as
//! [`ApiError::Unauthorized`]; the adapter itself never navigates — the
//! hosting layer decides what a forced sign-out looks like.

use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::Value;
use session::SessionStore;

use crate::envelope;
use crate::error::ApiError;

#[derive(Clone)]
pub struct ApiClient<S: SessionStore> {
    http: reqwest::Client,
    base_url: String,
    session: S,
}

impl<S: SessionStore> ApiClient<S> {
    /// A client rooted at `base_url`, reading and clearing tokens through
    /// `session`.
    pub fn new(base_url: impl Into<String>, session: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// A client against the configured backend ([`crate::base_url`]).
    pub fn from_env(session: S) -> Self {
        Self::new(crate::base_url(), session)
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let req = self.http.get(self.url(path));
        self.execute(path, req).await
    }

    pub async fn get_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Value, ApiError> {
        let req = self.http.get(self.url(path)).query(query);
        self.execute(path, req).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let req = self.http.post(self.url(path)).json(body);
        self.execute(path, req).await
    }

    /// POST with no body (logout).
    pub async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        let req = self.http.post(self.url(path));
        self.execute(path, req).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let req = self.http.patch(self.url(path)).json(body);
        self.execute(path, req).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let req = self.http.delete(self.url(path));
        self.execute(path, req).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The `Authorization` header value for the current session, if any.
    pub(crate) fn bearer(&self) -> Option<String> {
        self.session.get().map(|token| format!("Bearer {token}"))
    }

    async fn execute(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<Value, ApiError> {
        let req = match self.bearer() {
            Some(value) => req.header(AUTHORIZATION, value),
            None => req,
        };
        #[cfg(target_arch = "wasm32")]
        let req = req.fetch_credentials_include();

        let resp = req.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "request failed");
            ApiError::from(e)
        })?;

        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };
        self.finish(path, status, body)
    }

    /// Map a response status and parsed body onto the error taxonomy.
    ///
    /// Split out of [`execute`](Self::execute) so the 401 session-clearing
    /// contract is testable without a network.
    fn finish(&self, path: &str, status: u16, body: Value) -> Result<Value, ApiError> {
        if (200..300).contains(&status) {
            return Ok(body);
        }

        let message = envelope::message(&body);
        tracing::error!(path, status, %message, "backend call failed");

        if status == 401 {
            tracing::warn!("401 unauthorized, clearing stored session");
            self.session.clear();
            return Err(ApiError::Unauthorized { message });
        }
        Err(ApiError::Backend { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use session::MemoryStore;

    fn client_with_token(token: Option<&str>) -> ApiClient<MemoryStore> {
        let store = MemoryStore::new();
        if let Some(t) = token {
            store.set(t);
        }
        ApiClient::new("http://backend.test/api/", store)
    }

    #[test]
    fn test_bearer_header_from_session() {
        let client = client_with_token(Some("abc"));
        assert_eq!(client.bearer().as_deref(), Some("Bearer abc"));

        let client = client_with_token(None);
        assert!(client.bearer().is_none());
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client_with_token(None);
        assert_eq!(client.url("/auth/me"), "http://backend.test/api/auth/me");
    }

    #[test]
    fn test_success_passes_body_through() {
        let client = client_with_token(Some("abc"));
        let body = json!({"data": {"projects": []}});
        let out = client.finish("/projects", 200, body.clone()).unwrap();
        assert_eq!(out, body);
        // Session untouched on success
        assert!(client.session().is_present());
    }

    #[test]
    fn test_401_clears_session_and_maps_to_unauthorized() {
        let client = client_with_token(Some("stale"));
        let err = client
            .finish("/auth/me", 401, json!({"message": "jwt expired"}))
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!client.session().is_present());
    }

    #[test]
    fn test_non_401_error_keeps_session() {
        let client = client_with_token(Some("abc"));
        let err = client
            .finish("/gallery", 422, json!({"message": "Title is required"}))
            .unwrap_err();
        match err {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Title is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(client.session().is_present());
    }

    #[test]
    fn test_error_with_empty_body() {
        let client = client_with_token(None);
        let err = client.finish("/projects/1", 404, Value::Null).unwrap_err();
        match err {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 404);
                assert!(message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
