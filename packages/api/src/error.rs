use thiserror::Error;

/// Failure taxonomy for backend calls.
///
/// `Unauthorized` is special-cased: the adapter has already cleared the local
/// session by the time a caller sees it, and the hosting layer interprets it
/// as "force sign-out". Everything else is surfaced to the initiating view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the credentials (HTTP 401). The stored session
    /// has been cleared.
    #[error("unauthorized")]
    Unauthorized { message: String },

    /// A non-401 error status, carrying the backend's own message.
    #[error("{message} (status {status})")]
    Backend { status: u16, message: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this failure means the session is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The message a view should show inline for this failure.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Backend { message, .. } | ApiError::Unauthorized { message }
                if !message.is_empty() =>
            {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_prefers_backend_text() {
        let err = ApiError::Backend {
            status: 422,
            message: "Title is required".into(),
        };
        assert_eq!(err.display_message(), "Title is required");
    }

    #[test]
    fn test_display_message_falls_back_to_status() {
        let err = ApiError::Backend {
            status: 500,
            message: String::new(),
        };
        assert!(err.display_message().contains("500"));
    }
}
