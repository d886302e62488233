//! # Response envelope normalization
//!
//! The backend is inconsistent about how it wraps payloads: a response may be
//! `{success, data: {...}}`, `{data: {...}}`, or the payload itself as a flat
//! object. Each helper here is one extraction strategy, tried in a fixed
//! precedence order, and each is pure — the adapter and services compose them
//! instead of optional-chaining through `serde_json::Value` ad hoc.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// The payload of a response: the nested `data` object when present,
/// otherwise the body itself.
///
/// A nested `data` field wins over the top level when both carry content.
pub fn payload(body: &Value) -> &Value {
    match body.get("data") {
        Some(data) if !data.is_null() => data,
        _ => body,
    }
}

/// A named field of the payload: `body[name]`, then `body["data"][name]`,
/// then the body itself as a flat fallback.
pub fn field<'a>(body: &'a Value, name: &str) -> &'a Value {
    if let Some(direct) = body.get(name) {
        if !direct.is_null() {
            return direct;
        }
    }
    if let Some(nested) = body.get("data").and_then(|d| d.get(name)) {
        if !nested.is_null() {
            return nested;
        }
    }
    body
}

/// The session token of a login response: `token`, then `accessToken`, then
/// `data.token`.
pub fn token(body: &Value) -> Option<&str> {
    body.get("token")
        .or_else(|| body.get("accessToken"))
        .or_else(|| body.get("data").and_then(|d| d.get("token")))
        .and_then(Value::as_str)
}

/// The human-readable message of an error body: `message`, then
/// `data.message`, else empty.
pub fn message(body: &Value) -> String {
    body.get("message")
        .or_else(|| body.get("data").and_then(|d| d.get("message")))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Deserialize a selected value into a typed model.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, ApiError> {
    serde_json::from_value(value.clone()).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_prefers_nested_data() {
        let body = json!({"success": true, "projects": [], "data": {"projects": [1, 2]}});
        assert_eq!(payload(&body), &json!({"projects": [1, 2]}));
    }

    #[test]
    fn test_payload_tolerates_flat_body() {
        let body = json!({"projects": [1]});
        assert_eq!(payload(&body), &body);
    }

    #[test]
    fn test_payload_ignores_null_data() {
        let body = json!({"data": null, "user": {"role": "admin"}});
        assert_eq!(payload(&body), &body);
    }

    #[test]
    fn test_field_precedence() {
        // Direct field wins over nested
        let body = json!({"user": {"role": "admin"}, "data": {"user": {"role": "user"}}});
        assert_eq!(field(&body, "user"), &json!({"role": "admin"}));

        // Nested data.field when no direct field
        let body = json!({"data": {"user": {"role": "admin"}}});
        assert_eq!(field(&body, "user"), &json!({"role": "admin"}));

        // Flat fallback: the body itself
        let body = json!({"role": "admin", "email": "a@b.com"});
        assert_eq!(field(&body, "user"), &body);
    }

    #[test]
    fn test_token_precedence() {
        assert_eq!(token(&json!({"token": "abc"})), Some("abc"));
        assert_eq!(token(&json!({"accessToken": "def"})), Some("def"));
        assert_eq!(token(&json!({"data": {"token": "ghi"}})), Some("ghi"));
        assert_eq!(
            token(&json!({"token": "abc", "data": {"token": "ghi"}})),
            Some("abc")
        );
        assert_eq!(token(&json!({"success": true})), None);
    }

    #[test]
    fn test_message() {
        assert_eq!(message(&json!({"message": "nope"})), "nope");
        assert_eq!(message(&json!({"data": {"message": "still no"}})), "still no");
        assert_eq!(message(&json!({})), "");
    }

    #[test]
    fn test_decode_failure_is_decode_error() {
        let err = decode::<Vec<u32>>(&json!({"not": "a list"})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
