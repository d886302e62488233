use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pagination;

/// The role claim gating access to this console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Anything that is not an admin. The console has exactly one privilege
    /// tier, so this only ever means "denied".
    #[default]
    User,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// A registered user, admin or otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Two-letter initials for the avatar chip, falling back to "U".
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        match (first, last) {
            (None, None) => "U".to_string(),
            (a, b) => a.into_iter().chain(b).collect(),
        }
    }
}

/// One page of the users listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_backend_json() {
        let user: User = serde_json::from_value(json!({
            "_id": "66f1a2b3c4d5e6f7a8b9c0d1",
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@mustardworks.com",
            "role": "admin",
            "createdAt": "2024-03-05T10:15:00.000Z"
        }))
        .unwrap();
        assert_eq!(user.id, "66f1a2b3c4d5e6f7a8b9c0d1");
        assert!(user.role.is_admin());
        assert_eq!(user.full_name(), "Asha Rao");
        assert_eq!(user.initials(), "AR");
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_sparse_user_defaults() {
        let user: User = serde_json::from_value(json!({"email": "x@y.com"})).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.created_at.is_none());
        assert_eq!(user.initials(), "U");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_value::<Role>(json!("superadmin"));
        assert!(result.is_err());
    }
}
