//! User identity entity and signup input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::{DEFAULT_DESCRIPTION, USERNAME_PATTERN};

/// Kind of contact a stored record represents. Self-registration always
/// produces `User`; groups are created elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    User,
    Group,
}

impl From<&str> for ContactType {
    fn from(s: &str) -> Self {
        match s {
            "GROUP" => ContactType::Group,
            _ => ContactType::User,
        }
    }
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactType::User => write!(f, "USER"),
            ContactType::Group => write!(f, "GROUP"),
        }
    }
}

/// Persisted user identity.
///
/// Built once by the signup pipeline, written once to the store and never
/// updated or deleted by it. The username is case-normalized at construction
/// and unique across the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_digest: String,
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub contact_type: ContactType,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Construct a fresh identity for self-registration.
    ///
    /// Generates a new id, lowercases the username, applies the default
    /// description and fixes the contact type to `User`. The caller supplies
    /// the already-hashed credential; plaintext never reaches this type.
    pub fn new(username: &str, password_digest: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_lowercase(),
            email: None,
            password_digest,
            name,
            avatar,
            description: DEFAULT_DESCRIPTION.to_string(),
            contact_type: ContactType::User,
            created_at: Utc::now(),
        }
    }
}

/// Raw signup input. Must pass validation before any field is used downstream.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Desired username (case-insensitive, stored lowercased)
    #[validate(
        length(min = 3, max = 32, message = "Username must be 3-32 characters"),
        regex(
            path = *USERNAME_PATTERN,
            message = "Username may only contain letters, digits, '.', '_' and '-'"
        )
    )]
    #[schema(example = "carol")]
    pub username: String,
    /// Plaintext password; hashed before persistence, never stored
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    #[schema(example = "pw12345!", min_length = 8)]
    pub password: String,
    /// Display name
    #[validate(length(min = 1, max = 64, message = "Name is required"))]
    #[schema(example = "Carol")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_username() {
        let user = User::new(
            "Alice",
            "digest".to_string(),
            "Alice".to_string(),
            "/avatars/avatar-01.png".to_string(),
        );
        assert_eq!(user.username, "alice");
        assert_eq!(user.contact_type, ContactType::User);
        assert_eq!(user.description, DEFAULT_DESCRIPTION);
        assert!(user.email.is_none());
    }

    #[test]
    fn fresh_users_get_distinct_ids() {
        let a = User::new("a1b", "d".into(), "A".into(), "x".into());
        let b = User::new("a1b", "d".into(), "A".into(), "x".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn contact_type_round_trips_through_storage_form() {
        assert_eq!(ContactType::from("USER"), ContactType::User);
        assert_eq!(ContactType::from("GROUP"), ContactType::Group);
        assert_eq!(ContactType::User.to_string(), "USER");
    }
}
