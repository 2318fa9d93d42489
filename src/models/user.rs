use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account as persisted by the credential store.
///
/// Deliberately not `Serialize`: the password hash must never leave the server.
/// Anything sent to a client goes through [`UserPublic`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The outward view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_view_has_no_hash() {
        let user = User::new(
            "Alice".to_string(),
            "a@x.com".to_string(),
            "$2b$04$abcdefghijklmnopqrstuu".to_string(),
        );
        let public = UserPublic::from(&user);
        let json = serde_json::to_value(&public).unwrap();

        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_new_user_timestamps_match() {
        let user = User::new("Bob".into(), "b@x.com".into(), "hash".into());
        assert_eq!(user.created_at, user.updated_at);
    }
}
