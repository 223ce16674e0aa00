use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip)]
    password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: Uuid,
        username: String,
        hashed_password: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash: hashed_password,
            created_at,
        }
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_hides_password_hash() {
        let user = User::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "$argon2id$secret".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("created_at").is_some());
    }
}
