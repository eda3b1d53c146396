//! User entity and candidate input types

use serde::{Deserialize, Serialize};

/// A user record as it is persisted and returned to callers.
///
/// The `id` is assigned by the persistence gateway on first save and is
/// `None` before that. The `password` is accepted on input but never
/// serialized outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique identifier, assigned at persistence time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Username used as the external lookup key
    pub user_name: String,
    /// Email address
    pub email: String,
    /// Write-only: deserialized from requests, never included in output
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl UserRecord {
    /// Create a not-yet-persisted record (no id)
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_name: user_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Return a copy carrying the given assigned id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// User-submitted, not-yet-validated registration input.
///
/// All fields are optional so that missing JSON keys surface as field-level
/// validation errors instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Candidate {
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_name: Some(user_name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_starts_without_id() {
        let record = UserRecord::new("alice", "alice@example.com", "Str0ng!Pass");
        assert!(record.id.is_none());
        assert_eq!(record.user_name, "alice");
    }

    #[test]
    fn test_with_id() {
        let record = UserRecord::new("alice", "alice@example.com", "Str0ng!Pass").with_id(7);
        assert_eq!(record.id, Some(7));
    }

    #[test]
    fn test_serialization_omits_password() {
        let record = UserRecord::new("alice", "alice@example.com", "Str0ng!Pass").with_id(1);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_serialization_omits_absent_id() {
        let record = UserRecord::new("alice", "alice@example.com", "Str0ng!Pass");

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_candidate_accepts_missing_fields() {
        let candidate: Candidate = serde_json::from_str(r#"{"userName":"bob"}"#).unwrap();
        assert_eq!(candidate.user_name.as_deref(), Some("bob"));
        assert!(candidate.email.is_none());
        assert!(candidate.password.is_none());
    }

    #[test]
    fn test_record_deserializes_camel_case() {
        let record: UserRecord = serde_json::from_str(
            r#"{"userName":"alice","email":"alice@example.com","password":"Str0ng!Pass"}"#,
        )
        .unwrap();
        assert_eq!(record.user_name, "alice");
        assert_eq!(record.password, "Str0ng!Pass");
        assert!(record.id.is_none());
    }
}
