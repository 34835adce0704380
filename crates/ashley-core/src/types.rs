//! Shared domain types for the conversation log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a conversation turn.
///
/// Serialized with the wire casing (`user` / `assistant`) used by
/// OpenAI-compatible chat endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the conversation log.
///
/// Immutable once created: the session history only ever appends turns and
/// discards them wholesale on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Turn identifier.
    pub id: Uuid,
    /// Author of the turn.
    pub role: Role,
    /// Text content as displayed to the user.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a new turn with a fresh id and the current timestamp.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_role_serde_wire_casing() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );

        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_turn_new_sets_fields() {
        let turn = Turn::new(Role::User, "hello");
        assert_ne!(turn.id, Uuid::nil());
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.content, "hello");
        let age = Utc::now() - turn.created_at;
        assert!(age.num_seconds() < 2);
    }

    #[test]
    fn test_turn_ids_are_unique() {
        let a = Turn::new(Role::User, "a");
        let b = Turn::new(Role::User, "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_turn_serde_round_trip() {
        let turn = Turn::new(Role::Assistant, "an answer");
        let json = serde_json::to_string(&turn).unwrap();
        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, turn.id);
        assert_eq!(back.role, Role::Assistant);
        assert_eq!(back.content, "an answer");
    }
}
