//! Identifiers and Errors
//!
//! Every record on the dashboard carries an opaque identifier that is unique
//! within its containing collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for members, tasks, favours and contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// None of these are fatal. Callers keep the previous state when an
/// operation returns an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(42).to_string(), "42");
        assert_eq!(EntityId::from(7).get(), 7);
    }

    #[test]
    fn test_entity_id_serializes_as_number() {
        let json = serde_json::to_string(&EntityId(1719878400000)).unwrap();
        assert_eq!(json, "1719878400000");
    }

    #[test]
    fn test_error_messages() {
        let err = DomainError::InvalidInput("title is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: title is empty");
        let err = DomainError::NotFound("member 9".to_string());
        assert_eq!(err.to_string(), "Not found: member 9");
    }
}
