//! Identifier newtypes shared across the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, ErrorCode};

/// Opaque caller-supplied identifier grouping exchanges into one session.
///
/// Sessions are not created explicitly; the first exchange under an
/// identifier brings the transcript into existence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning an error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyField,
                "Session ID cannot be empty",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_identifiers() {
        let id = SessionId::new("mobile-7f3a").unwrap();
        assert_eq!(id.as_str(), "mobile-7f3a");
        assert_eq!(id.to_string(), "mobile-7f3a");
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(SessionId::new("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_identifier() {
        assert!(SessionId::new("   ").is_err());
    }

    #[test]
    fn serializes_transparently() {
        let id = SessionId::new("default").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"default\"");
    }
}
