//! Scanner Types and Enums
//!
//! Shared types used throughout the scanner module.

use std::fmt;

/// Username token extracted from a scanned QR payload.
///
/// The token is opaque to the scanner: no character or length validation is
/// performed here. The profile service is responsible for rejecting unknown
/// or malformed identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ProfileIdentifier(String);

impl ProfileIdentifier {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProfileIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProfileIdentifier {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Session state for one focus period of the scanning view.
///
/// `Idle` accepts scans; `Resolved` ignores them until the view regains
/// focus. There is no terminal state - the resolver is reused indefinitely
/// across focus cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Resolved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_identifier_display_matches_token() {
        let id = ProfileIdentifier::new("alice");
        assert_eq!(id.to_string(), "alice");
        assert_eq!(id.as_str(), "alice");
    }

    #[test]
    fn test_profile_identifier_preserves_arbitrary_tokens() {
        // No validation is applied to the token itself
        let id = ProfileIdentifier::from("weird token!");
        assert_eq!(id.into_string(), "weird token!");
    }

    #[test]
    fn test_session_state_equality() {
        assert_eq!(SessionState::Idle, SessionState::Idle);
        assert_ne!(SessionState::Idle, SessionState::Resolved);
    }
}
