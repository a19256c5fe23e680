//! Mock signed-in identity.

use serde::{Deserialize, Serialize};

use crate::types::Email;

/// Persisted sign-in identity.
///
/// Only the email survives the sign-in form; the password is discarded before
/// this type is ever constructed. Absence of a session means "guest".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Email the visitor signed in with.
    pub email: Email,
}

impl Session {
    /// Create a session for an email.
    #[must_use]
    pub const fn new(email: Email) -> Self {
        Self { email }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let session = Session::new(Email::parse("user@example.com").unwrap());
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"email":"user@example.com"}"#);
    }
}
