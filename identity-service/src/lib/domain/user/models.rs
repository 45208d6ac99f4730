use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::DisplayNameError;
use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;

/// User record.
///
/// Created once by registration and read by authentication; this service
/// never mutates or deletes it. The password digest is opaque storage and
/// must not appear in any response payload.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub username: DisplayName,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account identifier value type.
///
/// Validated as local-part@domain where the domain contains a dot and ends
/// in a segment of at least two characters. Identifiers are case-sensitive
/// and stored exactly as provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a well-formed address
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        // The RFC parser accepts bare domains; registration additionally
        // requires a dotted domain with a >=2 character final segment.
        let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or("");
        let tld = domain.rsplit('.').next().unwrap_or("");
        if !domain.contains('.') || tld.len() < 2 {
            return Err(EmailError::InvalidFormat(format!(
                "domain must contain a dot and end in at least 2 characters: {}",
                domain
            )));
        }

        Ok(Self(email))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
///
/// Ensures the name is non-blank and at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid display name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 64 characters
    pub fn new(name: String) -> Result<Self, DisplayNameError> {
        if name.trim().is_empty() {
            return Err(DisplayNameError::Empty);
        }
        if name.chars().count() > Self::MAX_LENGTH {
            return Err(DisplayNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.chars().count(),
            });
        }
        Ok(Self(name))
    }

    /// Get display name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub email: EmailAddress,
    pub username: DisplayName,
    pub password: String,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// The password stays plaintext here; the service hashes it before
    /// anything is persisted.
    pub fn new(email: EmailAddress, username: DisplayName, password: String) -> Self {
        Self {
            email,
            username,
            password,
        }
    }
}

/// Login credentials. Transient and request-scoped; dropped after the
/// digest comparison.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_dotted_domain() {
        assert!(EmailAddress::new("a@b.com".to_string()).is_ok());
        assert!(EmailAddress::new("first.last@sub.domain.org".to_string()).is_ok());
    }

    #[test]
    fn test_email_rejects_undotted_or_short_tld() {
        assert!(EmailAddress::new("a@b".to_string()).is_err());
        assert!(EmailAddress::new("a@b.c".to_string()).is_err());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }

    #[test]
    fn test_email_is_case_sensitive() {
        let lower = EmailAddress::new("a@b.com".to_string()).unwrap();
        let upper = EmailAddress::new("A@b.com".to_string()).unwrap();
        assert_ne!(lower, upper);
        assert_eq!(upper.as_str(), "A@b.com");
    }

    #[test]
    fn test_display_name_rejects_blank() {
        assert!(DisplayName::new("".to_string()).is_err());
        assert!(DisplayName::new("   ".to_string()).is_err());
        assert!(DisplayName::new("A".to_string()).is_ok());
    }

    #[test]
    fn test_display_name_rejects_overlong() {
        let name = "x".repeat(65);
        assert!(matches!(
            DisplayName::new(name),
            Err(DisplayNameError::TooLong { max: 64, actual: 65 })
        ));
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);

        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
