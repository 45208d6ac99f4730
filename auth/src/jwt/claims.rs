use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims embedded in every issued token.
///
/// Carries the public subset of a user record (id, account identifier,
/// display name) plus issuance metadata. The password digest never
/// appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: user id
    pub sub: String,

    /// Unique account identifier
    pub email: String,

    /// Display name
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with expiry `ttl_hours` from now.
    pub fn for_user(
        user_id: impl ToString,
        email: String,
        username: String,
        ttl_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: user_id.to_string(),
            email,
            username,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the embedded expiry has passed.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", "a@b.com".to_string(), "A".to_string(), 6);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.username, "A");
        assert_eq!(claims.exp - claims.iat, 6 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::for_user("u", "a@b.com".to_string(), "A".to_string(), 1);
        claims.iat = 0;
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
