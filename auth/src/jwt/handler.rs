use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies identity tokens.
///
/// Uses HS256 (HMAC with SHA-256) keyed by a process-wide secret.
/// Verification fails closed: algorithm mismatch, decoding ambiguity, or a
/// missing expiry claim is a rejection, never a default-accept.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new handler from the signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode a token, verifying signature and expiry.
    ///
    /// # Errors
    /// * `Expired` - Embedded expiry has passed
    /// * `InvalidSignature` - Signature does not match header+payload
    /// * `Malformed` - Structure, algorithm, or claim shape is wrong
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        // `exp` stays in the required claims: a token without an expiry is
        // rejected as malformed.
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_claims() -> Claims {
        Claims::for_user("user123", "a@b.com".to_string(), "alice".to_string(), 6)
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = test_claims();
        let token = handler.encode(&claims).expect("Failed to encode token");
        assert_eq!(token.matches('.').count(), 2);

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&test_claims())
            .expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let mut claims = test_claims();
        claims.iat -= 2 * 60 * 60;
        claims.exp = claims.iat + 60; // expired well past any leeway

        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token);
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = handler
            .encode(&test_claims())
            .expect("Failed to encode token");

        // Swap the payload segment for one the signature does not cover
        let mut claims = test_claims();
        claims.username = "mallory".to_string();
        let other = handler.encode(&claims).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let tampered_parts: Vec<&str> = other.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], tampered_parts[1], parts[2]);

        let result = handler.decode(&tampered);
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }
}
