//! Authentication primitives
//!
//! Reusable building blocks for credential management:
//! - Password hashing (bcrypt, salted, adaptive cost)
//! - Identity token generation and validation (HS256)
//! - Authentication coordination
//!
//! The service layer defines its own flows and error taxonomy; this crate
//! only provides the cryptographic seams those flows compose.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", "a@b.com".into(), "A".into(), 6);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.email, "a@b.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let digest = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let claims = Claims::for_user("user123", "a@b.com".into(), "A".into(), 6);
//! let result = auth.authenticate("password123", &digest, &claims).unwrap();
//!
//! // Protected request: validate the token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
