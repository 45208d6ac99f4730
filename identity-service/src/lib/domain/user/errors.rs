use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Display name must not be blank")]
    Empty,

    #[error("Display name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for the registration, authentication, and verification
/// flows. Mapped to transport status codes in exactly one place, at the
/// HTTP boundary.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Malformed client input, detected locally (converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid display name: {0}")]
    InvalidDisplayName(#[from] DisplayNameError),

    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    // Identifier collision, from the pre-check or the store's unique
    // constraint
    #[error("User already exists")]
    AlreadyRegistered,

    // Store-side schema rejection
    #[error("User record rejected by store: {0}")]
    StoreRejected(String),

    // Bad credentials; one variant for unknown identifier and wrong
    // password alike
    #[error("Incorrect email or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
