use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::AuthError;

/// Port for the registration and authentication flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a bearer token for it.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Identifier taken (pre-check or store race)
    /// * `StoreRejected` - Store refused the record shape
    /// * `Database` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<String, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or wrong password;
    ///   deliberately indistinguishable
    /// * `Database` - Store operation failed
    async fn authenticate(&self, credentials: Credentials) -> Result<String, AuthError>;
}

/// Persistence port for the user directory.
///
/// The store enforces identifier uniqueness; a duplicate-key failure from
/// `create` is the authoritative conflict signal, the service's pre-check
/// only a convenience.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Unique constraint violation on the identifier
    /// * `StoreRejected` - Constraint violation on the record shape
    /// * `Database` - Operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Look up a user by account identifier (case-sensitive).
    ///
    /// # Errors
    /// * `Database` - Operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}
