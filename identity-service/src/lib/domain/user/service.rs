use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementing the registration and authentication flows.
///
/// Stateless between requests; the user directory is the only shared
/// state, reached through the repository port.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User directory implementation
    /// * `authenticator` - Shared hashing and token-signing coordinator
    /// * `token_ttl_hours` - Lifetime of issued tokens
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }

    /// Public identity subset of a record; the digest stays behind.
    fn claims_for(&self, user: &User) -> Claims {
        Claims::for_user(
            user.id,
            user.email.as_str().to_string(),
            user.username.as_str().to_string(),
            self.token_ttl_hours,
        )
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<String, AuthError> {
        // Existence pre-check. The store's unique constraint remains the
        // authoritative guard: two concurrent registrations can both pass
        // this lookup, and the loser surfaces as AlreadyRegistered from
        // create below.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::AlreadyRegistered);
        }

        // bcrypt is deliberately slow; keep it off the async executor.
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| AuthError::Unknown(format!("Hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::new(),
            email: command.email,
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;
        tracing::debug!(user_id = %created.id, "User registered");

        let claims = self.claims_for(&created);
        let token = self.authenticator.generate_token(&claims)?;

        Ok(token)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<String, AuthError> {
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let claims = self.claims_for(&user);

        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password;
        let stored_hash = user.password_hash;
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await
        .map_err(|e| AuthError::Unknown(format!("Verification task failed: {}", e)))?
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            auth::AuthenticationError::Password(err) => AuthError::Password(err),
            auth::AuthenticationError::Token(err) => AuthError::Token(err),
        })?;

        Ok(result.access_token)
    }
}
