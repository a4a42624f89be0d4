//! Credential service: signup and login.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{LoginOutcome, LoginRequest, SignupRequest, User, UserResponse};
use crate::password::CredentialHasher;
use crate::repository::UserRepository;

/// Orchestrates account creation and authentication.
///
/// Plaintext passwords only exist inside the request DTOs and are moved into
/// the hasher; they are never stored, logged or returned.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hasher: CredentialHasher,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, hasher: CredentialHasher) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher,
        }
    }

    /// Create an account.
    ///
    /// The lookup is a fast path; the repository insert is what actually
    /// enforces uniqueness.
    #[instrument(skip(self, input), fields(user_name = %input.user_name))]
    pub async fn signup(&self, input: SignupRequest) -> UserResult<UserResponse> {
        if self
            .repository
            .find_by_user_name(&input.user_name)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameTaken(input.user_name));
        }

        let password_hash = self.hasher.hash(input.password).await?;
        let user = User::new(input.user_name, password_hash, input.email_address);

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, "User signed up");
        Ok(created.into())
    }

    /// Check credentials. Unknown name and wrong password are indistinguishable.
    #[instrument(skip(self, input), fields(user_name = %input.user_name))]
    pub async fn login(&self, input: LoginRequest) -> UserResult<LoginOutcome> {
        let Some(user) = self
            .repository
            .find_by_user_name(&input.user_name)
            .await?
        else {
            tracing::info!("Login rejected: unknown user");
            return Err(UserError::InvalidCredentials);
        };

        if !self.hasher.verify(input.password, user.password).await? {
            tracing::info!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome::LoggedIn { user_id: user.id })
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: self.hasher.clone(),
        }
    }
}
