//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::application::config::AccountConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<User> {
        let email = Email::new(&input.email)?;
        let username = UserName::new(&input.username)?;

        // Email is checked first
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }
        if self.user_repo.exists_by_username(&username).await? {
            return Err(AccountError::UsernameTaken);
        }

        let password = PlainPassword::new(input.password)
            .map_err(|e| AccountError::PasswordValidation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let user = User::new(username, email, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User registered"
        );

        Ok(user)
    }
}
