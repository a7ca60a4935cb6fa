//! Login Use Case
//!
//! Checks a username/password pair. No session is issued; the caller gets
//! the profile back.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::application::config::AccountConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AccountError, AccountResult};

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<User> {
        // A name that could never have registered cannot match
        let username =
            UserName::new(&input.username).map_err(|_| AccountError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password = PlainPassword::for_login(input.password);
        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AccountError::InvalidCredentials);
        }

        if !user.can_login() {
            return Err(AccountError::AccountDisabled);
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(user)
    }
}
