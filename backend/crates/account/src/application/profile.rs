//! Profile Queries
//!
//! Read-only views over users: the directory, owned games, owned NFTs.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::{OwnedNft, PurchasedGame, User};
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> AccountResult<Vec<User>> {
        let users = self.user_repo.list().await?;
        if users.is_empty() {
            return Err(AccountError::NoUsers);
        }
        Ok(users)
    }
}

pub struct PurchasedGamesUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> PurchasedGamesUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> AccountResult<Vec<PurchasedGame>> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AccountError::UserNotFound(user_id));
        }
        self.user_repo.purchased_games(user_id).await
    }
}

pub struct OwnedNftsUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> OwnedNftsUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> AccountResult<Vec<OwnedNft>> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound(user_id))?;
        Ok(user.nfts)
    }
}
