//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{PurchasedGame, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Check if user name exists (case-insensitive)
    async fn exists_by_username(&self, username: &UserName) -> AccountResult<bool>;

    /// Create a new user; a uniqueness race maps to the matching conflict
    async fn create(&self, user: &User) -> AccountResult<()>;

    async fn find_by_id(&self, user_id: UserId) -> AccountResult<Option<User>>;

    /// Find user by user name (case-insensitive)
    async fn find_by_username(&self, username: &UserName) -> AccountResult<Option<User>>;

    /// All users, oldest first
    async fn list(&self) -> AccountResult<Vec<User>>;

    /// Owned games joined with the catalog; ids with no catalog row are skipped
    async fn purchased_games(&self, user_id: UserId) -> AccountResult<Vec<PurchasedGame>>;
}
