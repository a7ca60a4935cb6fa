//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{GameId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{Achievement, OwnedNft, PurchasedGame, User};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Profiles
// ============================================================================

/// Public user profile; the password hash never leaves the crate
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub nfts: Vec<OwnedNft>,
    pub achievements: Vec<Achievement>,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub games: Vec<GameId>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            user_id: user.id,
            username: user.username.into(),
            email: user.email.into(),
            bio: user.bio,
            nfts: user.nfts,
            achievements: user.achievements,
            is_active: user.is_active,
            date_joined: user.date_joined,
            games: user.games,
        }
    }
}

/// Owned game entry
#[derive(Debug, Clone, Serialize)]
pub struct PurchasedGameResponse {
    pub game_id: GameId,
    pub title: Option<String>,
    pub price: Option<f64>,
}

impl From<PurchasedGame> for PurchasedGameResponse {
    fn from(game: PurchasedGame) -> Self {
        PurchasedGameResponse {
            game_id: game.game_id,
            title: game.title,
            price: game.price,
        }
    }
}
