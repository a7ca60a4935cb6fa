//! Domain Entities
//!
//! Games, their bounties, and the NFT rewards attached to bounties.

use chrono::{DateTime, Utc};
use kernel::id::{BountyId, GameId, NftId};
use serde::{Deserialize, Serialize};

/// Reward advertised on a game page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Player review; stored with the game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user_id: Option<String>,
    pub user: Option<String>,
    pub avatar: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemRequirements {
    pub os: Option<String>,
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub graphics: Option<String>,
    pub storage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperData {
    pub name: Option<String>,
    pub wallet_address: Option<String>,
}

/// Editable part of a game
///
/// Create and update both take the whole body; there are no partial patches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameDetails {
    /// Publisher-facing identifier, unique when present
    pub external_id: Option<String>,
    /// Unique when present
    pub title: Option<String>,
    pub price: Option<f64>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub nft_rewards: Vec<Reward>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub rating: Option<f64>,
    pub system_requirements: Option<SystemRequirements>,
    pub developer_data: Option<DeveloperData>,
}

/// Game entity
#[derive(Debug, Clone)]
pub struct Game {
    pub id: GameId,
    pub details: GameDetails,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// New game with an empty review list
    pub fn new(details: GameDetails) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::new(),
            details,
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Editable part of a bounty
#[derive(Debug, Clone, PartialEq)]
pub struct BountyDetails {
    pub name: String,
    pub description: String,
}

/// Bounty entity, scoped under a game
#[derive(Debug, Clone)]
pub struct Bounty {
    pub id: BountyId,
    pub game_id: GameId,
    pub details: BountyDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bounty {
    pub fn new(game_id: GameId, details: BountyDetails) -> Self {
        let now = Utc::now();
        Self {
            id: BountyId::new(),
            game_id,
            details,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Editable part of an NFT reward
#[derive(Debug, Clone, PartialEq)]
pub struct NftDetails {
    pub name: String,
    pub description: Option<String>,
    /// Token metadata URI
    pub uri: Option<String>,
}

/// NFT reward entity, scoped under a bounty
#[derive(Debug, Clone)]
pub struct Nft {
    pub id: NftId,
    pub game_id: GameId,
    pub bounty_id: BountyId,
    pub details: NftDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Nft {
    pub fn new(game_id: GameId, bounty_id: BountyId, details: NftDetails) -> Self {
        let now = Utc::now();
        Self {
            id: NftId::new(),
            game_id,
            bounty_id,
            details,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Scope of a bounty: `(game, bounty)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BountyScope {
    pub game_id: GameId,
    pub bounty_id: BountyId,
}

/// Scope of an NFT: `(game, bounty, nft)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NftScope {
    pub game_id: GameId,
    pub bounty_id: BountyId,
    pub nft_id: NftId,
}
