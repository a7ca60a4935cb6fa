//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the public marketplace API, which mixes `snake_case`
//! identifiers (`game_id`) with `camelCase` attributes (`createdAt`).

use chrono::{DateTime, Utc};
use kernel::id::{BountyId, GameId, NftId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Bounty, BountyDetails, DeveloperData, Game, GameDetails, Nft, NftDetails, Review, Reward,
    SystemRequirements,
};

// ============================================================================
// Games
// ============================================================================

/// Body of POST /games and PUT /games/{game_id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    /// External identifier
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nft_rewards: Option<Vec<Reward>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub system_requirements: Option<SystemRequirements>,
    #[serde(default)]
    pub developer_data: Option<DeveloperData>,
}

impl From<GameRequest> for GameDetails {
    fn from(req: GameRequest) -> Self {
        GameDetails {
            external_id: req.id,
            title: req.title,
            price: req.price,
            genre: req.genre,
            description: req.description,
            nft_rewards: req.nft_rewards.unwrap_or_default(),
            images: req.images.unwrap_or_default(),
            tags: req.tags.unwrap_or_default(),
            rating: req.rating,
            system_requirements: req.system_requirements,
            developer_data: req.developer_data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    #[serde(rename = "game_id")]
    pub game_id: GameId,
    pub id: Option<String>,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviews: Vec<Review>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        let d = game.details;
        GameResponse {
            game_id: game.id,
            id: d.external_id,
            title: d.title,
            price: d.price,
            genre: d.genre,
            description: d.description,
            nft_rewards: d.nft_rewards,
            images: d.images,
            tags: d.tags,
            rating: d.rating,
            system_requirements: d.system_requirements,
            developer_data: d.developer_data,
            created_at: game.created_at,
            updated_at: game.updated_at,
            reviews: game.reviews,
        }
    }
}

/// Response of POST /games
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreatedResponse {
    #[serde(rename = "game_id")]
    pub game_id: GameId,
    pub id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviews: Vec<Review>,
}

impl From<Game> for GameCreatedResponse {
    fn from(game: Game) -> Self {
        GameCreatedResponse {
            game_id: game.id,
            id: game.details.external_id,
            created_at: game.created_at,
            updated_at: game.updated_at,
            reviews: game.reviews,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameCollection {
    pub games: Vec<GameResponse>,
}

// ============================================================================
// Bounties
// ============================================================================

/// Body of POST/PUT bounty routes; the path decides the parent game
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyRequest {
    #[serde(default)]
    pub game_id: Option<String>,
    pub name: String,
    pub description: String,
}

impl From<BountyRequest> for BountyDetails {
    fn from(req: BountyRequest) -> Self {
        BountyDetails {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyResponse {
    pub bounty_id: BountyId,
    pub game_id: GameId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bounty> for BountyResponse {
    fn from(bounty: Bounty) -> Self {
        BountyResponse {
            bounty_id: bounty.id,
            game_id: bounty.game_id,
            name: bounty.details.name,
            description: bounty.details.description,
            created_at: bounty.created_at,
            updated_at: bounty.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyCreatedResponse {
    pub bounty_id: BountyId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BountyCollection {
    pub bounties: Vec<BountyResponse>,
}

// ============================================================================
// NFT rewards
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftRequest {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub bounty_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl From<NftRequest> for NftDetails {
    fn from(req: NftRequest) -> Self {
        NftDetails {
            name: req.name,
            description: req.description,
            uri: req.uri,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftResponse {
    pub nft_id: NftId,
    pub game_id: GameId,
    pub bounty_id: BountyId,
    pub name: String,
    pub description: Option<String>,
    pub uri: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Nft> for NftResponse {
    fn from(nft: Nft) -> Self {
        NftResponse {
            nft_id: nft.id,
            game_id: nft.game_id,
            bounty_id: nft.bounty_id,
            name: nft.details.name,
            description: nft.details.description,
            uri: nft.details.uri,
            created_at: nft.created_at,
            updated_at: nft.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCreatedResponse {
    pub nft_id: NftId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NftCollection {
    pub nfts: Vec<NftResponse>,
}

/// Response of GET /nfts/{token_id}/owner
#[derive(Debug, Clone, Serialize)]
pub struct TokenOwnerResponse {
    pub token_id: String,
    pub owner_address: String,
}

/// Confirmation returned by deletes
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
