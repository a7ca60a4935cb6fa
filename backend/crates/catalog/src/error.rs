//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind};
use kernel::id::{BountyId, GameId, NftId};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No games found.")]
    NoGames,

    #[error("Game with ID {0} not found.")]
    GameNotFound(GameId),

    /// Title or external id already used by another game
    #[error("A game with the title '{title}' or the id '{external_id}' already exists.")]
    DuplicateGame { title: String, external_id: String },

    #[error("No bounties found for the specified game.")]
    NoBounties,

    #[error("Bounty with ID {bounty_id} not found in game {game_id}.")]
    BountyNotFound { game_id: GameId, bounty_id: BountyId },

    #[error("No nfts found for the specified bountyId & gameId.")]
    NoNfts,

    #[error("NFT with ID {nft_id} not found in game {game_id} and bounty {bounty_id}.")]
    NftNotFound {
        game_id: GameId,
        bounty_id: BountyId,
        nft_id: NftId,
    },

    #[error("NFT with tokenId {0} does not exist")]
    TokenOwnerNotFound(String),

    #[error("Invalid token ID: {0}")]
    InvalidTokenId(String),

    /// Path identifier is not a UUID
    #[error("Invalid {label} ID: {raw}")]
    InvalidId { label: &'static str, raw: String },

    #[error("NFT contract address is not configured")]
    ContractNotConfigured,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NoGames
            | CatalogError::GameNotFound(_)
            | CatalogError::NoBounties
            | CatalogError::BountyNotFound { .. }
            | CatalogError::NoNfts
            | CatalogError::NftNotFound { .. }
            | CatalogError::TokenOwnerNotFound(_) => ErrorKind::NotFound,
            CatalogError::DuplicateGame { .. } => ErrorKind::Conflict,
            CatalogError::InvalidTokenId(_) | CatalogError::InvalidId { .. } => {
                ErrorKind::BadRequest
            }
            CatalogError::ContractNotConfigured | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
            CatalogError::Database(e) => classify_sqlx_error(e).0,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            CatalogError::DuplicateGame { .. } => {
                err.with_action("Choose a different title or external id")
            }
            CatalogError::InvalidId { label, raw } => AppError::invalid_id(label, raw),
            // Do not leak SQL details to clients
            CatalogError::Database(e) => AppError::new(self.kind(), classify_sqlx_error(e).1),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::ContractNotConfigured => {
                tracing::error!("Ownership lookup requested but NFT_CONTRACT_ADDRESS is unset");
            }
            CatalogError::InvalidId { label, raw } => {
                tracing::warn!(label, raw = %raw, "Malformed identifier in path");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
