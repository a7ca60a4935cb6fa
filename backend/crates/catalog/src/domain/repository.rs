//! Repository Traits
//!
//! Interfaces for data persistence and the on-chain ownership lookup.
//! Implementations are in the infrastructure layer.

use crate::domain::entities::{
    Bounty, BountyDetails, BountyScope, Game, GameDetails, Nft, NftDetails, NftScope,
};
use crate::error::CatalogResult;
use kernel::id::{BountyId, GameId};

/// Game repository trait
#[trait_variant::make(GameRepository: Send)]
pub trait LocalGameRepository {
    /// All games, oldest first
    async fn list_games(&self) -> CatalogResult<Vec<Game>>;

    async fn find_game(&self, game_id: GameId) -> CatalogResult<Option<Game>>;

    /// Whether another game already uses this title or external id
    async fn game_exists_with(
        &self,
        title: Option<&str>,
        external_id: Option<&str>,
    ) -> CatalogResult<bool>;

    async fn insert_game(&self, game: &Game) -> CatalogResult<()>;

    /// Replace the editable body and stamp `updated_at`; `None` when no row matched
    async fn replace_game(
        &self,
        game_id: GameId,
        details: &GameDetails,
    ) -> CatalogResult<Option<Game>>;

    /// Returns whether a row was deleted
    async fn delete_game(&self, game_id: GameId) -> CatalogResult<bool>;
}

/// Bounty repository trait
#[trait_variant::make(BountyRepository: Send)]
pub trait LocalBountyRepository {
    async fn list_bounties(&self, game_id: GameId) -> CatalogResult<Vec<Bounty>>;

    async fn find_bounty(&self, scope: BountyScope) -> CatalogResult<Option<Bounty>>;

    /// Fails with `GameNotFound` when the parent game does not exist
    async fn insert_bounty(&self, bounty: &Bounty) -> CatalogResult<()>;

    async fn replace_bounty(
        &self,
        scope: BountyScope,
        details: &BountyDetails,
    ) -> CatalogResult<Option<Bounty>>;

    async fn delete_bounty(&self, scope: BountyScope) -> CatalogResult<bool>;
}

/// NFT reward repository trait
#[trait_variant::make(NftRepository: Send)]
pub trait LocalNftRepository {
    async fn list_nfts(&self, game_id: GameId, bounty_id: BountyId) -> CatalogResult<Vec<Nft>>;

    async fn find_nft(&self, scope: NftScope) -> CatalogResult<Option<Nft>>;

    /// Fails with `BountyNotFound` when the parent bounty does not exist in the game
    async fn insert_nft(&self, nft: &Nft) -> CatalogResult<()>;

    async fn replace_nft(&self, scope: NftScope, details: &NftDetails)
    -> CatalogResult<Option<Nft>>;

    async fn delete_nft(&self, scope: NftScope) -> CatalogResult<bool>;
}

/// Read-only ownership query against the NFT contract
#[trait_variant::make(TokenOwnerLookup: Send)]
pub trait LocalTokenOwnerLookup {
    /// Owner address of `token_id`; any chain-side failure is `TokenOwnerNotFound`
    async fn owner_of(&self, token_id: u128) -> CatalogResult<String>;
}
