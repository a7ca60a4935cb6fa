//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::{
    BountyRepository, GameRepository, NftRepository, TokenOwnerLookup,
};
use crate::infra::postgres::PgCatalogRepository;
use crate::infra::tron::TronOwnerLookup;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router with the PostgreSQL repository and Tron lookup
pub fn catalog_router(repo: PgCatalogRepository, owners: TronOwnerLookup) -> Router {
    catalog_router_generic(repo, owners)
}

/// Create a generic catalog router for any repository implementation
pub fn catalog_router_generic<R, O>(repo: R, owners: O) -> Router
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        owners: Arc::new(owners),
    };

    Router::new()
        .route(
            "/games",
            get(handlers::list_games::<R, O>).post(handlers::create_game::<R, O>),
        )
        .route(
            "/games/{game_id}",
            get(handlers::get_game::<R, O>)
                .put(handlers::update_game::<R, O>)
                .delete(handlers::delete_game::<R, O>),
        )
        .route(
            "/bounties/{game_id}",
            get(handlers::list_bounties::<R, O>).post(handlers::create_bounty::<R, O>),
        )
        .route(
            "/bounties/{game_id}/{bounty_id}",
            get(handlers::get_bounty::<R, O>)
                .put(handlers::update_bounty::<R, O>)
                .delete(handlers::delete_bounty::<R, O>),
        )
        .route("/nfts/{game_id}/owner", get(handlers::token_owner::<R, O>))
        .route(
            "/nfts/{game_id}/{bounty_id}",
            get(handlers::list_nfts::<R, O>).post(handlers::create_nft::<R, O>),
        )
        .route(
            "/nfts/{game_id}/{bounty_id}/{nft_id}",
            get(handlers::get_nft::<R, O>)
                .put(handlers::update_nft::<R, O>)
                .delete(handlers::delete_nft::<R, O>),
        )
        .with_state(state)
}
