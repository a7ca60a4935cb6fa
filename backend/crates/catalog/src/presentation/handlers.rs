//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use kernel::id::{BountyId, GameId, Id};
use kernel::response::{ApiResponse, Created};
use std::sync::Arc;

use crate::application::{BountyUseCase, GameUseCase, NftUseCase, TokenOwnerUseCase};
use crate::domain::entities::{BountyScope, NftScope};
use crate::domain::repository::{
    BountyRepository, GameRepository, NftRepository, TokenOwnerLookup,
};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    BountyCollection, BountyCreatedResponse, BountyRequest, BountyResponse, GameCollection,
    GameCreatedResponse, GameRequest, GameResponse, MessageResponse, NftCollection,
    NftCreatedResponse, NftRequest, NftResponse, TokenOwnerResponse,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R, O>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub owners: Arc<O>,
}

fn parse_id<T>(label: &'static str, raw: &str) -> CatalogResult<Id<T>> {
    Id::parse(raw).map_err(|_| CatalogError::InvalidId {
        label,
        raw: raw.to_string(),
    })
}

fn bounty_scope(game_id: &str, bounty_id: &str) -> CatalogResult<BountyScope> {
    Ok(BountyScope {
        game_id: parse_id("game", game_id)?,
        bounty_id: parse_id("bounty", bounty_id)?,
    })
}

fn nft_scope(game_id: &str, bounty_id: &str, nft_id: &str) -> CatalogResult<NftScope> {
    Ok(NftScope {
        game_id: parse_id("game", game_id)?,
        bounty_id: parse_id("bounty", bounty_id)?,
        nft_id: parse_id("NFT", nft_id)?,
    })
}

// ============================================================================
// Games
// ============================================================================

/// GET /games
pub async fn list_games<R, O>(
    State(state): State<CatalogAppState<R, O>>,
) -> CatalogResult<ApiResponse<GameCollection>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let games = GameUseCase::new(state.repo.clone()).list().await?;

    Ok(ApiResponse::success(
        "Game retrieved successfully",
        GameCollection {
            games: games.into_iter().map(GameResponse::from).collect(),
        },
    ))
}

/// GET /games/{game_id}
pub async fn get_game<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path(game_id): Path<String>,
) -> CatalogResult<ApiResponse<GameResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let game_id: GameId = parse_id("game", &game_id)?;
    let game = GameUseCase::new(state.repo.clone()).get(game_id).await?;

    Ok(ApiResponse::success(
        "Game retrieved successfully",
        GameResponse::from(game),
    ))
}

/// POST /games
pub async fn create_game<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Json(req): Json<GameRequest>,
) -> CatalogResult<Created<GameCreatedResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let game = GameUseCase::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok(Created(ApiResponse::success(
        "Game created successfully",
        GameCreatedResponse::from(game),
    )))
}

/// PUT /games/{game_id}
pub async fn update_game<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path(game_id): Path<String>,
    Json(req): Json<GameRequest>,
) -> CatalogResult<ApiResponse<GameResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let game_id: GameId = parse_id("game", &game_id)?;
    let game = GameUseCase::new(state.repo.clone())
        .update(game_id, req.into())
        .await?;

    Ok(ApiResponse::success(
        "Successfully updated game data",
        GameResponse::from(game),
    ))
}

/// DELETE /games/{game_id}
pub async fn delete_game<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path(game_id): Path<String>,
) -> CatalogResult<ApiResponse<MessageResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let game_id: GameId = parse_id("game", &game_id)?;
    GameUseCase::new(state.repo.clone()).delete(game_id).await?;

    Ok(ApiResponse::success(
        "Successfully deleted game data",
        MessageResponse::new("Game successfully deleted."),
    ))
}

// ============================================================================
// Bounties
// ============================================================================

/// GET /bounties/{game_id}
pub async fn list_bounties<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path(game_id): Path<String>,
) -> CatalogResult<ApiResponse<BountyCollection>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let game_id: GameId = parse_id("game", &game_id)?;
    let bounties = BountyUseCase::new(state.repo.clone()).list(game_id).await?;

    Ok(ApiResponse::success(
        format!("All bounties from game {} retrieved successfully", game_id),
        BountyCollection {
            bounties: bounties.into_iter().map(BountyResponse::from).collect(),
        },
    ))
}

/// GET /bounties/{game_id}/{bounty_id}
pub async fn get_bounty<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id)): Path<(String, String)>,
) -> CatalogResult<ApiResponse<BountyResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let scope = bounty_scope(&game_id, &bounty_id)?;
    let bounty = BountyUseCase::new(state.repo.clone()).get(scope).await?;

    Ok(ApiResponse::success(
        format!(
            "Bounty {} from game {} retrieved successfully",
            scope.bounty_id, scope.game_id
        ),
        BountyResponse::from(bounty),
    ))
}

/// POST /bounties/{game_id}
pub async fn create_bounty<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path(game_id): Path<String>,
    Json(req): Json<BountyRequest>,
) -> CatalogResult<Created<BountyCreatedResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let game_id: GameId = parse_id("game", &game_id)?;
    let bounty = BountyUseCase::new(state.repo.clone())
        .create(game_id, req.into())
        .await?;

    Ok(Created(ApiResponse::success(
        format!("Bounty inside the game {} created successfully", game_id),
        BountyCreatedResponse {
            bounty_id: bounty.id,
            created_at: bounty.created_at,
            updated_at: bounty.updated_at,
        },
    )))
}

/// PUT /bounties/{game_id}/{bounty_id}
pub async fn update_bounty<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id)): Path<(String, String)>,
    Json(req): Json<BountyRequest>,
) -> CatalogResult<ApiResponse<BountyResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let scope = bounty_scope(&game_id, &bounty_id)?;
    let bounty = BountyUseCase::new(state.repo.clone())
        .update(scope, req.into())
        .await?;

    Ok(ApiResponse::success(
        format!(
            "Bounty with ID {} in game {} updated successfully",
            scope.bounty_id, scope.game_id
        ),
        BountyResponse::from(bounty),
    ))
}

/// DELETE /bounties/{game_id}/{bounty_id}
pub async fn delete_bounty<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id)): Path<(String, String)>,
) -> CatalogResult<ApiResponse<MessageResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let scope = bounty_scope(&game_id, &bounty_id)?;
    BountyUseCase::new(state.repo.clone()).delete(scope).await?;

    Ok(ApiResponse::success(
        format!(
            "Bounty with ID {} in game {} deleted successfully",
            scope.bounty_id, scope.game_id
        ),
        MessageResponse::new("Bounty successfully deleted."),
    ))
}

// ============================================================================
// NFT rewards
// ============================================================================

/// GET /nfts/{game_id}/{bounty_id}
pub async fn list_nfts<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id)): Path<(String, String)>,
) -> CatalogResult<ApiResponse<NftCollection>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let scope = bounty_scope(&game_id, &bounty_id)?;
    let nfts = NftUseCase::new(state.repo.clone())
        .list(scope.game_id, scope.bounty_id)
        .await?;

    Ok(ApiResponse::success(
        "Retrieve All NFTs successfully",
        NftCollection {
            nfts: nfts.into_iter().map(NftResponse::from).collect(),
        },
    ))
}

/// GET /nfts/{game_id}/{bounty_id}/{nft_id}
pub async fn get_nft<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id, nft_id)): Path<(String, String, String)>,
) -> CatalogResult<ApiResponse<NftResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let scope = nft_scope(&game_id, &bounty_id, &nft_id)?;
    let nft = NftUseCase::new(state.repo.clone()).get(scope).await?;

    Ok(ApiResponse::success(
        "Retrieve NFT successfully",
        NftResponse::from(nft),
    ))
}

/// POST /nfts/{game_id}/{bounty_id}
pub async fn create_nft<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id)): Path<(String, String)>,
    Json(req): Json<NftRequest>,
) -> CatalogResult<Created<NftCreatedResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let game_id: GameId = parse_id("game", &game_id)?;
    let bounty_id: BountyId = parse_id("bounty", &bounty_id)?;
    let nft = NftUseCase::new(state.repo.clone())
        .create(game_id, bounty_id, req.into())
        .await?;

    Ok(Created(ApiResponse::success(
        "Create New NFT successfully",
        NftCreatedResponse {
            nft_id: nft.id,
            created_at: nft.created_at,
            updated_at: nft.updated_at,
        },
    )))
}

/// PUT /nfts/{game_id}/{bounty_id}/{nft_id}
pub async fn update_nft<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id, nft_id)): Path<(String, String, String)>,
    Json(req): Json<NftRequest>,
) -> CatalogResult<ApiResponse<NftResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let scope = nft_scope(&game_id, &bounty_id, &nft_id)?;
    let nft = NftUseCase::new(state.repo.clone())
        .update(scope, req.into())
        .await?;

    Ok(ApiResponse::success(
        format!(
            "NFT with ID {} in game {} and bounty {} updated successfully",
            scope.nft_id, scope.game_id, scope.bounty_id
        ),
        NftResponse::from(nft),
    ))
}

/// DELETE /nfts/{game_id}/{bounty_id}/{nft_id}
pub async fn delete_nft<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path((game_id, bounty_id, nft_id)): Path<(String, String, String)>,
) -> CatalogResult<ApiResponse<MessageResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let scope = nft_scope(&game_id, &bounty_id, &nft_id)?;
    NftUseCase::new(state.repo.clone()).delete(scope).await?;

    Ok(ApiResponse::success(
        format!(
            "NFT with ID {} in game {} and bounty {} deleted successfully",
            scope.nft_id, scope.game_id, scope.bounty_id
        ),
        MessageResponse::new("NFT successfully deleted."),
    ))
}

/// GET /nfts/{token_id}/owner
///
/// Registered as `/nfts/{game_id}/owner` so the first segment shares its
/// parameter name with the scoped NFT routes.
pub async fn token_owner<R, O>(
    State(state): State<CatalogAppState<R, O>>,
    Path(token_id): Path<String>,
) -> CatalogResult<ApiResponse<TokenOwnerResponse>>
where
    R: GameRepository + BountyRepository + NftRepository + Clone + Send + Sync + 'static,
    O: TokenOwnerLookup + Clone + Send + Sync + 'static,
{
    let owner = TokenOwnerUseCase::new(state.owners.clone())
        .execute(&token_id)
        .await?;

    Ok(ApiResponse::success(
        "Retrieve Owner's Address successfully",
        TokenOwnerResponse {
            token_id,
            owner_address: owner,
        },
    ))
}
