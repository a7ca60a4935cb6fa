//! Game Use Cases
//!
//! List, fetch, create, replace and delete games.

use std::sync::Arc;

use kernel::id::GameId;

use crate::domain::entities::{Game, GameDetails};
use crate::domain::repository::GameRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct GameUseCase<R>
where
    R: GameRepository,
{
    repo: Arc<R>,
}

impl<R> GameUseCase<R>
where
    R: GameRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// An empty catalog is reported as not-found
    pub async fn list(&self) -> CatalogResult<Vec<Game>> {
        let games = self.repo.list_games().await?;
        if games.is_empty() {
            return Err(CatalogError::NoGames);
        }
        Ok(games)
    }

    pub async fn get(&self, game_id: GameId) -> CatalogResult<Game> {
        self.repo
            .find_game(game_id)
            .await?
            .ok_or(CatalogError::GameNotFound(game_id))
    }

    pub async fn create(&self, details: GameDetails) -> CatalogResult<Game> {
        if self
            .repo
            .game_exists_with(details.title.as_deref(), details.external_id.as_deref())
            .await?
        {
            return Err(CatalogError::DuplicateGame {
                title: details.title.clone().unwrap_or_default(),
                external_id: details.external_id.clone().unwrap_or_default(),
            });
        }

        let game = Game::new(details);
        self.repo.insert_game(&game).await?;

        tracing::info!(
            game_id = %game.id,
            title = game.details.title.as_deref().unwrap_or(""),
            "Game created"
        );

        Ok(game)
    }

    pub async fn update(&self, game_id: GameId, details: GameDetails) -> CatalogResult<Game> {
        let game = self
            .repo
            .replace_game(game_id, &details)
            .await?
            .ok_or(CatalogError::GameNotFound(game_id))?;

        tracing::info!(game_id = %game_id, "Game updated");
        Ok(game)
    }

    pub async fn delete(&self, game_id: GameId) -> CatalogResult<()> {
        if !self.repo.delete_game(game_id).await? {
            return Err(CatalogError::GameNotFound(game_id));
        }
        tracing::info!(game_id = %game_id, "Game deleted");
        Ok(())
    }
}
