//! Bounty Use Cases
//!
//! Bounties are always addressed through their parent game.

use std::sync::Arc;

use kernel::id::GameId;

use crate::domain::entities::{Bounty, BountyDetails, BountyScope};
use crate::domain::repository::BountyRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct BountyUseCase<R>
where
    R: BountyRepository,
{
    repo: Arc<R>,
}

impl<R> BountyUseCase<R>
where
    R: BountyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, game_id: GameId) -> CatalogResult<Vec<Bounty>> {
        let bounties = self.repo.list_bounties(game_id).await?;
        if bounties.is_empty() {
            return Err(CatalogError::NoBounties);
        }
        Ok(bounties)
    }

    pub async fn get(&self, scope: BountyScope) -> CatalogResult<Bounty> {
        self.repo
            .find_bounty(scope)
            .await?
            .ok_or(CatalogError::BountyNotFound {
                game_id: scope.game_id,
                bounty_id: scope.bounty_id,
            })
    }

    pub async fn create(&self, game_id: GameId, details: BountyDetails) -> CatalogResult<Bounty> {
        let bounty = Bounty::new(game_id, details);
        self.repo.insert_bounty(&bounty).await?;

        tracing::info!(game_id = %game_id, bounty_id = %bounty.id, "Bounty created");
        Ok(bounty)
    }

    pub async fn update(
        &self,
        scope: BountyScope,
        details: BountyDetails,
    ) -> CatalogResult<Bounty> {
        let bounty = self
            .repo
            .replace_bounty(scope, &details)
            .await?
            .ok_or(CatalogError::BountyNotFound {
                game_id: scope.game_id,
                bounty_id: scope.bounty_id,
            })?;

        tracing::info!(game_id = %scope.game_id, bounty_id = %scope.bounty_id, "Bounty updated");
        Ok(bounty)
    }

    pub async fn delete(&self, scope: BountyScope) -> CatalogResult<()> {
        if !self.repo.delete_bounty(scope).await? {
            return Err(CatalogError::BountyNotFound {
                game_id: scope.game_id,
                bounty_id: scope.bounty_id,
            });
        }
        tracing::info!(game_id = %scope.game_id, bounty_id = %scope.bounty_id, "Bounty deleted");
        Ok(())
    }
}
