//! NFT Reward Use Cases

use std::sync::Arc;

use kernel::id::{BountyId, GameId};

use crate::domain::entities::{Nft, NftDetails, NftScope};
use crate::domain::repository::NftRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct NftUseCase<R>
where
    R: NftRepository,
{
    repo: Arc<R>,
}

fn not_found(scope: NftScope) -> CatalogError {
    CatalogError::NftNotFound {
        game_id: scope.game_id,
        bounty_id: scope.bounty_id,
        nft_id: scope.nft_id,
    }
}

impl<R> NftUseCase<R>
where
    R: NftRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, game_id: GameId, bounty_id: BountyId) -> CatalogResult<Vec<Nft>> {
        let nfts = self.repo.list_nfts(game_id, bounty_id).await?;
        if nfts.is_empty() {
            return Err(CatalogError::NoNfts);
        }
        Ok(nfts)
    }

    pub async fn get(&self, scope: NftScope) -> CatalogResult<Nft> {
        self.repo
            .find_nft(scope)
            .await?
            .ok_or_else(|| not_found(scope))
    }

    pub async fn create(
        &self,
        game_id: GameId,
        bounty_id: BountyId,
        details: NftDetails,
    ) -> CatalogResult<Nft> {
        let nft = Nft::new(game_id, bounty_id, details);
        self.repo.insert_nft(&nft).await?;

        tracing::info!(
            game_id = %game_id,
            bounty_id = %bounty_id,
            nft_id = %nft.id,
            "NFT reward created"
        );
        Ok(nft)
    }

    pub async fn update(&self, scope: NftScope, details: NftDetails) -> CatalogResult<Nft> {
        let nft = self
            .repo
            .replace_nft(scope, &details)
            .await?
            .ok_or_else(|| not_found(scope))?;

        tracing::info!(nft_id = %scope.nft_id, "NFT reward updated");
        Ok(nft)
    }

    pub async fn delete(&self, scope: NftScope) -> CatalogResult<()> {
        if !self.repo.delete_nft(scope).await? {
            return Err(not_found(scope));
        }
        tracing::info!(nft_id = %scope.nft_id, "NFT reward deleted");
        Ok(())
    }
}
