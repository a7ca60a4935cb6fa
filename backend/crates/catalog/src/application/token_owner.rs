//! Token Owner Lookup Use Case

use std::sync::Arc;

use crate::domain::repository::TokenOwnerLookup;
use crate::error::{CatalogError, CatalogResult};

pub struct TokenOwnerUseCase<O>
where
    O: TokenOwnerLookup,
{
    owners: Arc<O>,
}

impl<O> TokenOwnerUseCase<O>
where
    O: TokenOwnerLookup,
{
    pub fn new(owners: Arc<O>) -> Self {
        Self { owners }
    }

    /// Token ids are decimal `uint256` values that fit in 128 bits
    pub async fn execute(&self, raw_token_id: &str) -> CatalogResult<String> {
        let token_id: u128 = raw_token_id
            .trim()
            .parse()
            .map_err(|_| CatalogError::InvalidTokenId(raw_token_id.to_string()))?;

        self.owners.owner_of(token_id).await
    }
}
