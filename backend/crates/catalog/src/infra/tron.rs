//! Tron ownership lookup

use std::sync::Arc;

use platform::tron::{TronClient, TronError};

use crate::domain::repository::TokenOwnerLookup;
use crate::error::{CatalogError, CatalogResult};

/// `ownerOf` against the configured TRC-721 contract
#[derive(Clone)]
pub struct TronOwnerLookup {
    client: Arc<TronClient>,
    contract_address: Option<String>,
}

impl TronOwnerLookup {
    pub fn new(client: Arc<TronClient>, contract_address: Option<String>) -> Self {
        Self {
            client,
            contract_address,
        }
    }
}

impl TokenOwnerLookup for TronOwnerLookup {
    async fn owner_of(&self, token_id: u128) -> CatalogResult<String> {
        let contract = self
            .contract_address
            .as_deref()
            .ok_or(CatalogError::ContractNotConfigured)?;

        match self.client.owner_of(contract, token_id).await {
            Ok(owner) => {
                tracing::debug!(token_id = %token_id, owner = %owner, "Resolved token owner");
                Ok(owner)
            }
            Err(e) => {
                match &e {
                    TronError::Http(_) | TronError::Status(_) | TronError::MalformedResponse(_) => {
                        tracing::warn!(token_id = %token_id, error = %e, "Tron node call failed");
                    }
                    _ => tracing::debug!(token_id = %token_id, error = %e, "Token has no owner"),
                }
                Err(CatalogError::TokenOwnerNotFound(token_id.to_string()))
            }
        }
    }
}
