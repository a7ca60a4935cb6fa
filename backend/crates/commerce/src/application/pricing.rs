//! Get Price Use Case
//!
//! Prices a single line item against the catalog.

use std::sync::Arc;

use kernel::id::GameId;

use crate::domain::entities::PricedLine;
use crate::domain::repository::PriceCatalog;
use crate::domain::services::ALLOWED_QUANTITY;
use crate::error::{CommerceError, CommerceResult};

/// Line item as submitted; quantity is optional on the wire
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineInput {
    pub game_id: GameId,
    pub quantity: Option<i64>,
}

pub struct GetPriceUseCase<P>
where
    P: PriceCatalog,
{
    catalog: Arc<P>,
}

impl<P> GetPriceUseCase<P>
where
    P: PriceCatalog,
{
    pub fn new(catalog: Arc<P>) -> Self {
        Self { catalog }
    }

    /// Read-only; checks quantity, then existence, then price
    pub async fn execute(&self, line: LineInput) -> CommerceResult<PricedLine> {
        let quantity = line.quantity.ok_or(CommerceError::QuantityMissing)?;
        if quantity != ALLOWED_QUANTITY {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let listing = self
            .catalog
            .find_listing(line.game_id)
            .await?
            .ok_or(CommerceError::GameNotFound(line.game_id))?;

        let price = listing
            .price
            .ok_or(CommerceError::PriceMissing(line.game_id))?;

        Ok(PricedLine {
            game_id: line.game_id,
            quantity: 1,
            price,
        })
    }
}
