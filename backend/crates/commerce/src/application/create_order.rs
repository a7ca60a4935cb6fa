//! Create Order Use Case
//!
//! Validates a basket against ownership and in-flight orders, prices it, and
//! stores it as a pending order.

use std::sync::Arc;

use kernel::id::{GameId, UserId};

use crate::application::pricing::{GetPriceUseCase, LineInput};
use crate::domain::entities::Order;
use crate::domain::repository::{OrderRepository, PriceCatalog};
use crate::domain::services;
use crate::error::{CommerceError, CommerceResult};

pub struct CreateOrderUseCase<R>
where
    R: PriceCatalog + OrderRepository,
{
    repo: Arc<R>,
}

impl<R> CreateOrderUseCase<R>
where
    R: PriceCatalog + OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Each check fails fast, in this order:
    /// user exists, nothing already owned, no repeats, nothing in flight.
    pub async fn execute(&self, user_id: UserId, lines: Vec<LineInput>) -> CommerceResult<Order> {
        if lines.is_empty() {
            return Err(CommerceError::EmptyOrder);
        }

        let customer = self
            .repo
            .find_customer(user_id)
            .await?
            .ok_or(CommerceError::UserNotFound(user_id))?;

        let requested: Vec<GameId> = lines.iter().map(|l| l.game_id).collect();

        let owned = services::already_owned(&customer.games, &requested);
        if !owned.is_empty() {
            return Err(CommerceError::AlreadyOwned(owned));
        }

        if services::has_duplicates(&requested) {
            return Err(CommerceError::DuplicateGamesInOrder);
        }

        if self.repo.has_open_order_for(user_id, &requested).await? {
            return Err(CommerceError::OngoingOrder);
        }

        let pricing = GetPriceUseCase::new(self.repo.clone());
        let mut priced = Vec::with_capacity(lines.len());
        for line in lines {
            priced.push(pricing.execute(line).await?);
        }

        let order = Order::pending(user_id, priced);
        self.repo.insert_pending_order(&order).await?;

        tracing::info!(
            order_id = %order.id,
            user_id = %user_id,
            items = order.items.len(),
            total_price = order.total_price,
            "Pending order created"
        );

        Ok(order)
    }
}
