//! Repository Traits
//!
//! Interfaces for data persistence and transaction verification.
//! Implementations are in the infrastructure layer.

use kernel::id::{GameId, OrderId, UserId};

use crate::domain::entities::{Customer, ListedGame, Order, Verification, VerifiedPurchase};
use crate::error::CommerceResult;

/// Read access to catalog prices
#[trait_variant::make(PriceCatalog: Send)]
pub trait LocalPriceCatalog {
    /// `None` when the game does not exist
    async fn find_listing(&self, game_id: GameId) -> CommerceResult<Option<ListedGame>>;
}

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    async fn find_customer(&self, user_id: UserId) -> CommerceResult<Option<Customer>>;

    /// Whether any Pending/Processing order of the user contains one of `games`
    async fn has_open_order_for(&self, user_id: UserId, games: &[GameId]) -> CommerceResult<bool>;

    /// Persist a pending order atomically
    ///
    /// Locks the customer row, re-checks open orders, then inserts the order
    /// and its lines. Fails with `OngoingOrder` when another order won the race.
    async fn insert_pending_order(&self, order: &Order) -> CommerceResult<()>;

    async fn find_order(&self, order_id: OrderId) -> CommerceResult<Option<Order>>;
}

/// Purchase repository trait
#[trait_variant::make(PurchaseRepository: Send)]
pub trait LocalPurchaseRepository {
    /// Whether the transaction reference appears in any verified purchase
    async fn transaction_verified(&self, transaction_id: &str) -> CommerceResult<bool>;

    /// Commit a purchase in one transaction
    ///
    /// 1. Compare-and-swap the order to Completed with the transaction attached
    /// 2. Close its lines
    /// 3. Re-read the completed order as the audit snapshot
    /// 4. Insert the verified purchase
    /// 5. Union the order's games into the customer's owned games
    ///
    /// Nothing persists if any step fails.
    async fn complete_purchase(
        &self,
        user_id: UserId,
        order_id: OrderId,
        verification: &Verification,
    ) -> CommerceResult<VerifiedPurchase>;
}

/// Decides whether a payment transaction is genuine
#[trait_variant::make(TransactionVerifier: Send)]
pub trait LocalTransactionVerifier {
    /// `false` rejects the purchase; there is no retry
    async fn verify(&self, transaction_id: &str) -> bool;
}
