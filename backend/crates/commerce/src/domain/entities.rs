//! Domain Entities
//!
//! Orders, their line items, and the audit record written when an order is paid.

use chrono::{DateTime, Utc};
use kernel::id::{GameId, OrderId, UserId, VerifiedPurchaseId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::services;

/// Order lifecycle; only `Completed` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Open orders block new orders for the same games
    pub fn is_open(&self) -> bool {
        !matches!(self, OrderStatus::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Processing" => Ok(OrderStatus::Processing),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status '{other}'")),
        }
    }
}

/// Line item after pricing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    pub game_id: GameId,
    pub quantity: u32,
    pub price: f64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<PricedLine>,
    pub total_quantity: u32,
    pub total_price: f64,
    pub status: OrderStatus,
    /// Set once the order is paid
    pub transaction: Option<String>,
    pub created_time: DateTime<Utc>,
}

impl Order {
    /// New pending order with totals summed from the priced lines
    pub fn pending(user_id: UserId, items: Vec<PricedLine>) -> Self {
        Self {
            id: OrderId::new(),
            user_id,
            total_quantity: services::total_quantity(&items),
            total_price: services::total_price(&items),
            items,
            status: OrderStatus::Pending,
            transaction: None,
            created_time: Utc::now(),
        }
    }

    pub fn game_ids(&self) -> Vec<GameId> {
        self.items.iter().map(|i| i.game_id).collect()
    }
}

/// Buyer as seen by the order workflow
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: UserId,
    /// Owned games, set semantics
    pub games: Vec<GameId>,
}

/// Game price as listed in the catalog; a listed game may have no price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListedGame {
    pub game_id: GameId,
    pub price: Option<f64>,
}

/// Verification fields decided before the purchase is committed
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub id: VerifiedPurchaseId,
    pub transaction_id: String,
    pub purchase_time: DateTime<Utc>,
    pub status: String,
    pub method: String,
    pub verified_by: String,
    pub verified_time: DateTime<Utc>,
}

/// Append-only audit record of a paid order
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedPurchase {
    pub verification: Verification,
    /// Order as it stood right after completion
    pub order: Order,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_order_totals() {
        let items = vec![
            PricedLine {
                game_id: GameId::new(),
                quantity: 1,
                price: 9.99,
            },
            PricedLine {
                game_id: GameId::new(),
                quantity: 1,
                price: 20.0,
            },
        ];
        let order = Order::pending(UserId::new(), items);

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_quantity, 2);
        assert!((order.total_price - 29.99).abs() < 1e-9);
        assert!(order.transaction.is_none());
        assert_eq!(order.game_ids().len(), 2);
    }

    #[test]
    fn test_status_round_trip_and_openness() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!(OrderStatus::Pending.is_open());
        assert!(OrderStatus::Processing.is_open());
        assert!(!OrderStatus::Completed.is_open());
        assert!("Shipped".parse::<OrderStatus>().is_err());
    }
}
