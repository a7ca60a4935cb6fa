//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{GameId, OrderId, UserId, VerifiedPurchaseId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Order, OrderStatus, PricedLine, VerifiedPurchase};

// ============================================================================
// Pricing
// ============================================================================

/// Line item as submitted; ids are parsed by the handler
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRequest {
    pub game_id: String,
    #[serde(default)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    pub game_id: GameId,
    pub quantity: u32,
    pub price: f64,
}

impl From<PricedLine> for PriceResponse {
    fn from(line: PricedLine) -> Self {
        PriceResponse {
            game_id: line.game_id,
            quantity: line.quantity,
            price: line.price,
        }
    }
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: String,
    #[serde(rename = "OrderItemCollection", default)]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderItemDto {
    pub game_id: GameId,
    pub quantity: u32,
    pub price: f64,
}

impl From<PricedLine> for OrderItemDto {
    fn from(line: PricedLine) -> Self {
        OrderItemDto {
            game_id: line.game_id,
            quantity: line.quantity,
            price: line.price,
        }
    }
}

/// Order as returned by order creation and embedded in purchase receipts
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub order_id: OrderId,
    pub user_id: UserId,
    #[serde(rename = "OrderItemCollection")]
    pub items: Vec<OrderItemDto>,
    pub total_quantity: u32,
    pub total_price: f64,
    pub status: OrderStatus,
    pub transaction: Option<String>,
    pub created_time: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            order_id: order.id,
            user_id: order.user_id,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            total_quantity: order.total_quantity,
            total_price: order.total_price,
            status: order.status,
            transaction: order.transaction,
            created_time: order.created_time,
        }
    }
}

// ============================================================================
// Purchases
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequest {
    pub user_id: String,
    pub order_id: String,
    /// Older clients send the transaction reference as `wallet_id`
    #[serde(alias = "wallet_id")]
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifiedPurchaseResponse {
    pub verifiedpurchase_id: VerifiedPurchaseId,
    pub order_data: OrderResponse,
    pub purchase_time: DateTime<Utc>,
    pub verification_status: String,
    pub verification_method: String,
    pub verified_by: String,
    pub verified_time: DateTime<Utc>,
}

impl From<VerifiedPurchase> for VerifiedPurchaseResponse {
    fn from(purchase: VerifiedPurchase) -> Self {
        let VerifiedPurchase {
            verification,
            order,
        } = purchase;
        VerifiedPurchaseResponse {
            verifiedpurchase_id: verification.id,
            order_data: order.into(),
            purchase_time: verification.purchase_time,
            verification_status: verification.status,
            verification_method: verification.method,
            verified_by: verification.verified_by,
            verified_time: verification.verified_time,
        }
    }
}
