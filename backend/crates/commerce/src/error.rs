//! Commerce Error Types
//!
//! Order and purchase error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind};
use kernel::id::{GameId, OrderId, UserId};
use thiserror::Error;

/// Commerce-specific result type alias
pub type CommerceResult<T> = Result<T, CommerceError>;

fn join_ids(ids: &[GameId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum CommerceError {
    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------
    #[error("Quantity is missing.")]
    QuantityMissing,

    #[error("quantity can only be 1")]
    InvalidQuantity(i64),

    #[error("Game with ID {0} not found.")]
    GameNotFound(GameId),

    #[error("Price is missing for game with ID {0}.")]
    PriceMissing(GameId),

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------
    #[error("User with ID {0} not found.")]
    UserNotFound(UserId),

    #[error("The order contains no items.")]
    EmptyOrder,

    #[error(
        "You already own the following games: {}. Please remove them from your order.",
        join_ids(.0)
    )]
    AlreadyOwned(Vec<GameId>),

    #[error("The order contains duplicate games. Please review your order.")]
    DuplicateGamesInOrder,

    #[error("You already have an ongoing order for one or more of these games.")]
    OngoingOrder,

    // ------------------------------------------------------------------
    // Purchases
    // ------------------------------------------------------------------
    #[error("Order with ID {0} not found.")]
    OrderNotFound(OrderId),

    #[error("Order with ID {0} has already been completed.")]
    OrderAlreadyCompleted(OrderId),

    #[error("Transaction ID cannot be empty.")]
    EmptyTransactionId,

    #[error("Transaction ID {0} has already been verified.")]
    TransactionAlreadyVerified(String),

    #[error("Transaction ID {0} cannot be verified.")]
    TransactionNotVerified(String),

    #[error("An error occurred while storing the verified purchase.")]
    PurchaseStoreFailed(#[source] sqlx::Error),

    #[error("Failed to update games for user ID: {0}")]
    UserGamesUpdateFailed(UserId),

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------
    #[error("Invalid {label} ID: {raw}")]
    InvalidId { label: &'static str, raw: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommerceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommerceError::QuantityMissing
            | CommerceError::InvalidQuantity(_)
            | CommerceError::PriceMissing(_)
            | CommerceError::EmptyOrder
            | CommerceError::DuplicateGamesInOrder
            | CommerceError::EmptyTransactionId
            | CommerceError::TransactionNotVerified(_)
            | CommerceError::InvalidId { .. } => ErrorKind::BadRequest,
            CommerceError::GameNotFound(_)
            | CommerceError::UserNotFound(_)
            | CommerceError::OrderNotFound(_) => ErrorKind::NotFound,
            CommerceError::AlreadyOwned(_)
            | CommerceError::OngoingOrder
            | CommerceError::OrderAlreadyCompleted(_)
            | CommerceError::TransactionAlreadyVerified(_) => ErrorKind::Conflict,
            CommerceError::PurchaseStoreFailed(_)
            | CommerceError::UserGamesUpdateFailed(_)
            | CommerceError::Internal(_) => ErrorKind::InternalServerError,
            CommerceError::Database(e) => classify_sqlx_error(e).0,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            CommerceError::AlreadyOwned(_) | CommerceError::DuplicateGamesInOrder => {
                err.with_action("Remove the listed games and submit the order again")
            }
            CommerceError::OngoingOrder => {
                err.with_action("Complete or wait for the pending order first")
            }
            CommerceError::InvalidId { label, raw } => AppError::invalid_id(label, raw),
            CommerceError::Database(e) => AppError::new(self.kind(), classify_sqlx_error(e).1),
            CommerceError::Internal(_) => AppError::internal("Internal server error"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CommerceError::Database(e) | CommerceError::PurchaseStoreFailed(e) => {
                tracing::error!(error = %e, "Commerce database error");
            }
            CommerceError::UserGamesUpdateFailed(user_id) => {
                tracing::error!(user_id = %user_id, "User vanished during purchase");
            }
            CommerceError::Internal(msg) => {
                tracing::error!(message = %msg, "Commerce internal error");
            }
            CommerceError::TransactionAlreadyVerified(tx) => {
                tracing::warn!(transaction_id = %tx, "Transaction reuse attempted");
            }
            CommerceError::TransactionNotVerified(tx) => {
                tracing::warn!(transaction_id = %tx, "Transaction failed verification");
            }
            CommerceError::OrderAlreadyCompleted(order_id) => {
                tracing::warn!(order_id = %order_id, "Purchase attempted on completed order");
            }
            _ => {
                tracing::debug!(error = %self, "Commerce error");
            }
        }
    }
}

impl From<CommerceError> for AppError {
    fn from(err: CommerceError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for CommerceError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
