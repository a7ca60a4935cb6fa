//! Domain Layer
//!
//! Entities, pure services, and repository traits.

pub mod entities;
pub mod repository;
pub mod services;

// Re-exports
pub use entities::{Customer, ListedGame, Order, OrderStatus, PricedLine, VerifiedPurchase};
pub use repository::{OrderRepository, PriceCatalog, PurchaseRepository, TransactionVerifier};
