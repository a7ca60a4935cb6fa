//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_order;
pub mod pricing;
pub mod purchase;

// Re-exports
pub use config::CommerceConfig;
pub use create_order::CreateOrderUseCase;
pub use pricing::{GetPriceUseCase, LineInput};
pub use purchase::{PurchaseInput, PurchaseUseCase};
