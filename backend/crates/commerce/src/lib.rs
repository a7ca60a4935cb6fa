//! Commerce Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Orders, verified purchases, repository and verifier traits
//! - `application/` - Pricing, order creation, purchase workflow
//! - `infra/` - PostgreSQL repository, transaction verifiers
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Purchase workflow
//! A pending order is completed once: the order status flip, the audit
//! record, and the owned-games update commit in a single transaction.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CommerceConfig;
pub use error::{CommerceError, CommerceResult};
pub use infra::postgres::PgCommerceRepository;
pub use infra::verifier::{ConfiguredVerifier, VerificationMode};
pub use presentation::router::{commerce_router, commerce_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
