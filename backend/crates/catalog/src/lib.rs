//! Catalog Backend Module
//!
//! Games, the bounties published for them, and the NFT rewards attached to
//! bounties. Also exposes the read-only on-chain ownership lookup for reward
//! tokens.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository and Tron lookup
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use infra::tron::TronOwnerLookup;
pub use presentation::router::{catalog_router, catalog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}
