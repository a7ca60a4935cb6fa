//! Commerce Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::CommerceConfig;
use crate::domain::repository::{
    OrderRepository, PriceCatalog, PurchaseRepository, TransactionVerifier,
};
use crate::infra::postgres::PgCommerceRepository;
use crate::infra::verifier::ConfiguredVerifier;
use crate::presentation::handlers::{self, CommerceAppState};

/// Create the Commerce router with PostgreSQL repository
pub fn commerce_router(
    repo: PgCommerceRepository,
    verifier: ConfiguredVerifier,
    config: CommerceConfig,
) -> Router {
    commerce_router_generic(repo, verifier, config)
}

/// Create a generic Commerce router for any repository and verifier
pub fn commerce_router_generic<R, V>(repo: R, verifier: V, config: CommerceConfig) -> Router
where
    R: PriceCatalog + OrderRepository + PurchaseRepository + Clone + Send + Sync + 'static,
    V: TransactionVerifier + Clone + Send + Sync + 'static,
{
    let state = CommerceAppState {
        repo: Arc::new(repo),
        verifier: Arc::new(verifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/orderitem/items/price", post(handlers::get_price::<R, V>))
        .route("/orderitem/create", post(handlers::create_order::<R, V>))
        .route("/purchases", post(handlers::purchase::<R, V>))
        .with_state(state)
}
