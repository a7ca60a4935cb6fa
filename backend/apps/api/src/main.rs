//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::sync::Arc;

use account::{AccountConfig, PgAccountRepository, account_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use catalog::{PgCatalogRepository, TronOwnerLookup, catalog_router};
use commerce::{CommerceConfig, ConfiguredVerifier, PgCommerceRepository, commerce_router};
use platform::tron::TronClient;
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// GET /
async fn root() -> Json<Value> {
    Json(json!({
        "details": "This is the root of the marketplace API. Endpoints are served under /v1."
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,catalog=info,account=info,commerce=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Tron full-node client, shared by ownership lookups and verification
    let tron = Arc::new(TronClient::new(config.tron.clone())?);
    if config.nft_contract_address.is_none() {
        tracing::warn!("NFT_CONTRACT_ADDRESS is not set; ownership lookups will fail");
    }
    tracing::info!(
        tron_api = %config.tron.base_url,
        verification = ?config.verification,
        "Tron client ready"
    );

    let owners = TronOwnerLookup::new(tron.clone(), config.nft_contract_address.clone());
    let verifier = ConfiguredVerifier::from_mode(config.verification, tron);
    let account_config = AccountConfig::with_pepper(config.password_pepper.as_deref());

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let v1 = Router::new()
        .merge(catalog_router(PgCatalogRepository::new(pool.clone()), owners))
        .merge(account_router(
            PgAccountRepository::new(pool.clone()),
            account_config,
        ))
        .merge(commerce_router(
            PgCommerceRepository::new(pool.clone()),
            verifier,
            CommerceConfig::default(),
        ));

    let app = Router::new()
        .route("/", get(root))
        .nest("/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_points_at_versioned_routes() {
        let Json(body) = root().await;
        let details = body["details"].as_str().unwrap();
        assert!(details.contains("/v1"));
        assert!(!details.contains("/docs"));
    }
}
