//! Account Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the Account router with PostgreSQL repository
pub fn account_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create a generic Account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/users", get(handlers::list_users::<R>))
        .route("/users/register", post(handlers::register::<R>))
        .route("/users/login", get(handlers::login::<R>))
        .route("/users/{user_id}/purchases", get(handlers::purchased_games::<R>))
        .route("/users/{user_id}/nfts", get(handlers::owned_nfts::<R>))
        .with_state(state)
}
