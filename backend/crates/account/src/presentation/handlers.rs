//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use kernel::id::UserId;
use kernel::response::{ApiResponse, Created};
use std::sync::Arc;

use platform::crypto::from_base64;

use crate::application::config::AccountConfig;
use crate::application::{
    ListUsersUseCase, LoginInput, LoginUseCase, OwnedNftsUseCase, PurchasedGamesUseCase,
    RegisterInput, RegisterUseCase,
};
use crate::domain::entity::OwnedNft;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{PurchasedGameResponse, RegisterRequest, UserResponse};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

fn parse_user_id(raw: &str) -> AccountResult<UserId> {
    UserId::parse(raw).map_err(|_| AccountError::InvalidId(raw.to_string()))
}

/// Decode `Authorization: Basic base64(username:password)`
pub fn basic_credentials(headers: &HeaderMap) -> AccountResult<(String, String)> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AccountError::MissingCredentials)?;

    let (scheme, encoded) = value
        .trim()
        .split_once(' ')
        .ok_or(AccountError::MissingCredentials)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AccountError::MissingCredentials);
    }

    let decoded = from_base64(encoded.trim()).map_err(|_| AccountError::MissingCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AccountError::MissingCredentials)?;

    // The password may itself contain ':'
    let (username, password) = decoded
        .split_once(':')
        .ok_or(AccountError::MissingCredentials)?;

    Ok((username.to_string(), password.to_string()))
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /users/register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<Created<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let user = use_case.execute(input).await?;

    Ok(Created(ApiResponse::success(
        "successfully register an account",
        UserResponse::from(user),
    )))
}

/// GET /users/login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<ApiResponse<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = basic_credentials(&headers)?;

    let user = LoginUseCase::new(state.repo.clone(), state.config.clone())
        .execute(LoginInput { username, password })
        .await?;

    Ok(ApiResponse::success(
        "Login successfully",
        UserResponse::from(user),
    ))
}

// ============================================================================
// Profiles
// ============================================================================

/// GET /users
pub async fn list_users<R>(
    State(state): State<AccountAppState<R>>,
) -> AccountResult<ApiResponse<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = ListUsersUseCase::new(state.repo.clone()).execute().await?;

    Ok(ApiResponse::success(
        "Users retrieved successfully",
        users.into_iter().map(UserResponse::from).collect(),
    ))
}

/// GET /users/{user_id}/purchases
pub async fn purchased_games<R>(
    State(state): State<AccountAppState<R>>,
    Path(user_id): Path<String>,
) -> AccountResult<ApiResponse<Vec<PurchasedGameResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(&user_id)?;
    let games = PurchasedGamesUseCase::new(state.repo.clone())
        .execute(user_id)
        .await?;

    Ok(ApiResponse::success(
        "Purchased games retrieved successfully",
        games.into_iter().map(PurchasedGameResponse::from).collect(),
    ))
}

/// GET /users/{user_id}/nfts
pub async fn owned_nfts<R>(
    State(state): State<AccountAppState<R>>,
    Path(user_id): Path<String>,
) -> AccountResult<ApiResponse<Vec<OwnedNft>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(&user_id)?;
    let nfts = OwnedNftsUseCase::new(state.repo.clone())
        .execute(user_id)
        .await?;

    Ok(ApiResponse::success("Owned NFTs retrieved successfully", nfts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use platform::crypto::to_base64;

    fn with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_basic_credentials_decoding() {
        let headers = with_auth(&format!("Basic {}", to_base64(b"neo:pass:word")));
        let (user, pass) = basic_credentials(&headers).unwrap();
        assert_eq!(user, "neo");
        assert_eq!(pass, "pass:word");
    }

    #[test]
    fn test_basic_credentials_rejects_malformed() {
        assert!(matches!(
            basic_credentials(&HeaderMap::new()),
            Err(AccountError::MissingCredentials)
        ));
        assert!(basic_credentials(&with_auth("Bearer abc")).is_err());
        assert!(basic_credentials(&with_auth("Basic !!!")).is_err());
        assert!(basic_credentials(&with_auth(&format!("Basic {}", to_base64(b"no-colon")))).is_err());
    }
}
