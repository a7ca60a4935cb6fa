//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind};
use kernel::id::UserId;
use thiserror::Error;

use crate::domain::value_object::{email::EmailError, user_name::UserNameError};

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("This email is already registered.")]
    EmailTaken,

    #[error("This username is already registered.")]
    UsernameTaken,

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    InvalidUsername(#[from] UserNameError),

    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Authorization header absent or not `Basic base64(user:pass)`
    #[error("Missing or malformed Basic credentials")]
    MissingCredentials,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("User with ID {0} not found.")]
    UserNotFound(UserId),

    #[error("No users found in the database.")]
    NoUsers,

    #[error("Invalid user ID: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::EmailTaken | AccountError::UsernameTaken => ErrorKind::Conflict,
            AccountError::InvalidEmail(_)
            | AccountError::InvalidUsername(_)
            | AccountError::PasswordValidation(_)
            | AccountError::InvalidId(_) => ErrorKind::BadRequest,
            AccountError::MissingCredentials | AccountError::InvalidCredentials => {
                ErrorKind::Unauthorized
            }
            AccountError::AccountDisabled => ErrorKind::Forbidden,
            AccountError::UserNotFound(_) | AccountError::NoUsers => ErrorKind::NotFound,
            AccountError::Database(e) => classify_sqlx_error(e).0,
            AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AccountError::EmailTaken => err.with_action("Sign in or use a different email"),
            AccountError::UsernameTaken => err.with_action("Choose a different username"),
            AccountError::MissingCredentials => {
                err.with_action("Send an Authorization: Basic header")
            }
            AccountError::InvalidId(raw) => AppError::invalid_id("user", raw),
            AccountError::Database(e) => AppError::new(self.kind(), classify_sqlx_error(e).1),
            AccountError::Internal(_) => AppError::internal("Internal server error"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::AccountDisabled => {
                tracing::warn!("Login attempt on disabled account");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
