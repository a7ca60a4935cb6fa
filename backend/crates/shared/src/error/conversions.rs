//! Error conversions - From implementations for common error types
//!
//! Classifies `sqlx` failures for the domain error enums and renders
//! [`AppError`] as the HTTP error envelope.

#[cfg(feature = "axum")]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// `sqlx::Error` を分類し、エラー種別とクライアント向けメッセージを返す
///
/// ドメインクレートのエラー enum が `sqlx::Error` を保持したまま
/// HTTP ステータスを決めるために使います。
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Database(db_err) => {
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            match db_err.code().as_deref() {
                Some("23505") => (ErrorKind::Conflict, "Duplicate key value"),
                Some("23503") => (ErrorKind::Conflict, "Referenced record does not exist"),
                Some("23502") => (ErrorKind::BadRequest, "Required field is null"),
                Some("23514") => (ErrorKind::BadRequest, "Check constraint violation"),
                Some("40001" | "40P01") => (
                    ErrorKind::Conflict,
                    "Concurrent update detected, retry the request",
                ),
                Some("53000" | "53100" | "53200" | "53300") => {
                    (ErrorKind::ServiceUnavailable, "Database resource exhausted")
                }
                Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                    (ErrorKind::ServiceUnavailable, "Database unavailable")
                }
                _ => (ErrorKind::InternalServerError, "Database error"),
            }
        }
        sqlx::Error::Io(_) | sqlx::Error::PoolClosed => {
            (ErrorKind::ServiceUnavailable, "Database connection error")
        }
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

/// `sqlx::Error` が一意制約違反（23505）かどうか
///
/// リポジトリ実装が制約違反をドメインエラーへ読み替えるために使います。
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

/// 一意制約違反を起こした制約名
#[cfg(feature = "sqlx")]
pub fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = crate::response::ErrorEnvelope {
            status: "error",
            error_code: self.status_code(),
            title: self.kind().as_str(),
            detail: self.message(),
            action: self.action(),
            timestamp: chrono::Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}
