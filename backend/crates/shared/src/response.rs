//! Response envelopes
//!
//! Every successful endpoint answers with [`ApiResponse`]; failures are
//! rendered as [`ErrorEnvelope`] by the `AppError` response conversion.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 成功レスポンスのエンベロープ
///
/// ```json
/// { "status": "success", "message": "...", "data": { ... }, "timestamp": "..." }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    /// `status: "success"` のエンベロープを作成
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }
}

/// エラーレスポンスのエンベロープ
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub status: &'static str,
    pub error_code: u16,
    pub title: &'a str,
    pub detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a str>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

/// 201 Created でエンベロープを返すためのラッパー
#[cfg(feature = "axum")]
pub struct Created<T>(pub ApiResponse<T>);

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success("Game retrieved successfully", vec![1, 2]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Game retrieved successfully");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_error_envelope_omits_missing_action() {
        let env = ErrorEnvelope {
            status: "error",
            error_code: 404,
            title: "Not Found",
            detail: "Game not found",
            action: None,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["error_code"], 404);
        assert!(json.get("action").is_none());
    }
}
