//! Error conversions - HTTP responder for [`AppError`]
//!
//! Every domain error reaches the client through this one `IntoResponse`.

use super::app_error::AppError;

/// 5xx 応答で返す固定メッセージ（内部情報は漏らさない）
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

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

        // { "message": ..., "errors": [...] }
        let mut body = serde_json::json!({ "message": self.message() });
        if let Some(details) = self.details() {
            body["errors"] = details.clone();
        }

        (status, Json(body)).into_response()
    }
}
