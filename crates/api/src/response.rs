//! Shared response envelope types for API handlers.
//!
//! Every API response uses the `{ success, data?, total?, error? }` envelope.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` bodies to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Successful response envelope: `{ "success": true, "data": T, "total"?: n }`.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::paginated(parfums, total)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    /// Total matches ignoring pagination; only set by listing endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            total: None,
        }
    }

    pub fn paginated(data: T, total: i64) -> Self {
        Self {
            success: true,
            data,
            total: Some(total),
        }
    }
}

/// Failure envelope: `{ "success": false, "error": "...", "code": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    /// Machine-readable error code (`NOT_FOUND`, `BAD_REQUEST`, ...).
    pub code: &'static str,
}

impl ErrorResponse {
    pub fn new(code: &'static str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code,
        }
    }
}
