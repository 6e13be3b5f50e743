//! API Request/Response Types

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::service::AuditOutcome;
use crate::utils::constants::{ERROR_CODE_HEADER, MESSAGE_CONTRACT_NOT_FOUND};

/// Fixed-shape error payload (`{"error": "..."}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn not_found() -> Self {
        Self {
            error: MESSAGE_CONTRACT_NOT_FOUND.to_string(),
        }
    }
}

/// Verdicts are 200, missing source is 404.
/// Failures also set `x-error-code`.
impl IntoResponse for AuditOutcome {
    fn into_response(self) -> Response {
        let code = self.error_code();

        let mut response = match self.verdict() {
            Some(verdict) => (StatusCode::OK, Json(verdict)).into_response(),
            None => (StatusCode::NOT_FOUND, Json(ErrorBody::not_found())).into_response(),
        };

        if let Some(code) = code {
            response
                .headers_mut()
                .insert(ERROR_CODE_HEADER, HeaderValue::from_static(code.as_str()));
        }
        response
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    /// Whether both API credentials are present
    pub configured: bool,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}
