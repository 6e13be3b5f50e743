//! API Request Handlers

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::types::HealthData;
use crate::core::service::AuditService;
use crate::models::types::ContractQuery;

/// Shared application state
pub struct AppState {
    pub service: AuditService,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(service: AuditService) -> Self {
        Self {
            service,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    Json(HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        configured: state.service.is_configured(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

// ============================================
// Contract Audit
// ============================================

/// `POST /audit`
///
/// The body is decoded leniently: an unreadable body is treated as a
/// request without an address, so responses stay within 200/404.
pub async fn audit_contract(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let query: ContractQuery = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!("Unreadable audit body: {}", e);
        ContractQuery::default()
    });

    state.service.audit(&query).await.into_response()
}
