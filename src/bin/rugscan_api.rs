//! RugScan API Server
//!
//! Rug pull risk audit for verified Ethereum contracts
//!
//! Usage:
//!   cargo run --bin rugscan_api
//!
//! Environment:
//!   ETHERSCAN_API_KEY - Etherscan API key (required for /audit)
//!   GEMINI_API_KEY    - Gemini API key (required for /audit)
//!   GEMINI_MODELS     - Comma-separated model candidates (optional)
//!   PORT / RUGSCAN_PORT - Server port (default: 5000)
//!   RUGSCAN_HOST      - Server host (default: 0.0.0.0)
//!   RUST_LOG          - Log level (default: info)

use rugscan::api::{create_router, AppState};
use rugscan::utils::constants::{APP_NAME, APP_VERSION};
use rugscan::utils::telemetry::init_tracing;
use rugscan::{AuditConfig, AuditService, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    info!("🛡️ {} v{}", APP_NAME, APP_VERSION);

    let audit_config = AuditConfig::from_env();
    let server_config = ServerConfig::from_env();

    let service = AuditService::from_config(&audit_config)?;
    if !service.is_configured() {
        warn!("⚠️ Running without credentials: /audit will answer with a misconfiguration verdict");
    }

    let state = Arc::new(AppState::new(service));
    let app = create_router(state);

    let addr = server_config.socket_addr()?;

    info!("🚀 {} API starting on http://{}", APP_NAME, addr);
    info!("Endpoints:");
    info!("  POST /audit   - Rug pull risk audit ({{\"address\": \"0x...\"}})");
    info!("  GET  /health  - Health check");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("⚠️ Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("👋 {} API shutdown complete", APP_NAME);

    Ok(())
}
