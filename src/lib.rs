//! RugScan Library
//!
//! Rug pull risk auditor for verified Ethereum contracts:
//! - Fetches verified source from Etherscan (chain 1)
//! - Asks Gemini whether the owner can mint, freeze, pause, or drain
//! - Falls back across an ordered list of models before giving up
//! - Serves the verdict over `POST /audit`

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::{first_success, AuditOutcome, AuditService, RiskAnalyzer};
pub use models::{
    AppError, AppResult, AuditConfig, AuditVerdict, ContractQuery, ContractSource, ErrorCode,
    RiskLevel, ServerConfig,
};
pub use providers::{GeminiClient, SourceFetcher};
