//! Providers Module - External Data Sources
//!
//! Etherscan for verified source, Gemini for the risk classification.

pub mod etherscan;
pub mod gemini;

pub use etherscan::*;
pub use gemini::*;

use crate::models::errors::AppResult;
use crate::utils::constants::USER_AGENT;

/// Shared outbound HTTP client (gzip, User-Agent)
///
/// Timeouts are set per request by each provider.
pub fn build_http_client() -> AppResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()?)
}
