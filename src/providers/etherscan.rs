//! Etherscan API Client - Verified Source Lookup
//!
//! API: https://api.etherscan.io/v2/api?chainid=1&module=contract&action=getsourcecode
//!
//! Only the contract name and raw source text are used. Any failure
//! (network, bad JSON, non-success status, empty source) means "not found"
//! to the caller; the cause is only logged.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::ContractSource;
use crate::utils::constants::{CHAIN_ID_ETHEREUM, EXPLORER_STATUS_OK};

/// Etherscan `getsourcecode` response
#[derive(Debug, Deserialize)]
pub struct ExplorerResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Entries on success, an error string otherwise
    pub result: ExplorerResult,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExplorerResult {
    Entries(Vec<SourceEntry>),
    Message(String),
}

/// One entry of `result`
#[derive(Debug, Clone, Deserialize)]
pub struct SourceEntry {
    #[serde(rename = "ContractName", default)]
    pub contract_name: String,
    #[serde(rename = "SourceCode", default)]
    pub source_code: String,
}

impl ExplorerResponse {
    /// Name and source of the first entry, if the lookup succeeded and the
    /// source is non-empty
    pub fn into_source(self) -> Option<ContractSource> {
        if self.status != EXPLORER_STATUS_OK {
            return None;
        }
        match self.result {
            ExplorerResult::Entries(entries) => entries
                .into_iter()
                .next()
                .filter(|e| !e.source_code.is_empty())
                .map(|e| ContractSource {
                    name: e.contract_name,
                    code: e.source_code,
                }),
            ExplorerResult::Message(_) => None,
        }
    }

    /// Upstream explanation for a failed lookup (for logs)
    pub fn reason(&self) -> &str {
        match &self.result {
            ExplorerResult::Message(msg) => msg,
            ExplorerResult::Entries(_) => self.message.as_deref().unwrap_or("no source"),
        }
    }
}

/// Fetches verified contract source from the block explorer
#[derive(Clone)]
pub struct SourceFetcher {
    client: reqwest::Client,
    url: String,
    api_key: String,
    timeout: Duration,
}

impl SourceFetcher {
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Look up verified source; `None` on any failure
    pub async fn fetch(&self, address: &str) -> Option<ContractSource> {
        match self.try_fetch(address).await {
            Ok(source) => {
                info!(
                    "📄 Etherscan: {} ({} chars) for {}",
                    source.name,
                    source.code.chars().count(),
                    address
                );
                Some(source)
            }
            Err(e) if e.code == ErrorCode::ContractNotVerified => {
                info!("📭 Etherscan: {}", e);
                None
            }
            Err(e) => {
                warn!("⚠️ Etherscan lookup failed for {}: {}", address, e);
                None
            }
        }
    }

    /// Single GET, no retries
    pub async fn try_fetch(&self, address: &str) -> AppResult<ContractSource> {
        debug!("🔍 Etherscan: getsourcecode {}", address);

        let chain_id = CHAIN_ID_ETHEREUM.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("chainid", chain_id.as_str()),
                ("module", "contract"),
                ("action", "getsourcecode"),
                ("address", address),
                ("apikey", self.api_key.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| explorer_error(e.into()))?;

        let body = response
            .text()
            .await
            .map_err(|e| explorer_error(e.into()))?;

        let parsed: ExplorerResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::with_source(
                ErrorCode::ExplorerUnavailable,
                "Failed to parse Etherscan response",
                e,
            )
        })?;

        if parsed.status != EXPLORER_STATUS_OK {
            debug!("Etherscan status {}: {}", parsed.status, parsed.reason());
        }

        parsed
            .into_source()
            .ok_or_else(|| AppError::contract_not_verified(address))
    }
}

/// Keep timeouts distinct, everything else is "explorer unavailable"
fn explorer_error(err: AppError) -> AppError {
    if err.code == ErrorCode::ExternalTimeout {
        err
    } else {
        err.recode(ErrorCode::ExplorerUnavailable)
    }
}
