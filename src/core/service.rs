//! Audit Service - request pipeline
//!
//! Received → ConfigChecked → SourceFetched → Analyzed → Responded.
//! Linear, no retries at this layer. Every path ends in an [`AuditOutcome`];
//! nothing escapes as an error.

use tracing::{info, warn};

use crate::core::analyzer::RiskAnalyzer;
use crate::models::config::AuditConfig;
use crate::models::errors::{AppResult, ErrorCode};
use crate::models::types::{AuditVerdict, ContractQuery};
use crate::providers::{build_http_client, GeminiClient, SourceFetcher};

/// Terminal state of one audit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// A model produced a verdict
    Completed(AuditVerdict),
    /// A required credential is missing
    Misconfigured,
    /// No address, or no verified source for it
    NotFound,
    /// Every model candidate failed
    AiUnavailable,
}

impl AuditOutcome {
    /// Verdict body, if this outcome carries one
    pub fn verdict(&self) -> Option<AuditVerdict> {
        match self {
            Self::Completed(verdict) => Some(verdict.clone()),
            Self::Misconfigured => Some(AuditVerdict::misconfigured()),
            Self::AiUnavailable => Some(AuditVerdict::ai_unavailable()),
            Self::NotFound => None,
        }
    }

    /// Machine-readable failure class, `None` on success
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Completed(_) => None,
            Self::Misconfigured => Some(ErrorCode::ConfigMissingApiKey),
            Self::NotFound => Some(ErrorCode::ContractNotVerified),
            Self::AiUnavailable => Some(ErrorCode::AllModelsExhausted),
        }
    }
}

struct Pipeline {
    fetcher: SourceFetcher,
    analyzer: RiskAnalyzer,
}

/// Fetch-then-analyze pipeline behind `POST /audit`
pub struct AuditService {
    pipeline: Option<Pipeline>,
}

impl AuditService {
    /// Wire the pipeline from config
    ///
    /// Missing credentials leave the service unconfigured rather than
    /// failing; only an HTTP client build error is returned.
    pub fn from_config(config: &AuditConfig) -> AppResult<Self> {
        let (explorer_key, gemini_key) = match config.credentials() {
            Ok(keys) => keys,
            Err(e) => {
                warn!("⚠️ Audit pipeline disabled: {}", e);
                return Ok(Self::unconfigured());
            }
        };

        let client = build_http_client()?;
        let fetcher = SourceFetcher::new(
            client.clone(),
            &config.explorer_url,
            explorer_key,
            config.explorer_timeout,
        );
        let gemini = GeminiClient::new(
            client,
            &config.gemini_base_url,
            gemini_key,
            config.model_timeout,
        );
        let analyzer = RiskAnalyzer::new(gemini, config.model_candidates.clone());

        info!(
            "🧠 Audit pipeline ready ({} model candidates: {})",
            analyzer.candidates().len(),
            analyzer.candidates().join(", ")
        );

        Ok(Self::new(fetcher, analyzer))
    }

    pub fn new(fetcher: SourceFetcher, analyzer: RiskAnalyzer) -> Self {
        Self {
            pipeline: Some(Pipeline { fetcher, analyzer }),
        }
    }

    /// Service that answers every request with the misconfiguration verdict
    pub fn unconfigured() -> Self {
        Self { pipeline: None }
    }

    pub fn is_configured(&self) -> bool {
        self.pipeline.is_some()
    }

    pub async fn audit(&self, query: &ContractQuery) -> AuditOutcome {
        let Some(pipeline) = &self.pipeline else {
            return AuditOutcome::Misconfigured;
        };

        let Some(address) = query.address() else {
            info!("📭 Audit request without address");
            return AuditOutcome::NotFound;
        };

        info!(address = %address, "📥 Received audit request");

        let Some(source) = pipeline.fetcher.fetch(address).await else {
            return AuditOutcome::NotFound;
        };

        // Model-reported ERROR is rejected while parsing, so an ERROR verdict
        // here can only be the exhausted fallback
        let verdict = pipeline.analyzer.analyze(&source.name, &source.code).await;
        if verdict.is_error() {
            warn!(address = %address, "❌ No model produced a verdict");
            AuditOutcome::AiUnavailable
        } else {
            AuditOutcome::Completed(verdict)
        }
    }
}
