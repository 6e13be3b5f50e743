//! Core data types for the audit pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{SUMMARY_AI_UNAVAILABLE, SUMMARY_MISCONFIGURED};

/// Incoming `/audit` request body
///
/// `address` stays optional so a missing field is handled by the service
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractQuery {
    #[serde(default)]
    pub address: Option<String>,
}

impl ContractQuery {
    /// Trimmed, non-empty address, if one was supplied
    pub fn address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

/// Verified contract source as returned by the block explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSource {
    pub name: String,
    pub code: String,
}

/// Risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW", alias = "low", alias = "Low")]
    Low,
    #[serde(rename = "MEDIUM", alias = "medium", alias = "Medium")]
    Medium,
    #[serde(rename = "HIGH", alias = "high", alias = "High")]
    High,
    /// Service-generated only; never accepted from a model reply
    #[serde(rename = "ERROR", alias = "error", alias = "Error")]
    Error,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit result returned to the caller
///
/// All three fields are required when decoding; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditVerdict {
    pub risk_level: RiskLevel,
    pub summary: String,
    pub red_flags: Vec<String>,
}

impl AuditVerdict {
    /// ERROR verdict with the given summary and no red flags
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            risk_level: RiskLevel::Error,
            summary: summary.into(),
            red_flags: Vec::new(),
        }
    }

    /// Returned when a required credential is missing
    pub fn misconfigured() -> Self {
        Self::error(SUMMARY_MISCONFIGURED)
    }

    /// Returned when every model candidate failed
    pub fn ai_unavailable() -> Self {
        Self::error(SUMMARY_AI_UNAVAILABLE)
    }

    pub fn is_error(&self) -> bool {
        self.risk_level == RiskLevel::Error
    }
}
