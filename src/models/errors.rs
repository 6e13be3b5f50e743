//! Centralized Error Handling Module
//!
//! Every failure in the audit pipeline carries a unique error code so it
//! can be told apart in logs and in the `x-error-code` response header.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: Configuration errors
//! - EXPLORER_xxx / CONTRACT_xxx: Block explorer errors
//! - MODEL_xxx / AI_xxx: Generative model errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// Replace the error code, keeping message and source
    pub fn recode(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// Explorer or generative-AI credential missing
    ConfigMissingApiKey,
    /// HTTP client could not be built
    ConfigInvalidValue,

    // ============================================
    // Block Explorer Errors
    // ============================================
    /// Network failure or malformed explorer response
    ExplorerUnavailable,
    /// Explorer answered, but has no verified source for the address
    ContractNotVerified,

    // ============================================
    // Generative Model Errors
    // ============================================
    /// Transport failure or non-success status from one model candidate
    ModelUnavailable,
    /// Model answered, but the reply is not a usable verdict
    ModelReplyInvalid,
    /// Every model candidate failed
    AllModelsExhausted,

    // ============================================
    // Shared
    // ============================================
    /// Outbound request timed out
    ExternalTimeout,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigMissingApiKey => "CFG_MISSING_API_KEY",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            Self::ExplorerUnavailable => "EXPLORER_UNAVAILABLE",
            Self::ContractNotVerified => "CONTRACT_NOT_VERIFIED",

            Self::ModelUnavailable => "MODEL_UNAVAILABLE",
            Self::ModelReplyInvalid => "MODEL_REPLY_INVALID",
            Self::AllModelsExhausted => "AI_MODELS_EXHAUSTED",

            Self::ExternalTimeout => "EXTERNAL_TIMEOUT",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Should the analyzer move on to the next model candidate?
    ///
    /// Everything a single candidate can produce is recoverable this way.
    pub fn is_candidate_failure(&self) -> bool {
        matches!(
            self,
            Self::ModelUnavailable | Self::ModelReplyInvalid | Self::ExternalTimeout
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Missing API key
    pub fn missing_api_key(key_name: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissingApiKey,
            format!("Missing API key: {}", key_name),
        )
    }

    /// No verified source for the address
    pub fn contract_not_verified(address: &str) -> Self {
        Self::new(
            ErrorCode::ContractNotVerified,
            format!("No verified source for {}", address),
        )
    }

    /// One model candidate failed at the transport level
    pub fn model_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelUnavailable, msg)
    }

    /// One model candidate replied with something that is not a verdict
    pub fn model_reply_invalid(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelReplyInvalid, msg)
    }

    /// Every candidate failed
    pub fn all_models_exhausted(attempted: usize) -> Self {
        Self::new(
            ErrorCode::AllModelsExhausted,
            format!("All {} model candidates failed", attempted),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::ExternalTimeout, "Request timeout")
        } else if err.is_builder() {
            Self::with_source(ErrorCode::ConfigInvalidValue, "Invalid HTTP client setup", err)
        } else {
            let message = err.to_string();
            Self::with_source(ErrorCode::Unknown, message, err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ModelReplyInvalid, "JSON parse error", err)
    }
}
