//! Constants Module - Single Source of Truth
//!
//! Every fixed value used by the audit pipeline lives here: upstream
//! endpoints, the chain id, limits, and the fixed verdict texts.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "RugScan";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for outbound HTTP requests
pub const USER_AGENT: &str = concat!("RugScan/", env!("CARGO_PKG_VERSION"));

// ============================================
// ENVIRONMENT VARIABLES
// ============================================

pub const ENV_ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_ETHERSCAN_API_URL: &str = "ETHERSCAN_API_URL";
pub const ENV_GEMINI_API_URL: &str = "GEMINI_API_URL";
pub const ENV_GEMINI_MODELS: &str = "GEMINI_MODELS";
pub const ENV_EXPLORER_TIMEOUT_SECS: &str = "EXPLORER_TIMEOUT_SECS";
pub const ENV_MODEL_TIMEOUT_SECS: &str = "MODEL_TIMEOUT_SECS";
pub const ENV_HOST: &str = "RUGSCAN_HOST";
pub const ENV_PORT: &str = "RUGSCAN_PORT";
/// Platform-provided port (Railway, Vercel, Koyeb), checked before `RUGSCAN_PORT`
pub const ENV_PLATFORM_PORT: &str = "PORT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

// ============================================
// BLOCK EXPLORER (Etherscan v2)
// ============================================

/// Etherscan v2 multichain endpoint
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";

/// Ethereum Mainnet, the only network audited
pub const CHAIN_ID_ETHEREUM: u64 = 1;

/// `status` value Etherscan returns on success
pub const EXPLORER_STATUS_OK: &str = "1";

pub const DEFAULT_EXPLORER_TIMEOUT_SECS: u64 = 10;

// ============================================
// GENERATIVE AI (Gemini)
// ============================================

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Models tried in order until one yields a usable reply
pub const DEFAULT_MODEL_CANDIDATES: [&str; 2] =
    ["gemini-flash-latest", "gemini-2.0-flash-lite-preview-02-05"];

pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;

/// Source code beyond this many characters is never sent to the model
pub const MAX_SOURCE_CHARS: usize = 12_000;

// ============================================
// FIXED RESPONSE TEXTS
// ============================================

pub const SUMMARY_MISCONFIGURED: &str =
    "Server Misconfigured: API Keys missing in Environment Variables.";

pub const SUMMARY_AI_UNAVAILABLE: &str = "AI unavailable. Check API Quota.";

pub const MESSAGE_CONTRACT_NOT_FOUND: &str = "Contract unverified or not found";

/// Response header carrying the machine-readable error code
pub const ERROR_CODE_HEADER: &str = "x-error-code";

/// Response header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
