//! Rug Pull Risk Analyzer
//!
//! Builds the fixed audit prompt, sends it to the configured Gemini models
//! in priority order, and decodes the first usable reply into an
//! [`AuditVerdict`]. Only the first `MAX_SOURCE_CHARS` characters of the
//! source are ever sent; anything after that is not analyzed.

use tracing::{info, warn};

use crate::core::fallback::first_success;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::AuditVerdict;
use crate::providers::gemini::{GeminiClient, GenerateContentRequest};
use crate::utils::constants::MAX_SOURCE_CHARS;

/// Classifies a contract's rug pull risk with a generative model
#[derive(Clone)]
pub struct RiskAnalyzer {
    client: GeminiClient,
    candidates: Vec<String>,
}

impl RiskAnalyzer {
    pub fn new(client: GeminiClient, candidates: Vec<String>) -> Self {
        Self { client, candidates }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Always yields a verdict; total failure becomes the "AI unavailable" one
    pub async fn analyze(&self, name: &str, code: &str) -> AuditVerdict {
        self.try_analyze(name, code).await.unwrap_or_else(|e| {
            warn!("❌ {}", e);
            AuditVerdict::ai_unavailable()
        })
    }

    /// Like [`analyze`](Self::analyze), but reports `AllModelsExhausted`
    pub async fn try_analyze(&self, name: &str, code: &str) -> AppResult<AuditVerdict> {
        let request = GenerateContentRequest::from_prompt(build_prompt(name, code));
        let request = &request;

        let (model, verdict) = first_success(&self.candidates, |model| async move {
            let reply = self.client.generate(model, request).await?;
            parse_model_reply(&reply)
        })
        .await?;

        info!(
            "✅ {} classified {} as {} ({} red flags)",
            model,
            name,
            verdict.risk_level,
            verdict.red_flags.len()
        );
        Ok(verdict)
    }
}

/// First `max_chars` characters of `code` (char boundary safe)
pub fn truncate_source(code: &str, max_chars: usize) -> &str {
    match code.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &code[..byte_idx],
        None => code,
    }
}

/// The audit prompt: owner-privilege questions only, strict JSON output
pub fn build_prompt(contract_name: &str, source_code: &str) -> String {
    let snippet = truncate_source(source_code, MAX_SOURCE_CHARS);
    format!(
        r#"
    You are a "Rug Pull" Detector, NOT a Code Style Auditor.
    Analyze '{contract_name}' for MALICIOUS INTENT only.

    RULES:
    1. IGNORE "Old Compiler Version" or "Pragma" warnings. (Old code is not a scam).
    2. IGNORE "Missing SafeMath" unless it allows the OWNER to print money.
    3. IGNORE "Race Conditions" (ERC20 approve issues) as they are standard in old tokens.

    FOCUS ONLY ON OWNER PRIVILEGES:
    - Can the owner MINT tokens to themselves?
    - Can the owner BLACKLIST or FREEZE user funds?
    - Can the owner PAUSE transfers forever?
    - Can the owner WITHDRAW user assets (drain)?

    Output strictly in JSON format like this:
    {{
        "risk_level": "LOW" | "MEDIUM" | "HIGH",
        "summary": "One sentence explaining the verdict.",
        "red_flags": ["Flag 1", "Flag 2"]
    }}

    Code snippet:
    {snippet}
    "#
    )
}

/// Remove ```json / ``` markers models like to wrap JSON in
pub fn strip_code_fences(reply: &str) -> String {
    reply
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Decode a model reply into a verdict
///
/// Missing fields and non-JSON replies are errors, so the next candidate
/// gets a turn. ERROR is reserved for verdicts this service produces.
pub fn parse_model_reply(reply: &str) -> AppResult<AuditVerdict> {
    let cleaned = strip_code_fences(reply);
    let verdict: AuditVerdict = serde_json::from_str(&cleaned)?;

    if verdict.is_error() {
        return Err(AppError::model_reply_invalid(
            "model reported risk_level ERROR",
        ));
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use crate::models::types::RiskLevel;

    #[test]
    fn test_truncate_long_source() {
        let code = format!("{}TAIL", "a".repeat(MAX_SOURCE_CHARS));
        let cut = truncate_source(&code, MAX_SOURCE_CHARS);
        assert_eq!(cut.len(), MAX_SOURCE_CHARS);
        assert!(!cut.contains("TAIL"));
    }

    #[test]
    fn test_truncate_short_source_untouched() {
        assert_eq!(truncate_source("contract A {}", MAX_SOURCE_CHARS), "contract A {}");
        assert_eq!(truncate_source("", 10), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let cut = truncate_source("ééééé", 3);
        assert_eq!(cut, "ééé");
        assert_eq!(cut.chars().count(), 3);
    }

    #[test]
    fn test_prompt_embeds_name_and_truncated_code() {
        let code = format!("{}{}", "x".repeat(MAX_SOURCE_CHARS), "BEYOND_LIMIT");
        let prompt = build_prompt("ScamToken", &code);
        assert!(prompt.contains("Analyze 'ScamToken' for MALICIOUS INTENT only."));
        assert!(prompt.contains(&"x".repeat(MAX_SOURCE_CHARS)));
        assert!(!prompt.contains("BEYOND_LIMIT"));
    }

    #[test]
    fn test_prompt_scope() {
        let prompt = build_prompt("T", "contract T {}");
        for needle in [
            "MINT tokens to themselves",
            "BLACKLIST or FREEZE",
            "PAUSE transfers forever",
            "WITHDRAW user assets",
            "Old Compiler Version",
            "Missing SafeMath",
            "Race Conditions",
            "\"red_flags\"",
        ] {
            assert!(prompt.contains(needle), "prompt missing {:?}", needle);
        }
    }

    #[test]
    fn test_fenced_reply_parses_like_plain() {
        let plain = r#"{"risk_level":"LOW","summary":"Standard ERC20.","red_flags":[]}"#;
        let fenced = format!("```json\n{}\n```", plain);
        assert_eq!(
            parse_model_reply(&fenced).unwrap(),
            parse_model_reply(plain).unwrap()
        );
    }

    #[test]
    fn test_reply_with_flags() {
        let reply = r#"```
{"risk_level": "HIGH", "summary": "Owner can mint.", "red_flags": ["mint()", "blacklist()"]}
```"#;
        let verdict = parse_model_reply(reply).unwrap();
        assert_eq!(verdict.risk_level, RiskLevel::High);
        assert_eq!(verdict.red_flags, vec!["mint()", "blacklist()"]);
    }

    #[test]
    fn test_invalid_replies() {
        for reply in [
            "I think this contract is fine.",
            r#"{"risk_level":"LOW","summary":"no flags field"}"#,
            r#"{"risk_level":"ERROR","summary":"x","red_flags":[]}"#,
            r#"{"risk_level":"SEVERE","summary":"x","red_flags":[]}"#,
        ] {
            let err = parse_model_reply(reply).unwrap_err();
            assert_eq!(err.code, ErrorCode::ModelReplyInvalid, "reply: {}", reply);
        }
    }
}
