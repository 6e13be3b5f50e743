//! Gemini generateContent client
//!
//! API: POST {base}/v1beta/models/{model}:generateContent?key={api_key}
//! Body: {"contents":[{"parts":[{"text": prompt}]}]}
//!
//! One call per invocation; the caller decides which model to try next.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::models::errors::{AppError, AppResult, ErrorCode};

/// generateContent request body
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.into() }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// generateContent response body (only the fields we read)
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

/// Thin HTTP client for the Gemini API
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Endpoint for one model (without the key)
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Send one prompt to `model` and return the raw reply text
    pub async fn generate(&self, model: &str, request: &GenerateContentRequest) -> AppResult<String> {
        debug!("🤖 Gemini: calling {}", model);

        let response = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(model_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::model_unavailable(format!(
                "{} returned HTTP {}",
                model, status
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorCode::ModelReplyInvalid,
                format!("{} returned an unreadable body", model),
                e,
            )
        })?;

        body.first_text()
            .map(str::to_string)
            .ok_or_else(|| AppError::model_reply_invalid(format!("{} returned no candidates", model)))
    }
}

fn model_error(err: reqwest::Error) -> AppError {
    let err = AppError::from(err);
    if err.code == ErrorCode::ExternalTimeout {
        err
    } else {
        err.recode(ErrorCode::ModelUnavailable)
    }
}
