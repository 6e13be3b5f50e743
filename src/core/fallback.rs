//! Ordered candidate fallback
//!
//! Try each candidate once, strictly in order, one at a time. The first
//! success wins; no backoff, no jitter, no second attempt on the same
//! candidate.

use std::future::Future;
use tracing::warn;

use crate::models::errors::{AppError, AppResult};

/// Run `attempt` for each candidate until one succeeds
///
/// Returns the winning candidate with its value, or
/// `AllModelsExhausted` when every candidate failed (or the list was empty).
pub async fn first_success<'a, T, F, Fut>(
    candidates: &'a [String],
    mut attempt: F,
) -> AppResult<(&'a str, T)>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    for (index, candidate) in candidates.iter().enumerate() {
        match attempt(candidate.as_str()).await {
            Ok(value) => return Ok((candidate.as_str(), value)),
            Err(e) => {
                warn!(
                    candidate = %candidate,
                    attempt = index + 1,
                    of = candidates.len(),
                    code = e.code_str(),
                    "⚠️ Candidate failed: {}",
                    e.message
                );
            }
        }
    }

    Err(AppError::all_models_exhausted(candidates.len()))
}
