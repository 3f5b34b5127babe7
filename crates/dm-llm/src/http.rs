//! Shared HTTP response helpers for the chat-completions transport.
//!
//! Centralizes status-code checks (401/403 → [`LlmError::Auth`], 429 rate
//! limiting with `Retry-After` parsing, other non-success →
//! [`LlmError::Api`]) so the transport stays focused on request construction
//! and reply extraction.

use crate::error::LlmError;

/// Fallback wait when a 429 carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = resp.status();
    if status == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(LlmError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if status == 401 || status == 403 {
        return Err(LlmError::Auth {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    if !status.is_success() {
        return Err(LlmError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
