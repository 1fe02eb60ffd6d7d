use reqwest::{header::HeaderMap, Response, StatusCode};
use std::time::Duration;
use tracing::{info, warn};

use super::ScenarioKind;

/// Requests left in the current rate limit window.
pub const RATE_LIMIT_REMAINING: &str = "ratelimit-remaining";
/// Seconds to wait before retrying, sent with 429 responses.
pub const RATE_LIMIT_RETRY_AFTER: &str = "ratelimit-retryafter-second";

// Older gateway builds prefix the same values with `X-`.
const LEGACY_RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const LEGACY_RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// What got logged about one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: StatusCode,
    pub elapsed: Duration,
    pub rate_limit_remaining: Option<u64>,
    pub retry_after_seconds: Option<u64>,
}

impl ResponseSummary {
    pub fn new(resp: &Response, elapsed: Duration) -> Self {
        Self::from_parts(resp.status(), resp.headers(), elapsed)
    }

    pub fn from_parts(status: StatusCode, headers: &HeaderMap, elapsed: Duration) -> Self {
        Self {
            status,
            elapsed,
            rate_limit_remaining: header_u64(headers, RATE_LIMIT_REMAINING)
                .or_else(|| header_u64(headers, LEGACY_RATE_LIMIT_REMAINING)),
            retry_after_seconds: header_u64(headers, RATE_LIMIT_RETRY_AFTER)
                .or_else(|| header_u64(headers, LEGACY_RATE_LIMIT_RESET)),
        }
    }

    pub fn log(&self, kind: ScenarioKind) {
        let elapsed_ms = self.elapsed.as_millis() as u64;
        if self.status.is_success() {
            info!(
                scenario = %kind,
                status = self.status.as_u16(),
                elapsed_ms,
                rate_limit_remaining = ?self.rate_limit_remaining,
                "request completed"
            );
        } else {
            warn!(
                scenario = %kind,
                status = self.status.as_u16(),
                elapsed_ms,
                rate_limit_remaining = ?self.rate_limit_remaining,
                retry_after_seconds = ?self.retry_after_seconds,
                "request completed with error status"
            );
        }
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
