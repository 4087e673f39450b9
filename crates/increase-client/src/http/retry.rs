/*
[INPUT]:  Attempt counter and response headers of a failed request
[OUTPUT]: Delay before the next attempt
[POS]:    HTTP layer - retry/backoff policy used by send_json
[UPDATE]: When changing backoff curve or Retry-After handling
*/

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use std::time::Duration;

const RETRY_AFTER_MS: &str = "retry-after-ms";
const RETRY_AFTER: &str = "retry-after";

/// Exponential backoff with server-provided overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Longest `Retry-After` the client is willing to honor
    pub max_retry_after: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            max_retry_after: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (0-based).
    pub fn delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(server_delay) = retry_after {
            if server_delay <= self.max_retry_after {
                return server_delay;
            }
        }

        let factor = 2u32.saturating_pow(attempt);
        self.initial_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

/// Read `retry-after-ms`, then `retry-after` (seconds or HTTP date).
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    parse_retry_after_at(headers, Utc::now())
}

fn parse_retry_after_at(headers: &HeaderMap, now: DateTime<Utc>) -> Option<Duration> {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

    if let Some(millis) = header(RETRY_AFTER_MS).and_then(|raw| raw.trim().parse::<f64>().ok()) {
        return duration_from_secs(millis / 1000.0);
    }

    let raw = header(RETRY_AFTER)?.trim();
    if let Ok(seconds) = raw.parse::<f64>() {
        return duration_from_secs(seconds);
    }

    let at = DateTime::parse_from_rfc2822(raw).ok()?.with_timezone(&Utc);
    (at - now).to_std().ok()
}

/// `None` for negative, non-finite or out-of-range values.
fn duration_from_secs(seconds: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(seconds).ok()
}
