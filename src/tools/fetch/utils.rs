use reqwest::StatusCode;
use std::time::Duration;

/// Sleep before the attempt following failed attempt `attempt` (1-based):
/// `factor * 2^(attempt - 1)` seconds.
pub fn backoff_delay(factor: f64, attempt: u32) -> Duration {
    let exp = attempt.saturating_sub(1).min(63) as i32;
    let secs = factor * 2f64.powi(exp);
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Client and server errors both count as a failed attempt.
pub(crate) fn is_failure_status(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}
