//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client with connection pooling and the configured timeout.
///
/// The timeout is the only client-side limit; requests are never retried.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS;

    #[test]
    fn test_client_builds_with_configured_timeouts() {
        assert!(create_http_client_with_timeout(DEFAULT_HTTP_TIMEOUT_SECONDS).is_ok());
        assert!(create_http_client_with_timeout(1).is_ok());
    }
}
