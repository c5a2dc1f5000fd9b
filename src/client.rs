use std::time::Duration;

use crate::{OpsKitError, Result};

/// Builds a reusable HTTP client.
///
/// `timeout_secs` bounds both connection establishment and the whole
/// request; reqwest folds the TLS handshake into the connect timeout.
/// When `insecure` is true, certificate verification is disabled.
pub fn new_client(timeout_secs: u64, insecure: bool) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .danger_accept_invalid_certs(insecure)
        .build()
        .map_err(OpsKitError::Transport)
}

/// Client that skips certificate verification. For endpoints with
/// self-signed certificates only.
pub fn new_insecure_client(timeout_secs: u64) -> Result<reqwest::Client> {
    new_client(timeout_secs, true)
}

/// Client with full certificate verification.
pub fn new_secure_client(timeout_secs: u64) -> Result<reqwest::Client> {
    new_client(timeout_secs, false)
}
