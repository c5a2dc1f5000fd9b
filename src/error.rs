/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum OpsKitError {
    /// Malformed method or URL, rejected before any network I/O.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Network or request execution error from `reqwest`. No status code
    /// was obtained.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code. The response body has already been
    /// read and is carried here so callers can inspect error payloads.
    #[error("http error {status}: {reason}")]
    Status {
        status: u16,
        reason: String,
        body: Vec<u8>,
    },
    /// Every attempt of a retried request was consumed by 429 responses.
    #[error("max retries exceeded after {attempts} attempts")]
    RetriesExhausted { attempts: usize },
}

impl OpsKitError {
    /// Status code associated with the error, if one was obtained.
    pub fn status(&self) -> Option<u16> {
        match self {
            OpsKitError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
