/// Configures retry behavior for rate-limited requests.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: usize,
    /// Response header consulted for a server-directed wait duration.
    pub retry_header: String,
}

impl RetryPolicy {
    /// Policy with the given attempt budget, reading the standard
    /// `Retry-After` header.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_header: "Retry-After".to_owned(),
        }
    }
}
