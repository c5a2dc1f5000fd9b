use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use tokio::time::sleep;

use crate::{empty::is_empty, OpsKitError, Result, RetryPolicy};

/// Fully-read HTTP response: body bytes and numeric status code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    pub body: Vec<u8>,
    pub status: u16,
}

/// Issues a single HTTP call and classifies the response.
///
/// `body` distinguishes "no payload attached" (`None`) from "empty
/// payload" (`Some(&[])`); only `Some` attaches a request body. Header
/// entries with an empty value are skipped rather than sent blank. The
/// response body is read to completion before returning. Status codes in
/// `[200, 300)` succeed; anything else becomes
/// [`OpsKitError::Status`] carrying the already-read body.
pub async fn execute(
    client: &reqwest::Client,
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&[u8]>,
) -> Result<HttpResponse> {
    let request = build_request(client, method, url, headers, body)?;
    let response = client.execute(request).await.map_err(OpsKitError::Transport)?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(OpsKitError::Transport)?
        .to_vec();

    classify(status, body)
}

/// Like [`execute`], but a successful response with an empty body is
/// replaced by the JSON object `{"code":<status>}` so callers that parse
/// the payload never see an empty buffer. Errors are never suppressed.
pub async fn execute_silent(
    client: &reqwest::Client,
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&[u8]>,
) -> Result<HttpResponse> {
    let mut response = execute(client, method, url, headers, body).await?;
    if response.body.is_empty() {
        response.body = serde_json::json!({ "code": response.status })
            .to_string()
            .into_bytes();
    }
    Ok(response)
}

/// Issues a call with bounded retry on HTTP 429.
///
/// On 429 the header named by `policy.retry_header` is parsed as a wait
/// duration; if absent or unparsable, the wait is `2^attempt` seconds
/// (0-indexed). The server-directed wait always wins over the exponential
/// fallback. Any other non-2xx status fails immediately, and transport
/// failures are not retried. Consuming every attempt on 429 responses
/// yields [`OpsKitError::RetriesExhausted`].
pub async fn execute_with_retry(
    client: &reqwest::Client,
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&[u8]>,
    policy: &RetryPolicy,
) -> Result<HttpResponse> {
    for attempt in 0..policy.max_attempts {
        let request = build_request(client, method, url, headers, body)?;
        let response = client.execute(request).await.map_err(OpsKitError::Transport)?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let wait = response
                .headers()
                .get(policy.retry_header.as_str())
                .and_then(|value| value.to_str().ok())
                .and_then(parse_retry_after)
                .unwrap_or_else(|| backoff_delay(attempt));

            // Drain the body so the connection can be reused.
            let _ = response.bytes().await;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                "rate limited on attempt {}, retrying {} {} after {:?}",
                attempt,
                method,
                url,
                wait
            );

            sleep(wait).await;
            continue;
        }

        let body = response
            .bytes()
            .await
            .map_err(OpsKitError::Transport)?
            .to_vec();
        return classify(status, body);
    }

    Err(OpsKitError::RetriesExhausted {
        attempts: policy.max_attempts,
    })
}

fn build_request(
    client: &reqwest::Client,
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&[u8]>,
) -> Result<reqwest::Request> {
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| OpsKitError::InvalidRequest(format!("invalid method '{method}'")))?;
    let url = Url::parse(url)
        .map_err(|err| OpsKitError::InvalidRequest(format!("invalid url '{url}': {err}")))?;

    let mut builder = client.request(method, url);
    for (name, value) in headers {
        if is_empty(value) {
            continue;
        }
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(raw) = body {
        builder = builder.body(raw.to_vec());
    }
    builder.build().map_err(OpsKitError::Transport)
}

fn classify(status: StatusCode, body: Vec<u8>) -> Result<HttpResponse> {
    if status.is_success() {
        Ok(HttpResponse {
            body,
            status: status.as_u16(),
        })
    } else {
        Err(OpsKitError::Status {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_owned(),
            body,
        })
    }
}

/// Parses a retry-after header value: either bare integer seconds or a
/// number with an `ms`, `s`, `m`, or `h` suffix.
fn parse_retry_after(value: &str) -> Option<Duration> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let unit_start = value.find(|c: char| !c.is_ascii_digit() && c != '.')?;
    let (number, unit) = value.split_at(unit_start);
    let number: f64 = number.parse().ok()?;
    let millis = match unit {
        "ms" => number,
        "s" => number * 1_000.0,
        "m" => number * 60_000.0,
        "h" => number * 3_600_000.0,
        _ => return None,
    };
    Some(Duration::from_millis(millis as u64))
}

fn backoff_delay(attempt: usize) -> Duration {
    let exp = attempt.min(16) as u32;
    Duration::from_secs(1u64 << exp)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{backoff_delay, parse_retry_after};

    #[test]
    fn retry_after_parses_bare_seconds() {
        assert_eq!(parse_retry_after("5"), Some(Duration::from_secs(5)));
        assert_eq!(parse_retry_after(" 0 "), Some(Duration::from_secs(0)));
    }

    #[test]
    fn retry_after_parses_suffixed_durations() {
        assert_eq!(parse_retry_after("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_retry_after("2s"), Some(Duration::from_secs(2)));
        assert_eq!(parse_retry_after("1.5s"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_retry_after("1m"), Some(Duration::from_secs(60)));
    }

    #[test]
    fn retry_after_rejects_garbage() {
        assert_eq!(parse_retry_after(""), None);
        assert_eq!(parse_retry_after("soon"), None);
        assert_eq!(parse_retry_after("10fortnights"), None);
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(5), Duration::from_secs(32));
        // Exponent is capped so the shift cannot overflow.
        assert_eq!(backoff_delay(64), Duration::from_secs(1 << 16));
    }
}
