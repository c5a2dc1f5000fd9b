//! HTTP-method convenience entry points over the generic executor.
//!
//! Every function here forwards to [`execute`] or [`execute_with_retry`]
//! with the method string fixed; the content-type/authorization forms
//! pre-compose headers via
//! [`content_type_and_authorization`](crate::headers::content_type_and_authorization).
//! Body-only functions drop the status code; `*_with_status` variants
//! return the full [`HttpResponse`].

use std::collections::HashMap;

use reqwest::Url;

use crate::{
    headers::content_type_and_authorization,
    request::{execute, execute_with_retry, HttpResponse},
    OpsKitError, Result, RetryPolicy,
};

/// Generic request with caller-supplied headers, returning the body.
pub async fn request_with_headers(
    client: &reqwest::Client,
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&[u8]>,
) -> Result<Vec<u8>> {
    execute(client, method, url, headers, body)
        .await
        .map(|response| response.body)
}

/// Generic request with retry on rate limiting, returning the body.
pub async fn request_with_headers_retry(
    client: &reqwest::Client,
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&[u8]>,
    policy: &RetryPolicy,
) -> Result<Vec<u8>> {
    execute_with_retry(client, method, url, headers, body, policy)
        .await
        .map(|response| response.body)
}

pub async fn get_with_headers(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
) -> Result<Vec<u8>> {
    request_with_headers(client, "GET", url, headers, None).await
}

pub async fn get(
    client: &reqwest::Client,
    url: &str,
    content_type: &str,
    authorization: &str,
) -> Result<Vec<u8>> {
    let headers = content_type_and_authorization(content_type, authorization);
    get_with_headers(client, url, &headers).await
}

pub async fn get_with_headers_retry(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
    policy: &RetryPolicy,
) -> Result<Vec<u8>> {
    request_with_headers_retry(client, "GET", url, headers, None, policy).await
}

pub async fn get_retry(
    client: &reqwest::Client,
    url: &str,
    content_type: &str,
    authorization: &str,
    policy: &RetryPolicy,
) -> Result<Vec<u8>> {
    let headers = content_type_and_authorization(content_type, authorization);
    get_with_headers_retry(client, url, &headers, policy).await
}

pub async fn post_with_headers(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
    body: &[u8],
) -> Result<Vec<u8>> {
    request_with_headers(client, "POST", url, headers, Some(body)).await
}

pub async fn post(
    client: &reqwest::Client,
    url: &str,
    content_type: &str,
    authorization: &str,
    body: &[u8],
) -> Result<Vec<u8>> {
    let headers = content_type_and_authorization(content_type, authorization);
    post_with_headers(client, url, &headers, body).await
}

pub async fn post_with_headers_retry(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
    body: &[u8],
    policy: &RetryPolicy,
) -> Result<Vec<u8>> {
    request_with_headers_retry(client, "POST", url, headers, Some(body), policy).await
}

pub async fn post_retry(
    client: &reqwest::Client,
    url: &str,
    content_type: &str,
    authorization: &str,
    body: &[u8],
    policy: &RetryPolicy,
) -> Result<Vec<u8>> {
    let headers = content_type_and_authorization(content_type, authorization);
    post_with_headers_retry(client, url, &headers, body, policy).await
}

/// POST returning body and status code together.
pub async fn post_with_headers_and_status(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
    body: &[u8],
) -> Result<HttpResponse> {
    execute(client, "POST", url, headers, Some(body)).await
}

/// POST with convenience headers, returning body and status code.
pub async fn post_with_status(
    client: &reqwest::Client,
    url: &str,
    content_type: &str,
    authorization: &str,
    body: &[u8],
) -> Result<HttpResponse> {
    let headers = content_type_and_authorization(content_type, authorization);
    post_with_headers_and_status(client, url, &headers, body).await
}

pub async fn put_with_headers(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
    body: &[u8],
) -> Result<Vec<u8>> {
    request_with_headers(client, "PUT", url, headers, Some(body)).await
}

pub async fn put(
    client: &reqwest::Client,
    url: &str,
    content_type: &str,
    authorization: &str,
    body: &[u8],
) -> Result<Vec<u8>> {
    let headers = content_type_and_authorization(content_type, authorization);
    put_with_headers(client, url, &headers, body).await
}

pub async fn delete_with_headers(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
    body: &[u8],
) -> Result<Vec<u8>> {
    request_with_headers(client, "DELETE", url, headers, Some(body)).await
}

pub async fn delete(
    client: &reqwest::Client,
    url: &str,
    content_type: &str,
    authorization: &str,
    body: &[u8],
) -> Result<Vec<u8>> {
    let headers = content_type_and_authorization(content_type, authorization);
    delete_with_headers(client, url, &headers, body).await
}

/// Issues a HEAD request and returns the response headers.
///
/// The status code is not classified; only transport failures and a
/// malformed URL error.
pub async fn head(client: &reqwest::Client, url: &str) -> Result<reqwest::header::HeaderMap> {
    let url = Url::parse(url)
        .map_err(|err| OpsKitError::InvalidRequest(format!("invalid url '{url}': {err}")))?;
    let response = client
        .head(url)
        .send()
        .await
        .map_err(OpsKitError::Transport)?;
    Ok(response.headers().clone())
}
