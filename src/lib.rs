//! `opskit` is a small set of cross-cutting helpers for service tooling.
//!
//! The core is a verb-agnostic HTTP execution layer over `reqwest`:
//! - [`execute`] / [`execute_silent`] — single call with status classification
//! - [`execute_with_retry`] — bounded retry on HTTP 429 with server-directed
//!   or exponential backoff
//! - [`verbs`] — GET/POST/PUT/DELETE convenience entry points
//! - [`new_client`] — client factory with timeout and TLS-verification policy
//!
//! Around it sit the helpers the HTTP layer and its callers share: an
//! emptiness predicate ([`is_empty`]), typed environment lookup
//! ([`env_get`]), `key=value` string parsing ([`map`]), and file probes.

mod client;
mod empty;
mod env;
mod error;
mod file;
mod headers;
mod options;
mod request;

pub mod map;
pub mod verbs;

pub use client::{new_client, new_insecure_client, new_secure_client};
pub use empty::{is_empty, IsEmpty};
pub use env::env_get;
pub use error::OpsKitError;
pub use file::{dir_exists, file_exists};
pub use headers::content_type_and_authorization;
pub use options::RetryPolicy;
pub use request::{execute, execute_silent, execute_with_retry, HttpResponse};

pub type Result<T> = std::result::Result<T, OpsKitError>;
