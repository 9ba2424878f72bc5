//! Upstream collaborators for page comparison: locating an archived
//! snapshot of a URL and fetching page bodies. The diffing core never sees
//! this crate; it only consumes the documents fetched here.

mod consts;
pub mod error;
mod fetch;
mod locate;
mod models;
mod timestamp;

pub use crate::consts::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::{ErrorKind, Result};
pub use crate::locate::ensure_scheme;
pub use crate::models::Snapshot;
pub use crate::timestamp::Timestamp;
use exn::ResultExt;
use std::time::Duration;

/// HTTP client for the snapshot index and page fetches.
///
/// Cheap to clone (the underlying connection pool is shared); construct once
/// per process with the configured identity and timeout.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    pub(crate) http: reqwest::Client,
}
impl ArchiveClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self { http })
    }
}
impl Default for ArchiveClient {
    fn default() -> Self {
        // Infallible with the builtin defaults: the builder only fails on
        // invalid header values, and the default User-Agent is a valid one.
        Self::new(DEFAULT_USER_AGENT, DEFAULT_FETCH_TIMEOUT).expect("default client configuration is valid")
    }
}
