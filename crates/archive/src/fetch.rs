//! Page fetching.

use crate::ArchiveClient;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use tracing::instrument;

impl ArchiveClient {
    /// Fetches a page and returns its body as text.
    ///
    /// Applies the client's User-Agent and timeout; non-success status codes
    /// are errors. Callers treat any failure here as "no comparison
    /// possible"; there is no retry policy at this layer.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await.or_raise(|| ErrorKind::Http { url: url.to_string() })?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = response.text().await.or_raise(|| ErrorKind::Http { url: url.to_string() })?;
        tracing::debug!(bytes = body.len(), "page fetched");
        Ok(body)
    }
}
