//! Shared application context and the comparison pipeline.

use crate::cli::Strategy;
use crate::error::{AppError, Result};
use snapdiff_archive::{ArchiveClient, Timestamp, ensure_scheme};
use snapdiff_config::Config;
use snapdiff_diff::{ChangeReport, pairwise};
use snapdiff_render::Renderer;
use tracing::instrument;

/// Immutable context shared by the CLI and every web request. No mutable
/// state: each comparison is an independent, pure pipeline over whatever the
/// two fetches returned.
pub struct App {
    pub config: Config,
    pub client: ArchiveClient,
    pub renderer: Renderer,
}
impl App {
    pub fn from_config(config: Config) -> Result<Self> {
        let client = ArchiveClient::new(&config.user_agent, config.fetch_timeout())
            .map_err(|source| AppError::Client { source })?;
        let renderer = Renderer::new().map_err(|source| AppError::Renderer { source })?;
        Ok(Self { config, client, renderer })
    }

    /// The full comparison pipeline: locate the archived snapshot, fetch
    /// both documents, extract content blocks, classify the changes.
    #[instrument(skip(self))]
    pub async fn compare(&self, url: &str, timestamp: Option<&Timestamp>, strategy: Strategy) -> Result<Comparison> {
        let live_url = ensure_scheme(url);
        let snapshot = self
            .client
            .locate(&live_url, timestamp)
            .await
            .map_err(|source| AppError::Index { source })?
            .ok_or(AppError::NoSnapshot)?;
        tracing::info!(archive_url = %snapshot.url, %live_url, "comparing snapshots");
        let archived = self.client.fetch(&snapshot.url).await.map_err(|source| AppError::ArchiveFetch { source })?;
        let live = self.client.fetch(&live_url).await.map_err(|source| AppError::LiveFetch { source })?;
        let old_blocks = snapdiff_extract::extract(&archived);
        let new_blocks = snapdiff_extract::extract(&live);
        let report = match strategy {
            Strategy::Strict => snapdiff_diff::compare(&old_blocks, &new_blocks),
            Strategy::Pairwise => {
                pairwise::compare(&old_blocks, &new_blocks, pairwise::DEFAULT_SIMILARITY_THRESHOLD)
            },
        };
        Ok(Comparison { archive_url: snapshot.url, live_url, report })
    }
}

/// Outcome of one comparison run.
pub struct Comparison {
    pub archive_url: String,
    pub live_url: String,
    pub report: ChangeReport,
}
