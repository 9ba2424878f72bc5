//! Top-level failures with their user-facing messages.
//!
//! This is the outermost layer: everything that can go wrong in a
//! comparison collapses into one of these variants, each carrying the
//! reason string shown to the user (and, for the web front end, deciding
//! the response status). Underlying errors travel along as sources.

use derive_more::{Display, Error};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Display, Error)]
pub enum AppError {
    #[display("Could not load configuration.")]
    Config { source: snapdiff_config::error::Error },
    #[display("Could not construct the HTTP client.")]
    Client { source: snapdiff_archive::error::Error },
    #[display("Could not prepare the report renderer.")]
    Renderer { source: snapdiff_render::error::Error },
    #[display("Invalid timestamp format")]
    InvalidTimestamp { source: snapdiff_archive::error::Error },
    #[display("No Wayback Machine snapshot found for this URL.")]
    NoSnapshot,
    #[display("Could not reach the snapshot index.")]
    Index { source: snapdiff_archive::error::Error },
    #[display("Could not fetch Wayback Machine content.")]
    ArchiveFetch { source: snapdiff_archive::error::Error },
    #[display("Could not fetch current live content.")]
    LiveFetch { source: snapdiff_archive::error::Error },
    #[display("Could not render the report.")]
    Render { source: snapdiff_render::error::Error },
    #[display("Could not write the report to {path}.")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[display("Could not start the web server.")]
    Serve { source: std::io::Error },
}
