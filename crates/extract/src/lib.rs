mod consts;
mod extract;
pub mod models;

use tracing::instrument;

pub use crate::extract::Extractor;
use crate::models::ContentBlock;

/// Easy, top-level entrypoint: extract the visible content blocks of a raw
/// HTML document.
///
/// Extraction is best-effort and never fails; an empty or unparseable
/// document simply yields an empty sequence.
#[instrument(skip(html), fields(html_size = html.as_ref().len()))]
pub fn extract(html: impl AsRef<str>) -> Vec<ContentBlock> {
    Extractor::from_html(html.as_ref()).blocks()
}
