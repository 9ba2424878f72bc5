use crate::Timestamp;

/// A located archive snapshot of a page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    /// Fully-qualified snapshot URL on the archive host
    pub url: String,
    /// Capture timestamp, when the index reported one
    pub timestamp: Option<Timestamp>,
}
