use super::Excerpt;

/// The structured result of comparing two block sequences.
///
/// Excerpts reference original block text (display-truncated); the report
/// carries no references back into the input sequences and is safe to keep
/// after the blocks are gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeReport {
    /// Content present in the new document only
    pub added: Vec<Excerpt>,
    /// Content present in the old document only
    pub removed: Vec<Excerpt>,
    /// Content present in both, but substantially reworded
    pub modified: Vec<Modification>,
}
impl ChangeReport {
    /// Returns `true` when no changes of any category were detected.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Total number of reported changes across all categories.
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}

/// An old/new excerpt pair for a block that was reworded in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modification {
    pub old: Excerpt,
    pub new: Excerpt,
}
