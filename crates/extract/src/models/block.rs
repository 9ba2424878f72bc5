use super::BlockKind;

/// A single block of visible text extracted from a document.
///
/// Blocks are immutable once extracted and live only for the duration of one
/// comparison. The `text` field is the flattened, trimmed visible text of the
/// source element, with non-content subtrees already excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentBlock {
    /// Element kind the text was extracted from
    pub kind: BlockKind,
    /// Trimmed visible text
    pub text: String,
}
impl ContentBlock {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}
impl From<(BlockKind, String)> for ContentBlock {
    fn from((kind, text): (BlockKind, String)) -> Self {
        Self::new(kind, text)
    }
}
impl From<(BlockKind, &str)> for ContentBlock {
    fn from((kind, text): (BlockKind, &str)) -> Self {
        Self::new(kind, text)
    }
}
