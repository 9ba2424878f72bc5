use snapdiff_extract::models::{BlockKind, ContentBlock};

/// Display excerpts keep at most this many characters of the original text.
const MAX_EXCERPT_CHARS: usize = 150;
/// Marker appended when an excerpt was cut short.
const ELLIPSIS: &str = "...";

/// A labeled excerpt of a content block, as it appears in a change report.
///
/// Always references the *original* text of the block, never the
/// normalized comparison key, and is truncated for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Excerpt {
    /// Element kind the block was extracted from
    pub kind: BlockKind,
    /// Original text, truncated to 150 characters plus an ellipsis marker
    pub text: String,
}
impl Excerpt {
    pub fn new(kind: BlockKind, text: &str) -> Self {
        Self { kind, text: truncate(text) }
    }

    /// Upper-case element label for presentation (`"P"`, `"H1"`, ...).
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}
impl From<&ContentBlock> for Excerpt {
    fn from(block: &ContentBlock) -> Self {
        Self::new(block.kind, &block.text)
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_EXCERPT_CHARS {
        let mut out: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        let excerpt = Excerpt::new(BlockKind::Paragraph, "short enough");
        assert_eq!(excerpt.text, "short enough");
    }

    #[test]
    fn text_at_the_limit_is_untouched() {
        let text = "x".repeat(150);
        let excerpt = Excerpt::new(BlockKind::Paragraph, &text);
        assert_eq!(excerpt.text, text);
    }

    #[test]
    fn long_text_is_truncated_with_marker() {
        let text = "y".repeat(151);
        let excerpt = Excerpt::new(BlockKind::Paragraph, &text);
        assert!(excerpt.text.ends_with("..."));
        assert_eq!(excerpt.text.chars().count(), 153);
        assert_eq!(&excerpt.text[..150], &text[..150]);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(200);
        let excerpt = Excerpt::new(BlockKind::Quote, &text);
        assert_eq!(excerpt.text.chars().count(), 153);
    }

    #[test]
    fn labels_are_upper_case_element_names() {
        assert_eq!(Excerpt::new(BlockKind::Heading2, "text").label(), "H2");
        assert_eq!(Excerpt::new(BlockKind::Caption, "text").label(), "FIGCAPTION");
    }
}
