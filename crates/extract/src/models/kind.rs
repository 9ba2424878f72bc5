use crate::consts;
use scraper::Selector;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The element kind a content block was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    ListItem,
    TableHeader,
    TableCell,
    Caption,
    Quote,
}
impl BlockKind {
    /// Every extractable kind, in scan order: paragraphs first, then
    /// headings, list items, table headers/cells, captions, quotes.
    pub const ALL: [BlockKind; 12] = [
        BlockKind::Paragraph,
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Heading4,
        BlockKind::Heading5,
        BlockKind::Heading6,
        BlockKind::ListItem,
        BlockKind::TableHeader,
        BlockKind::TableCell,
        BlockKind::Caption,
        BlockKind::Quote,
    ];

    /// Returns the HTML element name this kind is extracted from.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading1 => "h1",
            BlockKind::Heading2 => "h2",
            BlockKind::Heading3 => "h3",
            BlockKind::Heading4 => "h4",
            BlockKind::Heading5 => "h5",
            BlockKind::Heading6 => "h6",
            BlockKind::ListItem => "li",
            BlockKind::TableHeader => "th",
            BlockKind::TableCell => "td",
            BlockKind::Caption => "figcaption",
            BlockKind::Quote => "blockquote",
        }
    }

    /// Returns the upper-case label used when presenting an excerpt.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "P",
            BlockKind::Heading1 => "H1",
            BlockKind::Heading2 => "H2",
            BlockKind::Heading3 => "H3",
            BlockKind::Heading4 => "H4",
            BlockKind::Heading5 => "H5",
            BlockKind::Heading6 => "H6",
            BlockKind::ListItem => "LI",
            BlockKind::TableHeader => "TH",
            BlockKind::TableCell => "TD",
            BlockKind::Caption => "FIGCAPTION",
            BlockKind::Quote => "BLOCKQUOTE",
        }
    }

    pub(crate) fn selector(&self) -> &'static Selector {
        match self {
            BlockKind::Paragraph => &consts::PARAGRAPH_SELECTOR,
            BlockKind::Heading1 => &consts::HEADING1_SELECTOR,
            BlockKind::Heading2 => &consts::HEADING2_SELECTOR,
            BlockKind::Heading3 => &consts::HEADING3_SELECTOR,
            BlockKind::Heading4 => &consts::HEADING4_SELECTOR,
            BlockKind::Heading5 => &consts::HEADING5_SELECTOR,
            BlockKind::Heading6 => &consts::HEADING6_SELECTOR,
            BlockKind::ListItem => &consts::LIST_ITEM_SELECTOR,
            BlockKind::TableHeader => &consts::TABLE_HEADER_SELECTOR,
            BlockKind::TableCell => &consts::TABLE_CELL_SELECTOR,
            BlockKind::Caption => &consts::CAPTION_SELECTOR,
            BlockKind::Quote => &consts::QUOTE_SELECTOR,
        }
    }
}
impl Display for BlockKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
