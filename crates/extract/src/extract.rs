//! Content-block extraction from raw HTML.

use crate::consts;
use crate::models::{BlockKind, ContentBlock};
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};
use std::convert::Infallible;
use std::str::FromStr;
use tracing::instrument;

/// Blocks whose trimmed text is this short (or shorter) carry no signal.
const MIN_TEXT_CHARS: usize = 10;

#[derive(Debug)]
pub struct Extractor {
    document: Html,
}
impl Extractor {
    pub fn from_document(document: Html) -> Self {
        Self { document }
    }

    /// Parsing is lenient: malformed markup never fails, it just yields
    /// whatever tree html5ever can recover.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        Self::from_document(document)
    }

    /// Extracts the visible content blocks of the document.
    ///
    /// Scans one element kind at a time (see [`BlockKind::ALL`]), so blocks
    /// are grouped by kind and in document order within each kind. Order
    /// across kinds is not meaningful to consumers.
    ///
    /// A block is discarded when its trimmed text is 10 characters or
    /// shorter, or when it contains no letters at all (bare numbers,
    /// separators, and similar layout debris).
    #[instrument(skip(self))]
    pub fn blocks(&self) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();
        for kind in BlockKind::ALL {
            for element in self.document.select(kind.selector()) {
                let text = visible_text(&element);
                let text = text.trim();
                if text.chars().count() <= MIN_TEXT_CHARS {
                    continue;
                }
                if consts::NO_LETTERS_REGEX.is_match(text) {
                    continue;
                }
                blocks.push(ContentBlock::new(kind, text));
            }
        }
        tracing::debug!(count = blocks.len(), "content blocks extracted");
        blocks
    }
}
impl FromStr for Extractor {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_html(s))
    }
}
impl From<String> for Extractor {
    fn from(value: String) -> Self {
        Self::from_html(&value)
    }
}
impl From<Html> for Extractor {
    fn from(document: Html) -> Self {
        Self::from_document(document)
    }
}

/// Flattens the visible text of an element, excluding the subtrees of
/// non-content elements (script, style, svg, and friends).
///
/// The parsed tree is immutable, so instead of detaching those nodes the
/// walk simply never descends into them.
fn visible_text(element: &ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(**element, &mut out);
    out
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text),
            Node::Element(element) if consts::STRIPPED_ELEMENTS.contains(&element.name()) => {},
            Node::Element(_) => collect_text(child, out),
            _ => {},
        }
    }
}
