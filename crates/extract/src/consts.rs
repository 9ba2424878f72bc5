use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Element kinds whose subtrees carry no visible text content. Their text
// nodes are excluded when flattening a content element.
pub(crate) const STRIPPED_ELEMENTS: [&str; 7] = ["script", "style", "meta", "link", "svg", "path", "noscript"];

// One selector per content-bearing element kind; the scan visits them
// kind-by-kind, so the order of these is the order of `BlockKind::ALL`.
selector!(PARAGRAPH_SELECTOR, "p");
selector!(HEADING1_SELECTOR, "h1");
selector!(HEADING2_SELECTOR, "h2");
selector!(HEADING3_SELECTOR, "h3");
selector!(HEADING4_SELECTOR, "h4");
selector!(HEADING5_SELECTOR, "h5");
selector!(HEADING6_SELECTOR, "h6");
selector!(LIST_ITEM_SELECTOR, "li");
selector!(TABLE_HEADER_SELECTOR, "th");
selector!(TABLE_CELL_SELECTOR, "td");
selector!(CAPTION_SELECTOR, "figcaption");
selector!(QUOTE_SELECTOR, "blockquote");

// Matches text made up entirely of digits and non-word characters,
// i.e. text containing no letters.
regex!(NO_LETTERS_REGEX, r"^[\d\W]+$");
