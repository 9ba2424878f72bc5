use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Normalization strips punctuation/symbols first, then every run of whitespace.
regex!(NON_WORD_REGEX, r"[^\w\s]");
regex!(WHITESPACE_REGEX, r"\s+");
// Word tokens for the secondary rewording check.
regex!(WORD_REGEX, r"\b\w+\b");
