//! Text normalization for comparison keys.

use crate::consts;

/// Reduces a text block to its canonical comparison key.
///
/// Lowercases, strips everything that is not a word character or whitespace,
/// then strips the whitespace itself, leaving only letters, digits, and
/// underscores. Deliberately aggressive: `"a b"` and `"ab"` collapse to the
/// same key, trading a few false negatives for far fewer false positives on
/// reflowed or re-punctuated content.
///
/// The key is only ever used for comparison, never displayed.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lowered = text.to_lowercase();
    let stripped = consts::NON_WORD_REGEX.replace_all(&lowered, "");
    consts::WHITESPACE_REGEX.replace_all(&stripped, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("Hello, World!", "helloworld")]
    #[case("a b", "ab")]
    #[case("  spaced\tout\ntext  ", "spacedouttext")]
    #[case("Already_lower_case", "already_lower_case")]
    #[case("Prices: £1,499.99 (incl. VAT)", "prices149999inclvat")]
    #[case("Ünïcödé — views", "ünïcödéviews")]
    fn normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn spacing_and_punctuation_variants_collapse() {
        assert_eq!(normalize("The quick, brown fox!"), normalize("the quickbrown fox"));
    }
}
