//! Character-level sequence similarity.
//!
//! Implements the conventional longest-matching-block diff ratio: find the
//! longest run of characters common to both strings, recurse on the pieces
//! to the left and right, and score `2·M / (len(a) + len(b))` where `M` is
//! the total number of matched characters. The result is 1.0 for identical
//! strings and 0.0 for strings with nothing in common.

use std::collections::HashMap;

/// Similarity of two strings in `0.0..=1.0`.
///
/// Two empty strings are considered identical (1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_chars(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total characters covered by the matching blocks of `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        positions.entry(*ch).or_default().push(j);
    }
    // Regions still to be matched, processed without recursion.
    let mut regions = vec![(0usize, a.len(), 0usize, b.len())];
    let mut matched = 0;
    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let (i, j, size) = longest_match(a, &positions, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        regions.push((alo, i, blo, j));
        regions.push((i + size, ahi, j + size, bhi));
    }
    matched
}

/// Longest block of characters common to `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Dynamic programming over one row at a time: `runs[j]` holds the length of
/// the common run ending at `a[i]`/`b[j]`. Among equally long blocks the
/// earliest one wins.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);
    let mut runs: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs = HashMap::new();
        if let Some(js) = positions.get(&a[i]) {
            for &j in js {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let run = j.checked_sub(1).and_then(|prev| runs.get(&prev)).copied().unwrap_or(0) + 1;
                next_runs.insert(j, run);
                if run > best_size {
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                    best_size = run;
                }
            }
        }
        runs = next_runs;
    }
    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", 1.0)]
    #[case("abc", "", 0.0)]
    #[case("", "abc", 0.0)]
    #[case("identical", "identical", 1.0)]
    #[case("abcd", "bcde", 0.75)]
    #[case("tide", "diet", 0.25)]
    fn reference_values(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
        assert!((ratio(a, b) - expected).abs() < 1e-9, "ratio({a:?}, {b:?}) = {}", ratio(a, b));
    }

    #[test]
    fn symmetric_on_disjoint_and_identical_inputs() {
        assert_eq!(ratio("aaaa", "bbbb"), 0.0);
        assert_eq!(ratio("bbbb", "aaaa"), 0.0);
    }

    #[test]
    fn appended_suffix_scores_proportionally() {
        // matched = len(base), so ratio = 2L / (2L + suffix).
        let base = "abcdefghij";
        let with_suffix = "abcdefghijKLMNO";
        let expected = 2.0 * 10.0 / 25.0;
        assert!((ratio(base, with_suffix) - expected).abs() < 1e-9);
    }

    #[test]
    fn repeated_characters_do_not_overcount() {
        // "aaab" vs "baaa": longest block "aaa", then "b" on opposite sides
        // cannot both match. matched = 3, ratio = 6/8.
        assert!((ratio("aaab", "baaa") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn unicode_chars_are_single_units() {
        assert_eq!(ratio("héllo", "héllo"), 1.0);
        assert!(ratio("héllo", "hello") < 1.0);
    }
}
