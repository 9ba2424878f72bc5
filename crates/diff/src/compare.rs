//! Set-based change classification over normalized comparison keys.

use crate::models::{ChangeReport, Excerpt, Modification};
use crate::normalize::normalize;
use crate::{consts, similarity};
use snapdiff_extract::models::ContentBlock;
use std::collections::{HashMap, HashSet};
use tracing::instrument;

/// Keys shorter than this are boilerplate noise and never considered.
const MIN_KEY_CHARS: usize = 30;
/// Added/removed keys must be longer than this to count as substantial.
const SIGNIFICANT_KEY_CHARS: usize = 50;
/// Key pairs whose lengths differ by more than 25% are never compared.
const LENGTH_RATIO_FLOOR: f64 = 0.75;
/// At or below this similarity, two keys are different content entirely.
const SIMILARITY_FLOOR: f64 = 0.75;
/// At or above this similarity, two keys are the same content; differences
/// this small are noise, not rewording.
const SIMILARITY_CEILING: f64 = 0.9;
/// A reported rewording must change at least this many distinct words.
const MIN_WORD_CHANGES: usize = 5;
/// A reported rewording must shift the original text length by more than
/// this many characters.
const MIN_LENGTH_DELTA: usize = 50;

/// Classifies the differences between two extracted block sequences.
///
/// Pure and infallible: empty input on either side simply produces no
/// matches for that side, and comparing a sequence against itself produces
/// an empty report.
///
/// Classification works on normalized comparison keys (see
/// [`normalize`]). Keys shorter than 30 characters are dropped outright as
/// boilerplate. A key present on only one side is *added*/*removed* when
/// longer than 50 characters. A key unique to the new side that
/// fuzzy-matches a key unique to the old side (similarity strictly between
/// 0.75 and 0.9, after a ±25% length pre-filter) claims that pair as a
/// candidate rewording: the pair is withheld from added/removed, and each
/// block combination is reported as *modified* only when the original texts
/// differ by at least 5 distinct words and more than 50 characters of
/// length. Matches at or above 0.9 are treated as unchanged.
#[instrument(skip_all, fields(old_blocks = old.len(), new_blocks = new.len()))]
pub fn compare(old: &[ContentBlock], new: &[ContentBlock]) -> ChangeReport {
    let old_keys = KeyedBlocks::build(old);
    let new_keys = KeyedBlocks::build(new);

    let old_unique = old_keys.keys_missing_from(&new_keys);
    let new_unique = new_keys.keys_missing_from(&old_keys);

    let mut report = ChangeReport::default();
    let mut claimed_new: HashSet<&str> = HashSet::new();
    let mut claimed_old: HashSet<&str> = HashSet::new();

    // Rewordings first: a fuzzy match claims both keys, keeping the pair out
    // of added/removed even when the rewording itself is too small to report.
    let candidates = Candidates::new(&old_unique);
    for &new_key in &new_unique {
        let Some((old_key, best)) = candidates.best_match(new_key) else {
            continue;
        };
        claimed_new.insert(new_key);
        claimed_old.insert(old_key);
        if best >= SIMILARITY_CEILING {
            tracing::debug!(similarity = best, "near-identical keys treated as unchanged");
            continue;
        }
        for new_block in new_keys.blocks(new_key) {
            for old_block in old_keys.blocks(old_key) {
                if significant_rewording(old_block, new_block) {
                    report.modified.push(Modification {
                        old: Excerpt::from(*old_block),
                        new: Excerpt::from(*new_block),
                    });
                }
            }
        }
    }

    for (key, blocks) in new_keys.iter() {
        if old_keys.contains(key) || claimed_new.contains(key) {
            continue;
        }
        if key.chars().count() > SIGNIFICANT_KEY_CHARS {
            report.added.extend(blocks.iter().map(|b| Excerpt::from(*b)));
        }
    }
    for (key, blocks) in old_keys.iter() {
        if new_keys.contains(key) || claimed_old.contains(key) {
            continue;
        }
        if key.chars().count() > SIGNIFICANT_KEY_CHARS {
            report.removed.extend(blocks.iter().map(|b| Excerpt::from(*b)));
        }
    }
    tracing::debug!(
        added = report.added.len(),
        removed = report.removed.len(),
        modified = report.modified.len(),
        "comparison complete"
    );
    report
}

/// Blocks bucketed by normalized key, iterable in first-seen order.
struct KeyedBlocks<'a> {
    order: Vec<String>,
    map: HashMap<String, Vec<&'a ContentBlock>>,
}
impl<'a> KeyedBlocks<'a> {
    fn build(blocks: &'a [ContentBlock]) -> Self {
        let mut order = Vec::new();
        let mut map: HashMap<String, Vec<&'a ContentBlock>> = HashMap::new();
        for block in blocks {
            let key = normalize(&block.text);
            if key.chars().count() < MIN_KEY_CHARS {
                continue;
            }
            if let Some(bucket) = map.get_mut(&key) {
                bucket.push(block);
            } else {
                order.push(key.clone());
                map.insert(key, vec![block]);
            }
        }
        Self { order, map }
    }

    fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn blocks(&self, key: &str) -> &[&'a ContentBlock] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &Vec<&'a ContentBlock>)> {
        self.order.iter().map(|key| (key.as_str(), &self.map[key]))
    }

    fn keys_missing_from(&self, other: &KeyedBlocks) -> Vec<&str> {
        self.order.iter().map(String::as_str).filter(|key| !other.contains(key)).collect()
    }
}

/// Fuzzy-match candidates sorted by key length.
///
/// The ±25% length pre-filter means only a contiguous slice of the sorted
/// list can ever match a given key, which keeps the best-match search
/// practical on large pages without changing which candidates are eligible.
struct Candidates<'k> {
    by_len: Vec<(usize, &'k str)>,
}
impl<'k> Candidates<'k> {
    fn new(keys: &[&'k str]) -> Self {
        let mut by_len: Vec<(usize, &'k str)> = keys.iter().map(|key| (key.chars().count(), *key)).collect();
        by_len.sort_by_key(|(len, _)| *len);
        Self { by_len }
    }

    /// The candidate most similar to `key`, if any scores strictly above the
    /// similarity floor.
    fn best_match(&self, key: &str) -> Option<(&'k str, f64)> {
        let len = key.chars().count();
        let lo = self.by_len.partition_point(|(l, _)| (*l as f64) < len as f64 * LENGTH_RATIO_FLOOR);
        let hi = self.by_len.partition_point(|(l, _)| (*l as f64) <= len as f64 / LENGTH_RATIO_FLOOR);
        let mut best: Option<(&'k str, f64)> = None;
        for (candidate_len, candidate) in &self.by_len[lo..hi] {
            let length_ratio = len.min(*candidate_len) as f64 / len.max(*candidate_len) as f64;
            if length_ratio < LENGTH_RATIO_FLOOR {
                continue;
            }
            let similarity = similarity::ratio(key, candidate);
            if similarity > SIMILARITY_FLOOR && best.is_none_or(|(_, s)| similarity > s) {
                best = Some((candidate, similarity));
            }
        }
        best
    }
}

/// Secondary verification on the *original* (non-normalized) texts: guards
/// against a fuzzy key match being two genuinely different snippets of
/// similar shape, or a change too trivial to report.
fn significant_rewording(old: &ContentBlock, new: &ContentBlock) -> bool {
    let old_words = word_set(&old.text);
    let new_words = word_set(&new.text);
    let word_changes = new_words.difference(&old_words).count() + old_words.difference(&new_words).count();
    let length_delta = new.text.chars().count().abs_diff(old.text.chars().count());
    word_changes >= MIN_WORD_CHANGES && length_delta > MIN_LENGTH_DELTA
}

fn word_set(text: &str) -> HashSet<String> {
    consts::WORD_REGEX.find_iter(&text.to_lowercase()).map(|m| m.as_str().to_string()).collect()
}
