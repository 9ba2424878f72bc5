//! The simpler, historical pairwise matcher.
//!
//! Predates the normalized-key classifier in [`compare`](crate::compare) and
//! disagrees with it at the edges: it works on raw block text (so
//! whitespace and punctuation shifts influence similarity), applies no key
//! length filters, and uses a single caller-tunable threshold to split
//! added/removed from modified. Kept as an explicit alternative mode rather
//! than silently retired.

use crate::models::{ChangeReport, Excerpt, Modification};
use crate::similarity;
use snapdiff_extract::models::ContentBlock;
use tracing::instrument;

/// Threshold used when the caller has no opinion.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;
/// At or above this similarity a pair is close enough to be unchanged.
const UNCHANGED_FLOOR: f64 = 0.95;

/// Classifies changes by best pairwise raw-text similarity.
///
/// Each new block is scored against every old block: below
/// `similarity_threshold` it is *added*, between the threshold and 0.95 it
/// is *modified* against its best match, at or above 0.95 it is unchanged.
/// Old blocks whose best score stays below the threshold are *removed*.
#[instrument(skip_all, fields(old_blocks = old.len(), new_blocks = new.len(), similarity_threshold))]
pub fn compare(old: &[ContentBlock], new: &[ContentBlock], similarity_threshold: f64) -> ChangeReport {
    let mut report = ChangeReport::default();
    for new_block in new {
        let mut best: Option<(&ContentBlock, f64)> = None;
        for old_block in old {
            let similarity = similarity::ratio(&new_block.text, &old_block.text);
            if best.is_none_or(|(_, s)| similarity > s) {
                best = Some((old_block, similarity));
            }
        }
        match best {
            Some((_, similarity)) if similarity >= UNCHANGED_FLOOR => {},
            Some((old_block, similarity)) if similarity >= similarity_threshold => {
                report.modified.push(Modification {
                    old: Excerpt::from(old_block),
                    new: Excerpt::from(new_block),
                });
            },
            _ => report.added.push(Excerpt::from(new_block)),
        }
    }
    for old_block in old {
        let best = new.iter().map(|n| similarity::ratio(&old_block.text, &n.text)).fold(0.0_f64, f64::max);
        if best < similarity_threshold {
            report.removed.push(Excerpt::from(old_block));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdiff_extract::models::BlockKind;

    fn paragraph(text: &str) -> ContentBlock {
        ContentBlock::new(BlockKind::Paragraph, text)
    }

    #[test]
    fn identical_sequences_are_unchanged() {
        let blocks = vec![paragraph("The quick brown fox jumps over the lazy dog near the river bank today.")];
        assert!(compare(&blocks, &blocks, DEFAULT_SIMILARITY_THRESHOLD).is_empty());
    }

    #[test]
    fn new_content_with_no_counterpart_is_added() {
        let new = vec![paragraph("A brand new paragraph that exists nowhere in the old document at all.")];
        let report = compare(&[], &new, DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(report.added.len(), 1);
        assert!(report.removed.is_empty());
        assert!(report.modified.is_empty());
    }

    #[test]
    fn old_content_with_no_counterpart_is_removed() {
        let old = vec![paragraph("An old paragraph that exists nowhere in the new document at all, sadly.")];
        let report = compare(&old, &[], DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(report.removed.len(), 1);
        assert!(report.added.is_empty());
    }

    #[test]
    fn small_rewording_is_modified() {
        // Unlike the normalized-key classifier, this variant has no word or
        // length gates, so a one-clause rewording is reported.
        let old = vec![paragraph("The quick brown fox jumps over the lazy dog near the river bank today.")];
        let new = vec![paragraph("The quick brown fox jumps over the lazy dog near the riverbank yesterday afternoon.")];
        let report = compare(&old, &new, DEFAULT_SIMILARITY_THRESHOLD);
        assert!(report.added.is_empty());
        assert!(report.removed.is_empty());
        assert_eq!(report.modified.len(), 1);
        assert!(report.modified[0].new.text.contains("riverbank"));
    }

    #[test]
    fn tiny_whitespace_shift_is_unchanged() {
        let old = vec![paragraph("The quick brown fox jumps over the lazy dog near the river bank today.")];
        let new = vec![paragraph("The quick brown fox jumps over the lazy  dog near the river bank today.")];
        assert!(compare(&old, &new, DEFAULT_SIMILARITY_THRESHOLD).is_empty());
    }

    #[test]
    fn threshold_gates_the_added_modified_boundary() {
        let old = vec![paragraph("The quick brown fox jumps over the lazy dog near the river bank today.")];
        let new = vec![paragraph("The quick brown fox jumps over the lazy dog near the riverbank yesterday afternoon.")];
        // With an impossible threshold the same pair falls through to added
        // and the old block to removed.
        let report = compare(&old, &new, 0.999);
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.removed.len(), 1);
        assert!(report.modified.is_empty());
    }
}
