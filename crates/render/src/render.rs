use crate::Renderer;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use snapdiff_diff::{ChangeReport, Excerpt};
use std::fmt::Write;
use tracing::instrument;

impl Renderer {
    /// Renders the comparison-report fragment: one card per change
    /// category, with counts and labeled excerpts.
    #[instrument(skip_all, fields(changes = report.total()))]
    pub fn report_fragment(&self, report: &ChangeReport) -> Result<String> {
        self.report.render(&self.engine, report_values(report)).to_string().or_raise(|| ErrorKind::Template)
    }

    /// Renders the standalone results page wrapping the report fragment
    /// with the archive and live URLs that were compared.
    #[instrument(skip_all)]
    pub fn results_page(&self, archive_url: &str, live_url: &str, report: &ChangeReport) -> Result<String> {
        let fragment = self.report_fragment(report)?;
        self.results
            .render(&self.engine, upon::value! {
                archive_url: archive_url,
                live_url: live_url,
                report_html: fragment,
            })
            .to_string()
            .or_raise(|| ErrorKind::Template)
    }

    /// Renders the search form page.
    pub fn index_page(&self) -> Result<String> {
        self.index
            .render(&self.engine, upon::value! { title: "Wayback Machine Comparison Tool" })
            .to_string()
            .or_raise(|| ErrorKind::Template)
    }

    /// Plain-text summary of a report: counts per category followed by the
    /// labeled excerpts. Suited to terminals and logs.
    pub fn text_summary(&self, report: &ChangeReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "New content ({})", report.added.len());
        for excerpt in &report.added {
            let _ = writeln!(out, "  + {}: {}", excerpt.label(), excerpt.text);
        }
        let _ = writeln!(out, "Removed content ({})", report.removed.len());
        for excerpt in &report.removed {
            let _ = writeln!(out, "  - {}: {}", excerpt.label(), excerpt.text);
        }
        let _ = writeln!(out, "Modified content ({})", report.modified.len());
        for modification in &report.modified {
            let _ = writeln!(out, "  ~ before {}: {}", modification.old.label(), modification.old.text);
            let _ = writeln!(out, "    after  {}: {}", modification.new.label(), modification.new.text);
        }
        out
    }
}

fn excerpt_value(excerpt: &Excerpt) -> upon::Value {
    upon::value! {
        label: excerpt.label(),
        text: excerpt.text.as_str(),
    }
}

fn report_values(report: &ChangeReport) -> upon::Value {
    let added: Vec<upon::Value> = report.added.iter().map(excerpt_value).collect();
    let removed: Vec<upon::Value> = report.removed.iter().map(excerpt_value).collect();
    let modified: Vec<upon::Value> = report
        .modified
        .iter()
        .map(|modification| {
            upon::value! {
                old: excerpt_value(&modification.old),
                new: excerpt_value(&modification.new),
            }
        })
        .collect();
    upon::value! {
        added_count: report.added.len() as u64,
        removed_count: report.removed.len() as u64,
        modified_count: report.modified.len() as u64,
        has_added: !report.added.is_empty(),
        has_removed: !report.removed.is_empty(),
        has_modified: !report.modified.is_empty(),
        added: added,
        removed: removed,
        modified: modified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use snapdiff_diff::Modification;
    use snapdiff_extract::models::BlockKind;

    fn sample_report() -> ChangeReport {
        ChangeReport {
            added: vec![Excerpt::new(BlockKind::Paragraph, "Fresh paragraph <with> markup & text")],
            removed: vec![Excerpt::new(BlockKind::Heading2, "An old heading that went away")],
            modified: vec![Modification {
                old: Excerpt::new(BlockKind::Paragraph, "Before text of the change"),
                new: Excerpt::new(BlockKind::Paragraph, "After text of the change"),
            }],
        }
    }

    #[test]
    fn fragment_contains_counts_and_labels() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.report_fragment(&sample_report()).unwrap();
        assert!(html.contains("New Content (1)"));
        assert!(html.contains("Removed Content (1)"));
        assert!(html.contains("Modified Content (1)"));
        assert!(html.contains("<strong>P</strong>"));
        assert!(html.contains("<strong>H2</strong>"));
    }

    #[test]
    fn fragment_escapes_excerpt_markup() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.report_fragment(&sample_report()).unwrap();
        assert!(html.contains("&lt;with&gt; markup &amp; text"));
        assert!(!html.contains("<with>"));
    }

    #[rstest]
    #[case("No new content detected")]
    #[case("No removed content detected")]
    #[case("No modified content detected")]
    fn empty_categories_show_placeholder_messages(#[case] message: &str) {
        let renderer = Renderer::new().unwrap();
        let html = renderer.report_fragment(&ChangeReport::default()).unwrap();
        assert!(html.contains(message));
    }

    #[test]
    fn results_page_embeds_both_urls_and_the_fragment() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .results_page("https://web.archive.org/web/20200101/http://example.com", "http://example.com", &sample_report())
            .unwrap();
        assert!(html.contains("https://web.archive.org/web/20200101/http://example.com"));
        assert!(html.contains("comparison-report"));
    }

    #[test]
    fn index_page_contains_the_form() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.index_page().unwrap();
        assert!(html.contains("<form"));
        assert!(html.contains("name=\"url\""));
    }

    #[test]
    fn text_summary_lists_every_category() {
        let renderer = Renderer::new().unwrap();
        let summary = renderer.text_summary(&sample_report());
        assert!(summary.contains("New content (1)"));
        assert!(summary.contains("+ P: Fresh paragraph"));
        assert!(summary.contains("- H2: An old heading"));
        assert!(summary.contains("~ before P: Before text"));
    }
}
