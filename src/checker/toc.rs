use std::io::Write;

use regex::Regex;

use super::report::ValidationReport;

/// Verifies that every table-of-contents link resolves to an anchor.
///
/// Only the first `<div class="table-of-contents">` container is inspected,
/// and its span ends at the first closing `</div>` (non-greedy). Each
/// in-page target inside it must have a matching `id="..."` somewhere in the
/// full document. A document without the container skips silently.
pub struct TocIntegrityCheck {
    container_pattern: Regex,
    anchor_pattern: Regex,
}

impl Default for TocIntegrityCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl TocIntegrityCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            container_pattern: Regex::new(r#"(?s)<div class="table-of-contents">.*?</div>"#)
                .expect("Invalid regex"),
            anchor_pattern: Regex::new(r##"href="#([^"]+)""##).expect("Invalid regex"),
        }
    }

    pub fn run(&self, content: &str, report: &mut ValidationReport, progress: &mut dyn Write) {
        writeln!(progress, "📑 Checking Table of Contents...").ok();

        let Some(container) = self.container_pattern.find(content) else {
            return;
        };

        let targets: Vec<&str> = self
            .anchor_pattern
            .captures_iter(container.as_str())
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        writeln!(progress, "   TOC entries: {}", targets.len()).ok();

        let missing: Vec<&str> = targets
            .into_iter()
            .filter(|id| !content.contains(&format!("id=\"{id}\"")))
            .collect();

        if missing.is_empty() {
            writeln!(progress, "   ✅ All TOC links have target IDs").ok();
        } else {
            report.push_issue(format!(
                "❌ TOC links with missing target IDs: [{}]",
                missing.join(", ")
            ));
        }
    }
}

#[cfg(test)]
#[path = "toc_tests.rs"]
mod tests;
