mod images;
mod links;
mod metadata;
mod report;
mod toc;

pub use images::{ImageDimensionCheck, LOGO_ASSET};
pub use links::{CapsLinkTextCheck, ExternalLinkCheck};
pub use metadata::{DateConsistencyCheck, ReadTimeCheck};
pub use report::ValidationReport;
pub use toc::TocIntegrityCheck;

use std::io::Write;

/// Runs every article check in a fixed order over one immutable document.
///
/// Checks are independent passes over the same text; none of them can abort
/// the run, and a check that finds nothing contributes nothing. Findings go
/// into the returned [`ValidationReport`]; per-check progress lines go to the
/// injected writer (stdout in the binary, a buffer or sink in tests).
pub struct ArticleChecker {
    images: ImageDimensionCheck,
    external_links: ExternalLinkCheck,
    caps_links: CapsLinkTextCheck,
    dates: DateConsistencyCheck,
    read_time: ReadTimeCheck,
    toc: TocIntegrityCheck,
}

impl Default for ArticleChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            images: ImageDimensionCheck::new(),
            external_links: ExternalLinkCheck::new(),
            caps_links: CapsLinkTextCheck::new(),
            dates: DateConsistencyCheck::new(),
            read_time: ReadTimeCheck::new(),
            toc: TocIntegrityCheck::new(),
        }
    }

    /// Executes all six checks and returns the accumulated report.
    ///
    /// The order is part of the observable output contract: image
    /// dimensions, external links, link text, dates, read time, TOC.
    pub fn validate(&self, content: &str, progress: &mut dyn Write) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.images.run(content, &mut report, progress);
        writeln!(progress).ok();
        self.external_links.run(content, &mut report, progress);
        writeln!(progress).ok();
        self.caps_links.run(content, &mut report, progress);
        writeln!(progress).ok();
        self.dates.run(content, &mut report, progress);
        writeln!(progress).ok();
        self.read_time.run(content, &mut report, progress);
        writeln!(progress).ok();
        self.toc.run(content, &mut report, progress);

        report
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
