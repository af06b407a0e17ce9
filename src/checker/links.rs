use std::io::Write;

use regex::Regex;

use super::report::ValidationReport;

/// Acronyms that are legitimately written in all caps inside link text.
/// Matched after trimming, case-sensitive.
const ACRONYM_ALLOWLIST: [&str; 11] = [
    "SSL", "SSH", "HTTP", "HTTPS", "API", "DNS", "VPS", "CDN", "OWASP", "LTS", "RSS",
];

/// Checks that every external anchor opens in a new tab.
///
/// Counts anchors whose href starts with `http://` or `https://`, then the
/// subset that also carries `target="_blank"` immediately after the href.
/// Any difference between the two counts is a blocking issue.
pub struct ExternalLinkCheck {
    external_pattern: Regex,
    with_target_pattern: Regex,
}

impl Default for ExternalLinkCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalLinkCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            external_pattern: Regex::new(r#"<a href="https?://[^"]+"#).expect("Invalid regex"),
            with_target_pattern: Regex::new(r#"<a href="https?://[^"]+" target="_blank""#)
                .expect("Invalid regex"),
        }
    }

    pub fn run(&self, content: &str, report: &mut ValidationReport, progress: &mut dyn Write) {
        writeln!(progress, "🔗 Checking external links...").ok();

        let external = self.external_pattern.find_iter(content).count();
        let with_target = self.with_target_pattern.find_iter(content).count();

        writeln!(progress, "   External links: {external}").ok();
        writeln!(progress, "   With target=\"_blank\": {with_target}").ok();

        if external == with_target {
            writeln!(progress, "   ✅ All external links have target=\"_blank\"").ok();
        } else {
            report.push_issue(format!(
                "❌ {} external links missing target=\"_blank\"",
                external - with_target
            ));
        }
    }
}

/// Flags link text written in all caps unless it is a known acronym.
pub struct CapsLinkTextCheck {
    caps_pattern: Regex,
}

impl Default for CapsLinkTextCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl CapsLinkTextCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            caps_pattern: Regex::new(r#"href="[^"]*">([A-Z][A-Z ]+)</a>"#).expect("Invalid regex"),
        }
    }

    pub fn run(&self, content: &str, report: &mut ValidationReport, progress: &mut dyn Write) {
        writeln!(progress, "🔤 Checking link text formatting...").ok();

        let suspicious: Vec<&str> = self
            .caps_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .filter(|text| !ACRONYM_ALLOWLIST.contains(&text.trim()))
            .collect();

        if suspicious.is_empty() {
            writeln!(progress, "   ✅ No suspicious ALL CAPS link text").ok();
        } else {
            for text in suspicious {
                report.push_warning(format!("⚠️  Suspicious ALL CAPS link text: '{text}'"));
            }
        }
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
