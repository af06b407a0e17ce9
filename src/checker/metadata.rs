use std::io::Write;

use indexmap::IndexSet;
use regex::Regex;

use super::report::ValidationReport;

/// Checks that every `YYYY-MM-DD` date in a meta content attribute agrees.
///
/// A divergence here is a blocking issue: a wrong published date propagates
/// into feeds and search metadata.
pub struct DateConsistencyCheck {
    date_pattern: Regex,
}

impl Default for DateConsistencyCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl DateConsistencyCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            date_pattern: Regex::new(r#"<meta content="(\d{4}-\d{2}-\d{2})"#)
                .expect("Invalid regex"),
        }
    }

    pub fn run(&self, content: &str, report: &mut ValidationReport, progress: &mut dyn Write) {
        writeln!(progress, "📅 Checking date formats...").ok();

        let dates: Vec<&str> = self
            .date_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        if dates.is_empty() {
            return;
        }

        let unique: IndexSet<&str> = dates.iter().copied().collect();
        if unique.len() == 1 {
            writeln!(progress, "   ✅ Consistent date: {}", dates[0]).ok();
        } else {
            report.push_issue(format!(
                "❌ Multiple dates found: {}",
                format_distinct(&unique)
            ));
        }
    }
}

/// Checks that every `N min read` mention agrees.
///
/// Unlike the date check this is only a warning: an inconsistent read time
/// is a cosmetic slip, not broken metadata.
pub struct ReadTimeCheck {
    read_time_pattern: Regex,
}

impl Default for ReadTimeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadTimeCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            read_time_pattern: Regex::new(r"(\d+ min read)").expect("Invalid regex"),
        }
    }

    pub fn run(&self, content: &str, report: &mut ValidationReport, progress: &mut dyn Write) {
        writeln!(progress, "⏱️  Checking read time...").ok();

        let times: Vec<&str> = self
            .read_time_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        if times.is_empty() {
            return;
        }

        let unique: IndexSet<&str> = times.iter().copied().collect();
        if unique.len() == 1 {
            writeln!(progress, "   ✅ Consistent read time: {}", times[0]).ok();
        } else {
            report.push_warning(format!(
                "⚠️  Multiple read times found: {}",
                format_distinct(&unique)
            ));
        }
    }
}

/// Renders a distinct-value set in first-seen order, e.g. `{a, b}`.
fn format_distinct(values: &IndexSet<&str>) -> String {
    let joined = values.iter().copied().collect::<Vec<_>>().join(", ");
    format!("{{{joined}}}")
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
