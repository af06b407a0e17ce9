use std::io::Write;

use crate::checker::ValidationReport;
use crate::error::Result;

use super::OutputFormatter;

const SEPARATOR_WIDTH: usize = 60;

/// Renders the human-readable summary block printed after all checks run.
///
/// The layout (separator lines, block labels, three-space indent per
/// finding) is an observable contract; scripts and operators grep it.
pub struct TextFormatter;

impl TextFormatter {
    fn write_findings(output: &mut Vec<u8>, label: &str, findings: &[String]) {
        writeln!(output).ok();
        writeln!(output, "{label} ({}):", findings.len()).ok();
        for finding in findings {
            writeln!(output, "   {finding}").ok();
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut output = Vec::new();
        let separator = "=".repeat(SEPARATOR_WIDTH);

        writeln!(output).ok();
        writeln!(output, "{separator}").ok();
        writeln!(output, "📊 VALIDATION SUMMARY").ok();
        writeln!(output, "{separator}").ok();

        if report.is_clean() {
            writeln!(output, "✅ All checks passed! Article is ready for publication.").ok();
        } else {
            if !report.issues().is_empty() {
                Self::write_findings(&mut output, "❌ CRITICAL ISSUES", report.issues());
            }
            if !report.warnings().is_empty() {
                Self::write_findings(&mut output, "⚠️  WARNINGS", report.warnings());
            }
            writeln!(output).ok();
            writeln!(output, "{separator}").ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
