use serde::Serialize;

use crate::checker::ValidationReport;
use crate::error::Result;

use super::OutputFormatter;

/// Machine-readable report for CI pipelines.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    issues: &'a [String],
    warnings: &'a [String],
}

#[derive(Serialize)]
struct Summary {
    issues: usize,
    warnings: usize,
    passed: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                issues: report.issues().len(),
                warnings: report.warnings().len(),
                passed: !report.has_issues(),
            },
            issues: report.issues(),
            warnings: report.warnings(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
