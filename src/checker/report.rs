use crate::{EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

/// Findings accumulated over a single validation run.
///
/// Issues are blocking (they fail the run), warnings are not. Both lists
/// preserve the order in which checks recorded them. The report is local to
/// one invocation; nothing is shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    #[must_use]
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }

    /// Exit code for the run: 1 iff any issue was recorded.
    /// Warnings alone never fail validation.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.has_issues() {
            EXIT_VALIDATION_FAILED
        } else {
            EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
