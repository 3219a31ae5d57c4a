//! Check that requires two-space soft tabs.

use manifest_lint_core::{Check, Diagnostic, LineSource, ManifestContext, Severity};

/// Check code for 2sp_soft_tabs.
pub const CODE: &str = "ML004";

/// Check name for 2sp_soft_tabs.
pub const NAME: &str = "2sp_soft_tabs";

/// Requires the leading run of spaces to have even length.
///
/// Only spaces anchored at the start of the line are counted; a line that
/// starts with a tab has an empty run and is left to [`crate::HardTabs`].
#[derive(Debug, Clone)]
pub struct SoftTabs {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SoftTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftTabs {
    /// Creates a new check with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Check for SoftTabs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires indentation in multiples of two spaces"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
        ctx.lines()
            .iter()
            .filter(|line| leading_spaces(line.text) % 2 == 1)
            .map(|line| {
                Diagnostic::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(line.number),
                    "two-space soft tabs not used",
                )
            })
            .collect()
    }
}

/// Length of the run of spaces at the start of `text`.
fn leading_spaces(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b' ').count()
}
