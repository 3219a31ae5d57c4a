//! Check that forbids lines ending in a space.

use manifest_lint_core::{Check, Diagnostic, LineSource, ManifestContext, Severity};

/// Check code for trailing_whitespace.
pub const CODE: &str = "ML002";

/// Check name for trailing_whitespace.
pub const NAME: &str = "trailing_whitespace";

/// Forbids trailing spaces.
///
/// Only a plain space as the last character counts; a line ending in a tab
/// is left to [`crate::HardTabs`].
#[derive(Debug, Clone)]
pub struct TrailingWhitespace {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for TrailingWhitespace {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailingWhitespace {
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

impl Check for TrailingWhitespace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids trailing whitespace"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
        ctx.lines()
            .iter()
            .filter(|line| line.text.ends_with(' '))
            .map(|line| {
                // The last character is the space, so its column is the length.
                let column = line.text.chars().count();
                Diagnostic::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(line.number).with_column(column),
                    "trailing whitespace found",
                )
            })
            .collect()
    }
}
