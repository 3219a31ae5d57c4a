//! Check that forbids hard tab characters.
//!
//! Reports one error per line, at the first tab on that line.

use manifest_lint_core::{Check, Diagnostic, LineSource, ManifestContext, Severity};

/// Check code for hard_tabs.
pub const CODE: &str = "ML001";

/// Check name for hard_tabs.
pub const NAME: &str = "hard_tabs";

/// Forbids horizontal tab characters anywhere in a line.
#[derive(Debug, Clone)]
pub struct HardTabs {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for HardTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl HardTabs {
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

impl Check for HardTabs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids tab characters"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
        ctx.lines()
            .iter()
            .filter_map(|line| {
                let idx = line.text.chars().position(|c| c == '\t')?;
                Some(Diagnostic::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(line.number).with_column(idx + 1),
                    "tab character found",
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check_code(code: &str) -> Vec<Diagnostic> {
        let ctx = ManifestContext::new(Path::new("test.pp"), code);
        HardTabs::new().check(&ctx)
    }

    #[test]
    fn test_detects_leading_tab() {
        let diagnostics = check_code("class foo {\n\tinclude bar\n}\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].message, "tab character found");
        assert_eq!(diagnostics[0].location.line, 2);
        assert_eq!(diagnostics[0].location.column, Some(1));
    }

    #[test]
    fn test_one_diagnostic_per_line_at_first_tab() {
        let diagnostics = check_code("  foo\t=>\tbar,\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.column, Some(6));
    }

    #[test]
    fn test_column_counts_characters() {
        let diagnostics = check_code("\u{e9}\u{e9}\tx\n");
        assert_eq!(diagnostics[0].location.column, Some(3));
    }

    #[test]
    fn test_allows_spaces() {
        assert!(check_code("class foo {\n  include bar\n}\n").is_empty());
    }

    #[test]
    fn test_reports_every_tabbed_line() {
        let lines: Vec<usize> = check_code("\ta\nb\n\tc\n")
            .iter()
            .map(|d| d.location.line)
            .collect();
        assert_eq!(lines, vec![1, 3]);
    }
}
