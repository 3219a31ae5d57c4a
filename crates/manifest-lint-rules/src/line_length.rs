//! Check that warns about lines longer than 80 characters.
//!
//! # Rationale
//!
//! Long lines hurt readability in diffs and terminals. Lines containing a
//! `puppet://` URL are exempt because splitting the URL would hurt more.
//!
//! Length is measured in Unicode codepoints, so a multi-byte character
//! counts once.

use manifest_lint_core::{Check, Diagnostic, LineSource, ManifestContext, Severity};

/// Check code for 80chars.
pub const CODE: &str = "ML003";

/// Check name for 80chars.
pub const NAME: &str = "80chars";

/// Maximum number of characters allowed on a line.
pub const MAX_LENGTH: usize = 80;

/// Substring that exempts a line from the length limit.
pub const URL_EXEMPTION: &str = "puppet://";

/// Warns about lines longer than [`MAX_LENGTH`] characters.
#[derive(Debug, Clone)]
pub struct LineLength {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for LineLength {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLength {
    /// Creates a new check with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Check for LineLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Warns about lines longer than 80 characters"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
        ctx.lines()
            .iter()
            .filter(|line| !line.text.contains(URL_EXEMPTION))
            .filter(|line| line.text.chars().count() > MAX_LENGTH)
            .map(|line| {
                Diagnostic::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(line.number).with_column(MAX_LENGTH),
                    "line has more than 80 characters",
                )
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
        LineLength::new().check(&ctx)
    }

    #[test]
    fn test_allows_exactly_80() {
        assert!(check_code(&"a".repeat(80)).is_empty());
    }

    #[test]
    fn test_detects_81() {
        let diagnostics = check_code(&"a".repeat(81));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].message, "line has more than 80 characters");
        assert_eq!(diagnostics[0].location.column, Some(80));
    }

    #[test]
    fn test_counts_codepoints_not_bytes() {
        // 80 two-byte characters are 160 bytes but only 80 codepoints.
        assert!(check_code(&"\u{e9}".repeat(80)).is_empty());
        assert_eq!(check_code(&"\u{e9}".repeat(81)).len(), 1);
    }

    #[test]
    fn test_exempts_puppet_urls_anywhere() {
        let line = format!("{}puppet://modules/foo/bar", "x".repeat(100));
        assert!(check_code(&line).is_empty());
    }

    #[test]
    fn test_other_urls_not_exempt() {
        let line = format!("  source => 'http://{}',", "x".repeat(80));
        assert_eq!(check_code(&line).len(), 1);
    }
}
