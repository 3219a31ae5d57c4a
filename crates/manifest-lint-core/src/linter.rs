//! Linter for orchestrating check execution over one manifest.

use crate::check::{Check, CheckBox};
use crate::config::Config;
use crate::context::ManifestContext;
use crate::control;
use crate::types::{Diagnostic, DiagnosticSink, LintResult};

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while linting a manifest file.
#[derive(Debug, Error)]
pub enum LintError {
    /// IO error reading a manifest.
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    checks: Vec<CheckBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with no checks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a check to the linter.
    #[must_use]
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Adds a boxed check to the linter.
    #[must_use]
    pub fn check_box(mut self, check: CheckBox) -> Self {
        self.checks.push(check);
        self
    }

    /// Adds several boxed checks, keeping their order.
    #[must_use]
    pub fn checks<I>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = CheckBox>,
    {
        self.checks.extend(checks);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            checks: self.checks,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs registered checks over manifests.
///
/// Use [`Linter::builder()`] to construct an instance. Every call lints one
/// manifest from scratch; nothing carries over between calls.
pub struct Linter {
    checks: Vec<CheckBox>,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lints one manifest and returns its diagnostics.
    ///
    /// Checks run in registration order; each check's diagnostics stay in
    /// line order.
    #[must_use]
    pub fn lint(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.lint_into(ctx, &mut diagnostics);
        diagnostics
    }

    /// Lints one manifest, forwarding diagnostics to `sink`.
    pub fn lint_into(&self, ctx: &ManifestContext, sink: &mut dyn DiagnosticSink) {
        for check in &self.checks {
            if !self.config.is_rule_enabled(check.name()) {
                debug!("Skipping disabled check: {}", check.name());
                continue;
            }

            let severity = self.config.rule_severity(check.name());
            for mut diagnostic in check.check(ctx) {
                if Self::is_suppressed(ctx, &diagnostic) {
                    debug!(
                        "Suppressed {} on line {}",
                        diagnostic.check, diagnostic.location.line
                    );
                    continue;
                }
                if let Some(severity) = severity {
                    diagnostic.severity = severity;
                }
                sink.record(diagnostic);
            }
        }
    }

    /// Lints manifest text that was already loaded.
    #[must_use]
    pub fn lint_source(&self, path: &Path, content: &str) -> LintResult {
        let ctx = ManifestContext::new(path, content);
        let mut result = LintResult::new();
        self.lint_into(&ctx, &mut result);
        result.files_checked = 1;
        result
    }

    /// Reads and lints one manifest file.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LintError> {
        debug!("Linting: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| LintError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            warn!("{} is not valid UTF-8; invalid bytes replaced", path.display());
        }

        Ok(self.lint_source(path, &content))
    }

    /// Checks whether a control comment on the diagnostic's line ignores it.
    fn is_suppressed(ctx: &ManifestContext, diagnostic: &Diagnostic) -> bool {
        ctx.line(diagnostic.location.line)
            .is_some_and(|line| control::is_ignored(line.text, &diagnostic.check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LineSource;
    use crate::types::Severity;

    /// Flags every line containing "bad".
    struct NoBad;

    impl Check for NoBad {
        fn name(&self) -> &'static str {
            "no_bad"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
            ctx.lines()
                .iter()
                .filter(|l| l.text.contains("bad"))
                .map(|l| {
                    Diagnostic::new(
                        self.code(),
                        self.name(),
                        Severity::Warning,
                        ctx.location(l.number),
                        "bad found",
                    )
                })
                .collect()
        }
    }

    /// Flags the first line unconditionally.
    struct AlwaysFirst;

    impl Check for AlwaysFirst {
        fn name(&self) -> &'static str {
            "always_first"
        }
        fn code(&self) -> &'static str {
            "TEST002"
        }
        fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.code(),
                self.name(),
                Severity::Error,
                ctx.location(1),
                "first",
            )]
        }
    }

    const SOURCE: &str = "bad\nok\nbad # lint:ignore:no_bad\nbad\n";

    #[test]
    fn runs_checks_in_registration_order() {
        let linter = Linter::builder().check(NoBad).check(AlwaysFirst).build();
        assert_eq!(linter.check_count(), 2);

        let result = linter.lint_source(Path::new("a.pp"), SOURCE);
        let summary: Vec<(&str, usize)> = result
            .diagnostics
            .iter()
            .map(|d| (d.check.as_str(), d.location.line))
            .collect();
        assert_eq!(
            summary,
            vec![("no_bad", 1), ("no_bad", 4), ("always_first", 1)]
        );
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn control_comment_only_suppresses_named_check() {
        let linter = Linter::builder().check(NoBad).build();
        let ctx = ManifestContext::new(Path::new("a.pp"), SOURCE);
        let lines: Vec<usize> = linter
            .lint(&ctx)
            .iter()
            .map(|d| d.location.line)
            .collect();
        assert_eq!(lines, vec![1, 4]);
    }

    #[test]
    fn disabled_checks_are_skipped() {
        let config = Config::parse("[rules.no_bad]\nenabled = false\n").expect("config");
        let linter = Linter::builder()
            .check(NoBad)
            .check(AlwaysFirst)
            .config(config)
            .build();
        let result = linter.lint_source(Path::new("a.pp"), SOURCE);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].check, "always_first");
    }

    #[test]
    fn severity_override_applies() {
        let config = Config::parse("[rules.no_bad]\nseverity = \"error\"\n").expect("config");
        let linter = Linter::builder().check(NoBad).config(config).build();
        let result = linter.lint_source(Path::new("a.pp"), SOURCE);
        assert!(result
            .diagnostics
            .iter()
            .all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let linter = Linter::builder().check(NoBad).check(AlwaysFirst).build();
        let ctx = ManifestContext::new(Path::new("a.pp"), SOURCE);
        assert_eq!(linter.lint(&ctx), linter.lint(&ctx));
    }

    #[test]
    fn lint_file_reports_missing_file() {
        let linter = Linter::builder().check(NoBad).build();
        let err = linter
            .lint_file(Path::new("/nonexistent/site.pp"))
            .expect_err("missing file should fail");
        assert!(matches!(err, LintError::Io { .. }));
    }
}
