//! Core types for manifest lines, diagnostics and results.

use miette::{LabeledSpan, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic or advisory issue.
    Warning,
    /// Definite style violation.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One line of a manifest with its terminator stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    /// Line text without the trailing `\n` or `\r\n`.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Creates a new line.
    #[must_use]
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }
}

/// Position of a diagnostic inside a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Manifest path as given to the linter.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed), when the check reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Location {
    /// Creates a location without a column.
    #[must_use]
    pub fn new(file: PathBuf, line: usize) -> Self {
        Self {
            file,
            line,
            column: None,
        }
    }

    /// Sets the 1-indexed column.
    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)?;
        if let Some(column) = self.column {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

/// A style issue reported by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Check code (e.g., "ML001").
    pub code: String,
    /// Check name (e.g., "hard_tabs").
    pub check: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Where the issue was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        check: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            check: check.into(),
            severity,
            location,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.code, self.message
        )
    }
}

/// Receives diagnostics one at a time.
///
/// Within one check, diagnostics are recorded in line order.
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A diagnostic paired with its manifest source for rich rendering.
///
/// Debug-printing a `miette::Report` built from this value draws the
/// offending line with a labeled span.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    code: String,
    severity: Severity,
    label: String,
    span: SourceSpan,
    manifest: NamedSource<String>,
}

impl DiagnosticReport {
    /// Builds a report for `diagnostic` found in `content`.
    ///
    /// Diagnostics without a column span the whole line.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, content: &str) -> Self {
        let (offset, length) =
            span_for(content, diagnostic.location.line, diagnostic.location.column);
        Self {
            message: diagnostic.message.clone(),
            code: format!("{}({})", diagnostic.check, diagnostic.code),
            severity: diagnostic.severity,
            label: diagnostic.check.clone(),
            span: SourceSpan::from((offset, length)),
            manifest: NamedSource::new(
                diagnostic.location.file.display().to_string(),
                content.to_string(),
            ),
        }
    }
}

impl miette::Diagnostic for DiagnosticReport {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Warning => miette::Severity::Warning,
            Severity::Error => miette::Severity::Error,
        })
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.manifest)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

/// Computes a byte `(offset, length)` span for a 1-indexed line and column.
///
/// The column counts characters, so it is translated to a byte position
/// within the line before being added to the line's start offset.
fn span_for(content: &str, line: usize, column: Option<usize>) -> (usize, usize) {
    let mut offset = 0;
    for (i, text) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let body = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
            return match column {
                Some(column) => {
                    let start = body
                        .char_indices()
                        .nth(column.saturating_sub(1))
                        .map_or(body.len(), |(idx, _)| idx);
                    let width = body[start..].chars().next().map_or(0, char::len_utf8);
                    (offset + start, width)
                }
                None => (offset, body.len()),
            };
        }
        offset += text.len();
    }
    (offset, 0)
}

/// Result of linting one or more manifests.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of manifests checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if any diagnostics meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Counts diagnostics as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        (errors, self.diagnostics.len() - errors)
    }

    /// Adds diagnostics from another result.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.files_checked += other.files_checked;
    }
}

impl DiagnosticSink for LintResult {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
