//! Check trait for defining style checks.

use crate::context::ManifestContext;
use crate::types::{Diagnostic, Severity};

/// A style check run over the lines of one manifest.
///
/// Checks are immutable: any state a check needs while scanning lives in
/// locals of [`Check::check`], so one instance can run over many manifests.
///
/// # Example
///
/// ```ignore
/// use manifest_lint_core::{Check, Diagnostic, LineSource, ManifestContext, Severity};
///
/// pub struct NoCarriageReturn;
///
/// impl Check for NoCarriageReturn {
///     fn name(&self) -> &'static str { "no_carriage_return" }
///     fn code(&self) -> &'static str { "ML100" }
///
///     fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
///         ctx.lines()
///             .iter()
///             .filter(|line| line.text.contains('\r'))
///             .map(|line| Diagnostic::new(
///                 self.code(),
///                 self.name(),
///                 Severity::Error,
///                 ctx.location(line.number),
///                 "carriage return found",
///             ))
///             .collect()
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Returns the stable name of this check (e.g., "hard_tabs").
    fn name(&self) -> &'static str;

    /// Returns the check code (e.g., "ML001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this check enforces.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this check.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Scans a manifest and returns diagnostics in line order.
    fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic>;
}

/// Type alias for boxed Check trait objects.
pub type CheckBox = Box<dyn Check>;
