//! # manifest-lint-core
//!
//! Core framework for line-oriented manifest style checking.
//!
//! This crate provides the foundational traits and types for building
//! manifest checks. It includes:
//!
//! - [`Check`] trait for per-manifest style checks
//! - [`ManifestContext`], the [`LineSource`] every check reads from
//! - [`Linter`] for orchestrating check execution
//! - [`Diagnostic`] for representing findings and [`DiagnosticSink`] for collecting them
//!
//! ## Example
//!
//! ```ignore
//! use manifest_lint_core::Linter;
//!
//! let linter = Linter::builder()
//!     .check(MyCheck::new())
//!     .build();
//!
//! let result = linter.lint_file(Path::new("manifests/site.pp"))?;
//! for diagnostic in &result.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod linter;
mod types;

/// Same-line `# lint:ignore:<check>` directives.
pub mod control;

pub use check::{Check, CheckBox};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{LineSource, ManifestContext};
pub use linter::{LintError, Linter, LinterBuilder};
pub use types::{
    Diagnostic, DiagnosticReport, DiagnosticSink, Line, LintResult, Location, Severity,
};
