//! # manifest-lint-rules
//!
//! Built-in style checks for manifest-lint.
//!
//! ## Available Checks
//!
//! | Code | Name | Severity | Description |
//! |------|------|----------|-------------|
//! | ML001 | `hard_tabs` | error | Forbids tab characters |
//! | ML002 | `trailing_whitespace` | error | Forbids lines ending in a space |
//! | ML003 | `80chars` | warning | Lines over 80 characters (`puppet://` URLs exempt) |
//! | ML004 | `2sp_soft_tabs` | error | Leading indentation must be an even number of spaces |
//! | ML005 | `arrow_alignment` | warning | `=>` must line up within each resource and nested block |
//!
//! The first four are stateless per-line predicates. `arrow_alignment`
//! carries nesting context from line to line within a single run.
//!
//! ## Usage
//!
//! ```ignore
//! use manifest_lint_core::Linter;
//! use manifest_lint_rules::all_checks;
//!
//! let linter = Linter::builder().checks(all_checks()).build();
//! let result = linter.lint_file(Path::new("manifests/site.pp"))?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod arrow_alignment;
mod hard_tabs;
mod line_length;
mod registry;
mod soft_tabs;
mod trailing_whitespace;

pub use arrow_alignment::ArrowAlignment;
pub use hard_tabs::HardTabs;
pub use line_length::LineLength;
pub use registry::{all_checks, check_names, find_check, select_checks};
pub use soft_tabs::SoftTabs;
pub use trailing_whitespace::TrailingWhitespace;

/// Re-export core types for convenience.
pub use manifest_lint_core::{Check, Diagnostic, Severity};
