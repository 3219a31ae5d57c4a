//! Check that `=>` separators line up within a resource and its nested blocks.
//!
//! # Rationale
//!
//! Aligned arrows make attribute lists scannable:
//!
//! ```text
//! file { '/etc/motd':
//!   ensure => file,
//!   mode   => '0644',
//! }
//! ```
//!
//! Each nested brace block (a selector or hash) inside a resource gets its
//! own column, established by the first attribute line in that block.
//!
//! # Scanning
//!
//! Every line is first classified into a `LineKind`, then fed to an
//! `AlignmentState` owned by a single run. The state never outlives one
//! manifest.

use manifest_lint_core::{Check, Diagnostic, LineSource, ManifestContext, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// Check code for arrow_alignment.
pub const CODE: &str = "ML005";

/// Check name for arrow_alignment.
pub const NAME: &str = "arrow_alignment";

/// Leading spaces, a minimal non-empty run, spaces, then `=>`.
///
/// Group 1 is the indent-prefix: everything up to and including the spaces
/// right before the arrow.
static ATTRIBUTE_LINE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^( +.+? +)=>") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid attribute line regex: {err}"),
});

/// Shape of a single line as far as alignment is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// A line carrying `=>` after indentation.
    Attribute {
        /// Indent-prefix length in characters.
        indent: usize,
        /// Trimmed line ends with `{`.
        opens_block: bool,
        /// Trimmed line ends with `}`, `},` or `};`.
        closes_block: bool,
    },
    /// A line closing a brace block without an arrow.
    Closing,
    /// Anything else; ends the current resource.
    Other,
}

/// Classifies one line.
fn classify(text: &str) -> LineKind {
    let trimmed = text.trim();

    if let Some(prefix) = ATTRIBUTE_LINE.captures(text).and_then(|caps| caps.get(1)) {
        return LineKind::Attribute {
            indent: prefix.as_str().chars().count(),
            opens_block: trimmed.ends_with('{'),
            closes_block: is_closing(trimmed),
        };
    }

    if is_closing(trimmed) {
        LineKind::Closing
    } else {
        LineKind::Other
    }
}

/// Returns true if `trimmed` ends with `}` optionally followed by `,` or `;`.
fn is_closing(trimmed: &str) -> bool {
    trimmed
        .strip_suffix(|c: char| c == ',' || c == ';')
        .unwrap_or(trimmed)
        .ends_with('}')
}

/// Alignment column of one open nested block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockContext {
    /// No attribute line seen yet in this block.
    Unestablished,
    /// Column set by the block's first attribute line.
    Established(usize),
}

/// Which level a misaligned arrow was compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Misalignment {
    Resource,
    Selector,
}

impl Misalignment {
    fn message(self) -> &'static str {
        match self {
            Self::Resource => "=> on line isn't properly aligned for resource",
            Self::Selector => "=> on line isn't properly aligned for selector",
        }
    }
}

/// Nesting context carried across the lines of one manifest.
///
/// `context_stack` holds one entry per open nested block of the current
/// resource. It is empty whenever `in_resource` is false.
#[derive(Debug, Default)]
struct AlignmentState {
    in_resource: bool,
    resource_indent: Option<usize>,
    context_stack: Vec<BlockContext>,
}

impl AlignmentState {
    /// Applies one line and reports whether its arrow is misaligned.
    fn advance(&mut self, kind: LineKind) -> Option<Misalignment> {
        match kind {
            LineKind::Attribute {
                indent,
                opens_block,
                closes_block,
            } => {
                if !self.in_resource {
                    self.in_resource = true;
                    self.resource_indent = Some(indent);
                    if opens_block {
                        self.context_stack.push(BlockContext::Unestablished);
                    }
                    return None;
                }

                if let Some(top) = self.context_stack.last_mut() {
                    let misaligned = match *top {
                        BlockContext::Unestablished => {
                            *top = BlockContext::Established(indent);
                            false
                        }
                        BlockContext::Established(column) => column != indent,
                    };

                    if opens_block {
                        self.context_stack.push(BlockContext::Unestablished);
                    } else if closes_block {
                        self.context_stack.pop();
                    }

                    return misaligned.then_some(Misalignment::Selector);
                }

                let misaligned = self.resource_indent != Some(indent);
                if opens_block {
                    self.context_stack.push(BlockContext::Unestablished);
                }
                misaligned.then_some(Misalignment::Resource)
            }
            LineKind::Closing if !self.context_stack.is_empty() => {
                self.context_stack.pop();
                None
            }
            LineKind::Closing | LineKind::Other => {
                self.reset();
                None
            }
        }
    }

    /// Ends the current resource. Open blocks are dropped with it so they
    /// cannot leak into the next resource.
    fn reset(&mut self) {
        self.in_resource = false;
        self.resource_indent = None;
        self.context_stack.clear();
    }
}

/// Warns when `=>` separators are not aligned within a block.
#[derive(Debug, Clone)]
pub struct ArrowAlignment {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ArrowAlignment {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrowAlignment {
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

impl Check for ArrowAlignment {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires => to be aligned within resources and nested blocks"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ManifestContext) -> Vec<Diagnostic> {
        let mut state = AlignmentState::default();
        let mut diagnostics = Vec::new();

        for line in ctx.lines() {
            if let Some(misalignment) = state.advance(classify(line.text)) {
                diagnostics.push(Diagnostic::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(line.number),
                    misalignment.message(),
                ));
            }
        }

        diagnostics
    }
}
