//! Comment-based control directives.
//!
//! Supports same-line directives like:
//! ```text
//! $url = 'http://example.com/a/very/long/path' # lint:ignore:80chars
//! ```

use std::collections::HashSet;

/// Token prefix naming a check to ignore.
pub const IGNORE_PREFIX: &str = "lint:ignore:";

/// Parsed ignore directive from a single line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreDirective<'a> {
    /// Names of checks ignored on this line.
    pub checks: HashSet<&'a str>,
}

impl IgnoreDirective<'_> {
    /// Returns true if `check` is ignored by this directive.
    #[must_use]
    pub fn ignores(&self, check: &str) -> bool {
        self.checks.contains(check)
    }
}

/// Parses the ignore directive carried by a line's `#` comment, if any.
#[must_use]
pub fn parse_ignore_directive(line: &str) -> Option<IgnoreDirective<'_>> {
    let comment = &line[comment_start(line)? + 1..];

    let checks: HashSet<&str> = comment
        .split_whitespace()
        .filter_map(|token| token.strip_prefix(IGNORE_PREFIX))
        .filter(|name| !name.is_empty())
        .collect();

    if checks.is_empty() {
        None
    } else {
        Some(IgnoreDirective { checks })
    }
}

/// Byte index of the first `#` outside a single- or double-quoted string.
///
/// Quotes left open run to the end of the line.
fn comment_start(line: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == '#' => return Some(idx),
            None => {}
        }
    }
    None
}

/// Returns true if `line` carries a directive ignoring `check`.
#[must_use]
pub fn is_ignored(line: &str, check: &str) -> bool {
    parse_ignore_directive(line).is_some_and(|d| d.ignores(check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_directive() {
        let directive = parse_ignore_directive("  foo => 'bar', # lint:ignore:arrow_alignment")
            .expect("directive should parse");
        assert!(directive.ignores("arrow_alignment"));
        assert!(!directive.ignores("hard_tabs"));
    }

    #[test]
    fn parses_multiple_directives() {
        let directive =
            parse_ignore_directive("x # lint:ignore:80chars lint:ignore:trailing_whitespace")
                .expect("directive should parse");
        assert_eq!(directive.checks.len(), 2);
        assert!(directive.ignores("80chars"));
        assert!(directive.ignores("trailing_whitespace"));
    }

    #[test]
    fn hash_inside_quotes_is_not_a_comment() {
        assert!(parse_ignore_directive("  $msg = '# lint:ignore:80chars'").is_none());
        assert!(parse_ignore_directive("  $msg = \"# lint:ignore:80chars\"").is_none());
        assert!(parse_ignore_directive(r"  $s = 'it\'s # lint:ignore:80chars'").is_none());
    }

    #[test]
    fn comment_after_quoted_hash_still_counts() {
        let directive = parse_ignore_directive("  $c = '#fff' # lint:ignore:80chars")
            .expect("directive should parse");
        assert!(directive.ignores("80chars"));
    }

    #[test]
    fn requires_comment_marker() {
        assert!(parse_ignore_directive("lint:ignore:80chars").is_none());
    }

    #[test]
    fn ignores_empty_names_and_plain_comments() {
        assert!(parse_ignore_directive("x # lint:ignore:").is_none());
        assert!(parse_ignore_directive("# just a comment").is_none());
    }

    #[test]
    fn is_ignored_matches_by_name() {
        assert!(is_ignored("\tfoo # lint:ignore:hard_tabs", "hard_tabs"));
        assert!(!is_ignored("\tfoo # lint:ignore:hard_tabs", "80chars"));
        assert!(!is_ignored("\tfoo", "hard_tabs"));
    }
}
