//! Registry of built-in checks.

use crate::{ArrowAlignment, HardTabs, LineLength, SoftTabs, TrailingWhitespace};
use manifest_lint_core::CheckBox;

/// Returns all available checks in their fixed run order.
#[must_use]
pub fn all_checks() -> Vec<CheckBox> {
    vec![
        Box::new(HardTabs::new()),
        Box::new(TrailingWhitespace::new()),
        Box::new(LineLength::new()),
        Box::new(SoftTabs::new()),
        Box::new(ArrowAlignment::new()),
    ]
}

/// Returns the stable names of all available checks.
#[must_use]
pub fn check_names() -> Vec<&'static str> {
    all_checks().iter().map(|c| c.name()).collect()
}

/// Looks up a check by name (`hard_tabs`) or code (`ML001`).
#[must_use]
pub fn find_check(key: &str) -> Option<CheckBox> {
    all_checks()
        .into_iter()
        .find(|c| c.name() == key || c.code().eq_ignore_ascii_case(key))
}

/// Resolves a list of names or codes, skipping unknown entries.
#[must_use]
pub fn select_checks<'a, I>(keys: I) -> Vec<CheckBox>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut checks = Vec::new();

    for key in keys {
        match find_check(key) {
            Some(check) => checks.push(check),
            None => tracing::warn!("Unknown check: {}", key),
        }
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_lint_core::Severity;

    #[test]
    fn test_all_checks_order() {
        assert_eq!(
            check_names(),
            vec![
                "hard_tabs",
                "trailing_whitespace",
                "80chars",
                "2sp_soft_tabs",
                "arrow_alignment",
            ]
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = all_checks().iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn test_default_severities() {
        let severities: Vec<Severity> = all_checks().iter().map(|c| c.default_severity()).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Error,
                Severity::Error,
                Severity::Warning,
                Severity::Error,
                Severity::Warning,
            ]
        );
    }

    #[test]
    fn test_find_by_name_or_code() {
        assert_eq!(find_check("80chars").map(|c| c.code()), Some("ML003"));
        assert_eq!(find_check("ML005").map(|c| c.name()), Some("arrow_alignment"));
        assert_eq!(find_check("ml001").map(|c| c.name()), Some("hard_tabs"));
        assert!(find_check("no-such-check").is_none());
    }

    #[test]
    fn test_select_skips_unknown() {
        let names: Vec<&str> = select_checks(["hard_tabs", "bogus", "ML004"])
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["hard_tabs", "2sp_soft_tabs"]);
    }
}
