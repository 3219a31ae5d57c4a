//! Check command implementation.

use anyhow::{bail, Result};
use manifest_lint_core::{CheckBox, LintResult, Linter, Severity};
use manifest_lint_rules::{all_checks, check_names, select_checks};
use std::path::{Path, PathBuf};

use super::{discover, output};
use crate::config_resolver;
use crate::OutputFormat;

/// Arguments for the check command.
pub struct CheckArgs {
    /// Files or directories to check.
    pub paths: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated check names or codes.
    pub checks: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Failure threshold from the command line.
    pub fail_on: Option<Severity>,
    /// Explicit config path.
    pub config: Option<PathBuf>,
}

/// Runs the check command.
pub fn run(args: &CheckArgs) -> Result<()> {
    let project_dir = project_dir(&args.paths);
    let config_resolver::ResolvedConfig { config, source } =
        config_resolver::resolve(&project_dir, args.config.as_deref())?;
    tracing::debug!("Config source: {:?}", source);

    let fail_on = args.fail_on.unwrap_or_else(|| config.fail_on());

    let mut exclude = config.analyzer.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());
    let files = discover::manifest_files(
        &args.paths,
        &exclude,
        &config.analyzer.extensions,
        config.analyzer.respect_gitignore,
    )?;

    let checks = match &args.checks {
        Some(filter) => selected_checks(filter)?,
        None => all_checks(),
    };

    let linter = Linter::builder().checks(checks).config(config).build();

    tracing::info!(
        "Checking {} manifest(s) with {} checks",
        files.len(),
        linter.check_count()
    );

    let mut result = LintResult::new();
    for file in &files {
        match linter.lint_file(file) {
            Ok(file_result) => result.extend(file_result),
            Err(e) => tracing::warn!("Skipping {}: {}", file.display(), e),
        }
    }

    result.diagnostics.sort_by(|a, b| {
        (&a.location.file, a.location.line, a.location.column).cmp(&(
            &b.location.file,
            b.location.line,
            b.location.column,
        ))
    });

    output::print(&result, args.format)?;

    if result.has_diagnostics_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves `--checks`; fails when nothing in the list names a known check.
fn selected_checks(filter: &str) -> Result<Vec<CheckBox>> {
    let checks = select_checks(filter.split(',').map(str::trim).filter(|s| !s.is_empty()));
    if checks.is_empty() {
        bail!(
            "No known checks in --checks '{}'. Available: {}",
            filter,
            check_names().join(", ")
        );
    }
    Ok(checks)
}

/// Directory used to look up a project-level config file.
fn project_dir(paths: &[PathBuf]) -> PathBuf {
    let Some(first) = paths.first() else {
        return PathBuf::from(".");
    };
    if first.is_dir() {
        return first.clone();
    }
    match first.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn project_dir_of_directory_is_itself() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(project_dir(&[tmp.path().to_path_buf()]), tmp.path());
    }

    #[test]
    fn project_dir_of_file_is_parent() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("init.pp");
        std::fs::write(&file, "").unwrap();
        assert_eq!(project_dir(&[file]), tmp.path());
    }

    #[test]
    fn checks_filter_accepts_names_and_codes() {
        let names: Vec<&str> = selected_checks("hard_tabs, ML005")
            .unwrap()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["hard_tabs", "arrow_alignment"]);
    }

    #[test]
    fn checks_filter_with_no_known_names_lists_available() {
        let err = selected_checks("tabs,ML999")
            .err()
            .expect("expected an error")
            .to_string();
        assert!(err.contains("No known checks"));
        assert!(err.contains("hard_tabs, trailing_whitespace, 80chars"));
    }

    #[test]
    fn project_dir_of_bare_file_name_is_cwd() {
        assert_eq!(project_dir(&[PathBuf::from("site.pp")]), PathBuf::from("."));
        assert_eq!(project_dir(&[]), PathBuf::from("."));
    }
}
