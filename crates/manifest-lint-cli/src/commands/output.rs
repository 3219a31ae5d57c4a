//! Shared output formatting for lint results.

use anyhow::Result;
use manifest_lint_core::{DiagnosticReport, LintResult, Severity};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        let severity_indicator = match diagnostic.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };

        println!(
            "{} {} at {}",
            diagnostic.code, diagnostic.check, diagnostic.location
        );
        println!("  {}: {}", severity_indicator, diagnostic.message);
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings) = result.count_by_severity();

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{diagnostic}");
    }
}

fn print_pretty(result: &LintResult) {
    let mut sources: HashMap<PathBuf, Option<String>> = HashMap::new();

    for diagnostic in &result.diagnostics {
        let file = &diagnostic.location.file;
        let content = sources
            .entry(file.clone())
            .or_insert_with(|| match std::fs::read(file) {
                Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                Err(e) => {
                    tracing::debug!("Cannot re-read {}: {}", file.display(), e);
                    None
                }
            });

        match content.as_deref() {
            Some(content) => {
                let report = miette::Report::new(DiagnosticReport::new(diagnostic, content));
                println!("{report:?}");
            }
            None => println!("{diagnostic}"),
        }
    }

    print_summary(result);
}
