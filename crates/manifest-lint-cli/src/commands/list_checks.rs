//! List checks command implementation.

use manifest_lint_rules::all_checks;

/// Runs the list-checks command.
pub fn run() {
    println!("Available checks:\n");
    println!(
        "{:<8} {:<22} {:<9} Description",
        "Code", "Name", "Severity"
    );
    println!("{}", "-".repeat(80));

    for check in all_checks() {
        println!(
            "{:<8} {:<22} {:<9} {}",
            check.code(),
            check.name(),
            check.default_severity().to_string(),
            check.description()
        );
    }

    println!("\nUse --checks to run a subset, e.g.:");
    println!("  manifest-lint check --checks hard_tabs,trailing_whitespace");
    println!("  manifest-lint check --checks ML001,ML005");
    println!("\nSilence a single line with a trailing comment:");
    println!("  mode => '0644', # lint:ignore:arrow_alignment");
}
