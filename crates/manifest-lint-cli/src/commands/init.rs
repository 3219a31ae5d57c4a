//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# manifest-lint configuration

# Lowest severity that makes `manifest-lint check` exit non-zero.
# fail_on = "warning"

[analyzer]
# Glob patterns to exclude from discovery
exclude = [
    "**/vendor/**",
    "**/fixtures/**",
]

# File extensions treated as manifests
extensions = ["pp"]

# Respect .gitignore files
respect_gitignore = true

# Check configurations
# Each check can be enabled/disabled and have its severity overridden

[rules.hard_tabs]
enabled = true

[rules.trailing_whitespace]
enabled = true

[rules.80chars]
enabled = true
# severity = "error"  # Override default severity

[rules.2sp_soft_tabs]
enabled = true

[rules.arrow_alignment]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("manifest-lint.toml"), force)?;

    println!("Created manifest-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit manifest-lint.toml to configure checks");
    println!("  2. Run: manifest-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
