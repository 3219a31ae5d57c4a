//! Locates and loads `manifest-lint.toml`.
//!
//! Lookup order:
//!
//! 1. `--config <path>`
//! 2. `manifest-lint.toml` / `.manifest-lint.toml` in the checked directory or
//!    any parent up to the enclosing module root (the first ancestor holding
//!    `metadata.json` or a `manifests/` directory)
//! 3. `$MANIFEST_LINT_CONFIG_DIR/config.toml`, else `~/.manifest-lint/config.toml`
//! 4. built-in defaults

use anyhow::{Context, Result};
use manifest_lint_core::Config;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: &[&str] = &["manifest-lint.toml", ".manifest-lint.toml"];

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    Explicit(PathBuf),
    /// Found inside the module being checked.
    Module(PathBuf),
    /// Per-user fallback.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

/// A loaded configuration and its origin.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Parsed configuration.
    pub config: Config,
    /// Where it was read from.
    pub source: ConfigSource,
}

/// Finds and loads the configuration for a run starting at `start`.
pub fn resolve(start: &Path, explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let start = std::fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    resolve_with(&start, explicit, global_config_dir().as_deref())
}

fn resolve_with(
    start: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> Result<ResolvedConfig> {
    let source = match explicit {
        Some(path) => ConfigSource::Explicit(path.to_path_buf()),
        None => module_config(start)
            .map(ConfigSource::Module)
            .or_else(|| {
                global_dir
                    .map(|dir| dir.join("config.toml"))
                    .filter(|p| p.is_file())
                    .map(ConfigSource::Global)
            })
            .unwrap_or(ConfigSource::Default),
    };

    let config = match &source {
        ConfigSource::Explicit(path) | ConfigSource::Module(path) | ConfigSource::Global(path) => {
            tracing::debug!("Loading config from {}", path.display());
            Config::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?
        }
        ConfigSource::Default => Config::default(),
    };

    Ok(ResolvedConfig { config, source })
}

/// Searches `start` and its parents, stopping at the module root.
fn module_config(start: &Path) -> Option<PathBuf> {
    let stop = start.ancestors().find(|dir| is_module_root(dir)).unwrap_or(start);

    for dir in start.ancestors() {
        let found = CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file());
        if found.is_some() {
            return found;
        }
        if dir == stop {
            break;
        }
    }
    None
}

fn is_module_root(dir: &Path) -> bool {
    dir.join("metadata.json").is_file() || dir.join("manifests").is_dir()
}

/// `$MANIFEST_LINT_CONFIG_DIR`, else `~/.manifest-lint`.
fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("MANIFEST_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".manifest-lint")))
}
