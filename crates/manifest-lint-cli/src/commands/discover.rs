//! Manifest discovery.

use anyhow::{Context, Result};
use ignore::overrides::OverrideBuilder;
use std::path::{Path, PathBuf};

/// Expands the given paths into a sorted, deduplicated list of manifests.
///
/// Directories are walked recursively and filtered by extension and exclude
/// patterns. Files named explicitly are always included.
pub fn manifest_files(
    paths: &[PathBuf],
    exclude: &[String],
    extensions: &[String],
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(walk(path, exclude, extensions, respect_gitignore)?);
        } else {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn walk(
    root: &Path,
    exclude: &[String],
    extensions: &[String],
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut overrides = OverrideBuilder::new(root);
    for pattern in exclude {
        overrides
            .add(&format!("!{pattern}"))
            .with_context(|| format!("Invalid exclude pattern: {pattern}"))?;
    }
    let overrides = overrides.build().context("Invalid exclude patterns")?;

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .require_git(false)
        .overrides(overrides);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| want == ext));

        if matches_ext {
            files.push(path.to_path_buf());
        } else {
            tracing::trace!("Skipping non-manifest: {}", path.display());
        }
    }

    Ok(files)
}
