//! Manifest context handed to every check.

use crate::types::{Line, Location};
use std::path::{Path, PathBuf};

/// Supplies a manifest as an ordered, 1-indexed sequence of lines.
pub trait LineSource {
    /// Returns every line in source order, terminators stripped.
    fn lines(&self) -> &[Line<'_>];
}

/// Context provided to checks.
///
/// Splits the manifest once so that every check iterates the same immutable
/// line sequence.
#[derive(Debug, Clone)]
pub struct ManifestContext<'a> {
    /// Path used for diagnostic locations.
    pub path: &'a Path,
    lines: Vec<Line<'a>>,
}

impl<'a> ManifestContext<'a> {
    /// Creates a new manifest context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        let lines = content
            .lines()
            .enumerate()
            .map(|(idx, text)| Line::new(idx + 1, text))
            .collect();

        Self { path, lines }
    }

    /// Returns a location on `line` in this manifest.
    #[must_use]
    pub fn location(&self, line: usize) -> Location {
        Location::new(self.path_buf(), line)
    }

    /// Returns the manifest path as an owned buffer.
    #[must_use]
    pub fn path_buf(&self) -> PathBuf {
        self.path.to_path_buf()
    }

    /// Looks up a line by its 1-indexed number.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&Line<'a>> {
        number
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
    }
}

impl LineSource for ManifestContext<'_> {
    fn lines(&self) -> &[Line<'_>] {
        &self.lines
    }
}
