// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test source discovery.
//!
//! Walks the test directory with the `ignore` crate (gitignore aware, hidden
//! entries skipped) and keeps files whose name or relative path matches one
//! of the include globs and none of the exclude globs.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Default include pattern for test sources.
pub const DEFAULT_PATTERN: &str = "*_test.go";

/// File selection for a walk.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Globs a file must match (by file name or path relative to the root).
    pub patterns: Vec<String>,
    /// Globs that drop a file even if it matched `patterns`.
    pub exclude: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self { patterns: vec![DEFAULT_PATTERN.to_string()], exclude: Vec::new() }
    }
}

/// Collects matching test source files under a root.
pub struct FileWalker {
    include: GlobSet,
    exclude: GlobSet,
}

impl FileWalker {
    pub fn new(config: &WalkerConfig) -> Result<Self> {
        Ok(Self {
            include: build_glob_set(&config.patterns)?,
            exclude: build_glob_set(&config.exclude)?,
        })
    }

    /// Whether `relative` (a path under the root) is selected.
    pub fn is_selected(&self, relative: &Path) -> bool {
        let by_name = relative.file_name().is_some_and(|name| self.include.is_match(name));
        if !by_name && !self.include.is_match(relative) {
            return false;
        }
        !self.exclude.is_match(relative)
            && !relative.file_name().is_some_and(|name| self.exclude.is_match(name))
    }

    /// Walk `root` and return matching files sorted by path.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkBuilder::new(root).hidden(true).git_ignore(true).build() {
            let entry =
                entry.map_err(|source| Error::Walk { path: root.to_path_buf(), source })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.is_selected(relative) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        tracing::debug!("found {} test source file(s) under {}", files.len(), root.display());
        Ok(files)
    }
}

/// Build a GlobSet from pattern strings.
fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| Error::Config(format!("invalid glob pattern {pattern:?}: {e}")))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::Config(format!("invalid glob patterns: {e}")))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
