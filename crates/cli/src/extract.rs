// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec identifier extraction from test sources.
//!
//! Matching is line-based over a fixed declaration shape. Declarations split
//! across lines, built by concatenation, or computed at runtime are not seen.
//!
//! - Names: `var _ = Describe("name", func() {` (optionally `ginkgo.Describe`).
//! - Tags: every string literal inside `Label("a", "b")`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// What to pull out of each test source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Literal names of top-level spec groups.
    #[default]
    Name,
    /// Tags attached to specs.
    Tag,
}

impl ExtractMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Tag => "tag",
        }
    }
}

/// Regex for `var _ = Describe("...", func`.
#[allow(clippy::expect_used)]
static DESCRIBE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*var\s+_\s*=\s*(?:\w+\.)?Describe\(\s*"([^"]+)"\s*,"#)
        .expect("valid regex pattern")
});

/// Regex for the argument list of `Label(...)`.
#[allow(clippy::expect_used)]
static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bLabel\(([^)]*)\)"#).expect("valid regex pattern")
});

/// Regex for a double-quoted string literal without escapes.
#[allow(clippy::expect_used)]
static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\\]+)""#).expect("valid regex pattern"));

/// Find spec names declared in `content`.
pub fn find_spec_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| DESCRIBE_PATTERN.captures(line))
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Find tags attached in `content`.
pub fn find_tags(content: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for line in content.lines() {
        for call in LABEL_PATTERN.captures_iter(line) {
            let Some(args) = call.get(1) else {
                continue;
            };
            for literal in STRING_LITERAL.captures_iter(args.as_str()) {
                if let Some(tag) = literal.get(1) {
                    tags.push(tag.as_str().to_string());
                }
            }
        }
    }
    tags
}

/// Find identifiers in `content` for the given mode.
pub fn find_identifiers(content: &str, mode: ExtractMode) -> Vec<String> {
    match mode {
        ExtractMode::Name => find_spec_names(content),
        ExtractMode::Tag => find_tags(content),
    }
}

/// Extract the deduplicated identifier set from `files`.
///
/// A file that cannot be read aborts extraction. A file with no matches is
/// logged and skipped.
pub fn extract_all(files: &[PathBuf], mode: ExtractMode) -> Result<BTreeSet<String>> {
    let mut identifiers = BTreeSet::new();

    for path in files {
        let found = extract_file(path, mode)?;
        if found.is_empty() {
            tracing::warn!(
                "no {} declarations found in {}, skipping",
                mode.as_str(),
                path.display()
            );
            continue;
        }
        tracing::debug!("{}: {} {}(s)", path.display(), found.len(), mode.as_str());
        identifiers.extend(found);
    }

    Ok(identifiers)
}

fn extract_file(path: &Path, mode: ExtractMode) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    Ok(find_identifiers(&content, mode))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
