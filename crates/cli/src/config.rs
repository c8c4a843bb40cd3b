// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! [`ShardConfig`] is the single value the pipeline runs from. It is merged
//! from an optional `specsplit.toml` ([`FileConfig`]) and CLI flags, with
//! flags taking precedence.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::extract::ExtractMode;
use crate::walker::{DEFAULT_PATTERN, WalkerConfig};

/// Supported config file version.
pub const CONFIG_VERSION: u32 = 1;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "specsplit.toml";

/// Contents of `specsplit.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Config format version. Must be 1.
    pub version: Option<u32>,

    /// Extraction mode used when `--mode` is not given.
    pub mode: Option<ExtractMode>,

    /// Include globs used when `--pattern` is not given.
    pub patterns: Vec<String>,

    /// Exclude globs applied to discovered files.
    #[serde(alias = "ignore")]
    pub exclude: Vec<String>,
}

/// Parse config file content.
pub fn parse(content: &str, path: &Path) -> Result<FileConfig> {
    let config: FileConfig = toml::from_str(content)
        .map_err(|e| Error::ConfigFile { path: path.to_path_buf(), message: e.to_string() })?;

    match config.version {
        Some(CONFIG_VERSION) => Ok(config),
        Some(other) => Err(Error::ConfigFile {
            path: path.to_path_buf(),
            message: format!("unsupported version {other} (expected {CONFIG_VERSION})"),
        }),
        None => Err(Error::ConfigFile {
            path: path.to_path_buf(),
            message: "missing required field `version`".to_string(),
        }),
    }
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::ConfigFile { path: path.to_path_buf(), message: e.to_string() })?;
    parse(&content, path)
}

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct ShardConfig {
    /// Directory containing test sources.
    pub test_dir: PathBuf,
    /// Total number of chunks the suite is split into.
    pub num_chunks: usize,
    /// Zero-based index of the chunk to print.
    pub print_chunk: usize,
    pub mode: ExtractMode,
    /// Print the sorted items instead of a filter.
    pub print_debug: bool,
    pub walker: WalkerConfig,
}

impl ShardConfig {
    pub fn new(test_dir: impl Into<PathBuf>, num_chunks: usize, print_chunk: usize) -> Self {
        Self {
            test_dir: test_dir.into(),
            num_chunks,
            print_chunk,
            mode: ExtractMode::default(),
            print_debug: false,
            walker: WalkerConfig::default(),
        }
    }

    /// Fill unset fields from a config file.
    ///
    /// `mode` and `patterns` only apply when the caller left them at their
    /// defaults; `exclude` globs are appended.
    pub fn apply_file(&mut self, file: &FileConfig, mode_from_cli: bool, patterns_from_cli: bool) {
        if !mode_from_cli && let Some(mode) = file.mode {
            self.mode = mode;
        }
        if !patterns_from_cli && !file.patterns.is_empty() {
            self.walker.patterns = file.patterns.clone();
        }
        for pattern in &file.exclude {
            if !self.walker.exclude.contains(pattern) {
                self.walker.exclude.push(pattern.clone());
            }
        }
    }

    /// Check chunk bounds. Runs before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.num_chunks == 0 {
            return Err(Error::Config("number of chunks must be at least 1".to_string()));
        }
        if self.print_chunk >= self.num_chunks {
            return Err(Error::Config(format!(
                "the chunk to print ({}) must be less than the number of chunks ({})",
                self.print_chunk, self.num_chunks
            )));
        }
        if self.walker.patterns.is_empty() {
            return Err(Error::Config(format!(
                "at least one file pattern is required (default: {DEFAULT_PATTERN})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
