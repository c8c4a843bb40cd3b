// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ShardConfig;
use crate::extract::ExtractMode;

/// Split a test suite into balanced chunks and print the selection filter for one chunk
#[derive(Parser, Debug)]
#[command(name = "specsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the test sources
    #[arg(value_name = "TEST_DIR")]
    pub test_dir: PathBuf,

    /// Number of chunks to split the suite into
    #[arg(long, value_name = "N")]
    pub chunks: usize,

    /// Zero-based index of the chunk to print
    #[arg(long, value_name = "I")]
    pub print_chunk: usize,

    /// Print the sorted items instead of a filter
    #[arg(long)]
    pub print_debug: bool,

    /// Log verbosity (written to stderr)
    #[arg(long, default_value = "warn", value_name = "LEVEL", env = "SPECSPLIT_LOG")]
    pub log_level: LogLevel,

    /// What to partition by: spec names (regex filter) or tags (label filter)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ExtractMode>,

    /// Glob for test source files (repeatable) [default: *_test.go]
    #[arg(long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SPECSPLIT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Log level accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Cli {
    /// Build the run configuration from flags alone.
    ///
    /// Config file values are merged by the caller via
    /// [`ShardConfig::apply_file`].
    pub fn to_config(&self) -> ShardConfig {
        let mut config = ShardConfig::new(&self.test_dir, self.chunks, self.print_chunk);
        config.print_debug = self.print_debug;
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if !self.patterns.is_empty() {
            config.walker.patterns = self.patterns.clone();
        }
        config
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
