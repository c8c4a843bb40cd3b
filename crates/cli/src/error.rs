// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure that stops a run.
///
/// Files that merely lack a recognizable declaration are not errors; the
/// extractor logs and skips them.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid chunk count or chunk index.
    #[error("{0}")]
    Config(String),

    /// More chunks requested than there are items to spread over them.
    #[error("have more desired chunks ({chunks}) than specs ({specs})")]
    TooManyChunks { chunks: usize, specs: usize },

    /// Config file could not be read or parsed.
    #[error("failed to load config {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },

    /// Directory traversal failed.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// A matched test source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// A chunk came out empty after the bounds checks passed.
    #[error("internal error: chunk {index} of {chunks} is empty ({specs} specs)")]
    EmptyChunk { index: usize, chunks: usize, specs: usize },
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    ConfigError = 2,
    InternalError = 3,
    IoError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config(_) | Error::TooManyChunks { .. } | Error::ConfigFile { .. } => {
                ExitCode::ConfigError
            }
            Error::Walk { .. } | Error::Read { .. } | Error::Output(_) => ExitCode::IoError,
            Error::EmptyChunk { .. } => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
