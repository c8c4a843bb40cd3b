// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass pipeline: extract, minimize, sort, partition, synthesize.

use std::collections::BTreeSet;
use std::io::Write;

use crate::config::ShardConfig;
use crate::error::Result;
use crate::extract::{self, ExtractMode};
use crate::filter::{self, FilterStyle};
use crate::partition;
use crate::trie;
use crate::walker::FileWalker;

/// Sorted items to partition for `mode`.
///
/// Names collapse to minimal prefixes; tags are used as-is.
pub fn items_for(identifiers: &BTreeSet<String>, mode: ExtractMode) -> Vec<String> {
    match mode {
        ExtractMode::Name => trie::minimal_prefixes(identifiers).into_iter().collect(),
        ExtractMode::Tag => identifiers.iter().cloned().collect(),
    }
}

/// Render the filter for chunk `index` of `n` over sorted `items`.
pub fn chunk_filter(items: &[String], mode: ExtractMode, n: usize, index: usize) -> Result<String> {
    let members = partition::chunk(items, n, index)?;
    let style = match mode {
        ExtractMode::Name => FilterStyle::Regex,
        ExtractMode::Tag => FilterStyle::Labels,
    };
    Ok(filter::synthesize(style, members))
}

/// Run one invocation and write its result to `out`.
///
/// Writes a single filter line, or in debug mode the sorted items one per line.
/// Nothing is written when any step fails.
pub fn run<W: Write>(config: &ShardConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    let walker = FileWalker::new(&config.walker)?;
    let files = walker.walk(&config.test_dir)?;
    let identifiers = extract::extract_all(&files, config.mode)?;
    tracing::info!(
        "extracted {} {}(s) from {} file(s)",
        identifiers.len(),
        config.mode.as_str(),
        files.len()
    );

    let items = items_for(&identifiers, config.mode);

    if config.print_debug {
        for item in &items {
            writeln!(out, "{item}")?;
        }
        return Ok(());
    }

    let filter = chunk_filter(&items, config.mode, config.num_chunks, config.print_chunk)?;
    writeln!(out, "{filter}")?;
    Ok(())
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
