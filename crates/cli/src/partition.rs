// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Balanced partitioning of sorted items into chunks.
//!
//! Items are sliced in order into chunks of `ceil(len / n)`. The last chunk
//! may be shorter. Ceil slicing can run out of items before the last index
//! (5 items over 4 chunks gives sizes 2, 2, 1, 0); such a chunk is reported
//! as [`Error::EmptyChunk`] rather than rendered as a filter.

use crate::error::{Error, Result};

/// Split `items` into exactly `n` contiguous, disjoint slices.
///
/// `items` must already be sorted; chunks follow its order. Trailing slices
/// may be empty (see module docs).
pub fn partition<T>(items: &[T], n: usize) -> Result<Vec<&[T]>> {
    if n == 0 {
        return Err(Error::Config("number of chunks must be at least 1".to_string()));
    }
    if items.len() < n {
        return Err(Error::TooManyChunks { chunks: n, specs: items.len() });
    }

    let size = items.len().div_ceil(n);
    let chunks = (0..n)
        .map(|i| {
            let start = (i * size).min(items.len());
            let end = (start + size).min(items.len());
            &items[start..end]
        })
        .collect();

    Ok(chunks)
}

/// Return chunk `index` of `n` over `items`.
pub fn chunk<T>(items: &[T], n: usize, index: usize) -> Result<&[T]> {
    if index >= n {
        return Err(Error::Config(format!(
            "chunk index {index} is out of range for {n} chunks"
        )));
    }

    let chunks = partition(items, n)?;
    match chunks.get(index) {
        Some(members) if !members.is_empty() => Ok(members),
        _ => {
            tracing::error!(index, chunks = n, specs = items.len(), "computed an empty chunk");
            Err(Error::EmptyChunk { index, chunks: n, specs: items.len() })
        }
    }
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod tests;
