// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic test-suite sharding.
//!
//! Extracts spec identifiers from test sources, splits them into balanced
//! chunks, and renders one chunk as a selection filter for the test runner.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod filter;
pub mod partition;
pub mod pipeline;
pub mod trie;
pub mod walker;
