// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for chunk selection.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use regex::Regex;

use crate::prelude::*;

/// Full spec texts in the e2e-suite fixture, as the runner would see them.
const SUITE_SPECS: &[&str] = &[
    "Catalog represents a store of bundles loads packages from the registry",
    "Install Plan resolves dependencies",
    "Install Plan with webhooks installs a validating webhook",
    "Operator Group updates target namespaces",
    "Subscription creates an install plan",
];

// =============================================================================
// Name mode
// =============================================================================

/// Debug mode prints the sorted minimal prefixes
#[test]
fn print_debug_lists_minimal_prefixes() {
    let stdout = split("e2e-suite", &["--chunks=1", "--print-chunk=0", "--print-debug"]);
    assert_eq!(
        stdout,
        "Catalog represents a store of bundles\nInstall Plan\nOperator Group\nSubscription\n"
    );
}

/// Two chunks split the sorted prefixes in half
#[test]
fn two_chunks_render_regex_alternations() {
    let first = split("e2e-suite", &["--chunks=2", "--print-chunk=0"]);
    let second = split("e2e-suite", &["--chunks=2", "--print-chunk=1"]);

    assert_eq!(first, "(Catalog represents a store of bundles|Install Plan) .*\n");
    assert_eq!(second, "(Operator Group|Subscription) .*\n");
}

/// One-member chunks drop the grouping but keep the guard
#[test]
fn single_member_chunk_has_no_group() {
    let stdout = split("e2e-suite", &["--chunks=4", "--print-chunk=3"]);
    assert_eq!(stdout, "Subscription .*\n");
}

/// Every spec runs in exactly one chunk
#[test]
fn chunk_filters_select_every_spec_once() {
    // 3 chunks over 4 prefixes leaves the last chunk empty.
    for n in [1, 2, 4] {
        let mut selected = vec![0usize; SUITE_SPECS.len()];
        for i in 0..n {
            let chunks_arg = format!("--chunks={n}");
            let index_arg = format!("--print-chunk={i}");
            let filter = split("e2e-suite", &[chunks_arg.as_str(), index_arg.as_str()]);
            let re = Regex::new(filter.trim_end()).unwrap();
            for (idx, spec) in SUITE_SPECS.iter().enumerate() {
                if re.is_match(spec) {
                    selected[idx] += 1;
                }
            }
        }
        assert_eq!(selected, vec![1; SUITE_SPECS.len()], "chunks={n}");
    }
}

/// Repeated runs produce byte-identical output
#[test]
fn output_is_deterministic() {
    let first = split("e2e-suite", &["--chunks=3", "--print-chunk=1"]);
    for _ in 0..3 {
        assert_eq!(split("e2e-suite", &["--chunks=3", "--print-chunk=1"]), first);
    }
}

/// Files without a top-level declaration are skipped with a warning
#[test]
fn files_without_specs_warn() {
    specsplit_cmd()
        .args(["--chunks=1", "--print-chunk=0"])
        .arg(fixture("e2e-suite"))
        .assert()
        .success()
        .stderr(predicates::str::contains("suite_test.go"));
}

// =============================================================================
// Tag mode
// =============================================================================

/// Tag mode partitions raw tags and joins them with ||
#[test]
fn tag_mode_renders_disjunction() {
    let all = split("e2e-suite", &["--chunks=1", "--print-chunk=0", "--mode=tag"]);
    let second = split("e2e-suite", &["--chunks=2", "--print-chunk=1", "--mode=tag"]);

    assert_eq!(all, "catalog || slow || subscription || webhook\n");
    assert_eq!(second, "subscription || webhook\n");
}

// =============================================================================
// Failures
// =============================================================================

/// More chunks than specs fails with the documented message
#[test]
fn too_many_chunks_fails() {
    specsplit_cmd()
        .args(["--chunks=5", "--print-chunk=0"])
        .arg(fixture("e2e-suite"))
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("have more desired chunks (5) than specs (4)"));
}

/// Chunk index must be below the chunk count
#[test]
fn print_chunk_out_of_range_fails() {
    specsplit_cmd()
        .args(["--chunks=2", "--print-chunk=2"])
        .arg(fixture("e2e-suite"))
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty());
}

/// Zero chunks is a configuration error
#[test]
fn zero_chunks_fails() {
    specsplit_cmd()
        .args(["--chunks=0", "--print-chunk=0"])
        .arg(fixture("e2e-suite"))
        .assert()
        .code(2);
}

/// A missing test directory is an I/O failure
#[test]
fn missing_directory_fails() {
    specsplit_cmd()
        .args(["--chunks=1", "--print-chunk=0"])
        .arg(fixture("does-not-exist"))
        .assert()
        .code(4)
        .stderr(predicates::str::contains("error:"));
}

/// Ceil-sized chunks can run out before the last index
#[test]
fn empty_trailing_chunk_aborts() {
    // util.go adds a fifth prefix; 5 over 4 chunks gives sizes 2, 2, 1, 0.
    specsplit_cmd()
        .args(["--chunks=4", "--print-chunk=3", "--pattern=*.go"])
        .arg(fixture("e2e-suite"))
        .assert()
        .code(3)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("internal error"));
}
