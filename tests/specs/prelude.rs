//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// Returns a Command configured to run the specsplit binary
pub fn specsplit_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("specsplit"));
    cmd.env_remove("SPECSPLIT_LOG").env_remove("SPECSPLIT_CONFIG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run specsplit on a fixture and return stdout, asserting success.
pub fn split(fixture_name: &str, args: &[&str]) -> String {
    let output = specsplit_cmd()
        .args(args)
        .arg(fixture(fixture_name))
        .output()
        .expect("command should run");
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be utf-8")
}
