// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection expressions handed to the external test runner.
//!
//! - Regex: `(a|b) .*`, for focusing on spec name prefixes.
//! - Labels: `a || b`, for exact label filters.

/// Encoding used to render a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStyle {
    /// Alternation of name prefixes with a trailing word-boundary guard.
    Regex,
    /// Boolean disjunction of exact labels.
    Labels,
}

/// Trailing guard appended to regex filters.
///
/// A prefix must be followed by a space, so `foo` cannot select `foobar`.
const REGEX_GUARD: &str = " .*";

/// Separator between labels in a disjunction.
const LABEL_OR: &str = " || ";

/// Render `members` as a single selection expression.
pub fn synthesize<S: AsRef<str>>(style: FilterStyle, members: &[S]) -> String {
    match style {
        FilterStyle::Regex => regex_alternation(members),
        FilterStyle::Labels => label_disjunction(members),
    }
}

fn regex_alternation<S: AsRef<str>>(members: &[S]) -> String {
    let escaped: Vec<String> = members.iter().map(|m| regex::escape(m.as_ref())).collect();
    match escaped.as_slice() {
        [single] => format!("{single}{REGEX_GUARD}"),
        _ => format!("({}){REGEX_GUARD}", escaped.join("|")),
    }
}

fn label_disjunction<S: AsRef<str>>(members: &[S]) -> String {
    members.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(LABEL_OR)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
