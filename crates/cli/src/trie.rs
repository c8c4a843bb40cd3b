// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word trie used to shorten spec names to minimal prefixes.
//!
//! Each spec name is split into whitespace-delimited words and inserted as a
//! path. An empty-word child marks the end of a name, so `foo` and `foo bar`
//! share the `foo` node but diverge below it.
//!
//! A name's minimal prefix is found by walking down from its first word while
//! the current node has exactly one child. The walk stops at the first real
//! branch (or a leaf), and every name that passes through that chain collapses
//! to the same prefix.

use std::collections::{BTreeMap, BTreeSet};

/// Marks "a name ends here" among a node's children.
const TERMINAL: &str = "";

#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

/// Trie of whitespace-delimited words.
#[derive(Debug, Default)]
pub struct WordTrie {
    root: Node,
}

impl WordTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one spec name. Names with no words are ignored.
    pub fn insert(&mut self, name: &str) {
        let mut words = name.split_whitespace().peekable();
        if words.peek().is_none() {
            return;
        }

        let mut node = &mut self.root;
        for word in words {
            node = node.children.entry(word.to_string()).or_default();
        }
        node.children.entry(TERMINAL.to_string()).or_default();
    }

    /// Whether no names have been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Collapse every inserted name to its minimal prefix.
    pub fn min_prefixes(&self) -> BTreeSet<String> {
        let mut prefixes = BTreeSet::new();

        for (first, entry) in &self.root.children {
            let mut words = vec![first.as_str()];
            let mut node = entry;

            while node.children.len() == 1 {
                let Some((word, child)) = node.children.iter().next() else {
                    break;
                };
                if word != TERMINAL {
                    words.push(word);
                }
                node = child;
            }

            prefixes.insert(words.join(" "));
        }

        prefixes
    }
}

/// Build a trie from `names` and return the deduplicated minimal prefixes.
pub fn minimal_prefixes<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = WordTrie::new();
    for name in names {
        trie.insert(name.as_ref());
    }
    trie.min_prefixes()
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
