// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix trie.
//!
//! Nodes are the building blocks of the trie. Each one owns its children
//! outright, keyed by character in sorted order so that walks over the
//! subtree are deterministic.

use std::collections::BTreeMap;

/// A node in the prefix trie.
///
/// Each non-root node represents one character transition. A node is terminal
/// when a complete word ends at it; terminal nodes may still have children
/// (`CAT` ends at a node that also leads to `CATALOG`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Character on the edge leading to this node, `None` for the root
    label: Option<char>,

    /// Whether a complete word ends at this node
    is_terminal: bool,

    /// Child nodes keyed by their label
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates an empty, unlabeled node (used for the root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty node reached through the character `label`.
    pub fn with_label(label: char) -> Self {
        Self {
            label: Some(label),
            ..Self::default()
        }
    }

    /// Returns the label of this node, `None` for the root.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Returns whether a complete word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Marks or unmarks this node as the end of a word.
    pub fn set_terminal(&mut self, is_terminal: bool) {
        self.is_terminal = is_terminal;
    }

    /// Looks up the child reached through `c`.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child reached through `c`, creating it if absent.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children
            .entry(c)
            .or_insert_with(|| TrieNode::with_label(c))
    }

    /// Iterates over the children in ascending label order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_defaults() {
        let root = TrieNode::new();
        assert_eq!(root.label(), None);
        assert!(!root.is_terminal());
        assert!(root.is_leaf());

        let node = TrieNode::with_label('q');
        assert_eq!(node.label(), Some('q'));
        assert!(!node.is_terminal());
    }

    #[test]
    fn test_child_lookup_and_creation() {
        let mut root = TrieNode::new();
        assert!(root.child('a').is_none());

        root.child_or_insert('b').set_terminal(true);
        root.child_or_insert('a');
        // Second call must hand back the existing child, not replace it
        assert!(root.child_or_insert('b').is_terminal());

        let labels: Vec<_> = root.children().filter_map(TrieNode::label).collect();
        assert_eq!(labels, vec!['a', 'b']);
    }
}
