// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie Implementation
//!
//! This module provides a character-keyed trie used as the prefix index of
//! the dictionary. It answers two questions quickly: does any indexed word
//! start with a given prefix, and which words are they.
//!
//! Keys are taken verbatim. Case folding is the caller's job and has to be
//! applied the same way on insertion and on query.

mod node;
mod shared;

#[cfg(test)]
mod tests;

pub use node::TrieNode;
pub use shared::SharedPrefixTrie;

/// A character trie over a set of words.
///
/// Key features:
/// * Prefix existence checks in O(prefix length)
/// * Enumeration of every word under a prefix in lexicographic order
/// * Idempotent insertion
///
/// Enumeration is a pre-order walk with children visited in ascending
/// character order, so a word is always listed before its extensions.
#[derive(Debug, Clone, Default)]
pub struct PrefixTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words inserted
    word_count: usize,
}

impl PrefixTrie {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes are created along the way and the last one is marked
    /// terminal. The empty string marks the root itself.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before, `false` otherwise. The
    /// structure is unchanged when the word was already there.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let mut node = &mut self.root;
        for c in word.as_ref().chars() {
            node = node.child_or_insert(c);
        }

        let is_new = !node.is_terminal();
        if is_new {
            node.set_terminal(true);
            self.word_count += 1;
        }
        is_new
    }

    /// Checks whether some inserted word starts with `prefix`.
    ///
    /// This reports path existence, not membership: `is_prefix("APPL")` holds
    /// once `APPLE` is inserted. The empty prefix is always accepted, even on
    /// an empty trie.
    pub fn is_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Checks whether `word` itself was inserted.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Collects every inserted word that starts with `prefix`.
    ///
    /// # Returns
    ///
    /// The words in lexicographic order, the prefix itself included when it
    /// is a word. Empty when no word has this prefix.
    pub fn all_words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.words_with_prefix(prefix).collect()
    }

    /// Lazily walks every inserted word that starts with `prefix`.
    ///
    /// Yields the same sequence as [`PrefixTrie::all_words_with_prefix`].
    pub fn words_with_prefix<P>(&self, prefix: P) -> WordsWithPrefix<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let stack = match self.find_node(prefix) {
            Some(node) => vec![(node, prefix.to_string())],
            None => Vec::new(),
        };
        WordsWithPrefix { stack }
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Follows `path` from the root.
    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}

impl<S> Extend<S> for PrefixTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for PrefixTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = PrefixTrie::new();
        trie.extend(iter);
        trie
    }
}

/// Iterator over the words below a prefix node.
///
/// Created by [`PrefixTrie::words_with_prefix`]. Keeps an explicit stack of
/// (node, accumulated word) pairs instead of recursing.
#[derive(Debug)]
pub struct WordsWithPrefix<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl Iterator for WordsWithPrefix<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, word)) = self.stack.pop() {
            // Reverse push so the smallest label is popped first
            for child in node.children().rev() {
                if let Some(c) = child.label() {
                    let mut extended = String::with_capacity(word.len() + c.len_utf8());
                    extended.push_str(&word);
                    extended.push(c);
                    self.stack.push((child, extended));
                }
            }

            if node.is_terminal() {
                return Some(word);
            }
        }
        None
    }
}
