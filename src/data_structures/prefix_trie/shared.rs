// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-shareable handle around a [`PrefixTrie`].
//!
//! One mutex guards the whole trie for both inserts and queries. Updates are
//! rare and small, so there is no reader/writer split.

use std::sync::Arc;

use parking_lot::Mutex;

use super::PrefixTrie;

/// A cloneable, lock-guarded prefix trie.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixTrie {
    inner: Arc<Mutex<PrefixTrie>>,
}

impl SharedPrefixTrie {
    /// Creates a new empty shared trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already built trie.
    pub fn from_trie(trie: PrefixTrie) -> Self {
        Self {
            inner: Arc::new(Mutex::new(trie)),
        }
    }

    /// See [`PrefixTrie::insert`].
    pub fn insert<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.lock().insert(word)
    }

    /// See [`PrefixTrie::is_prefix`].
    pub fn is_prefix<P: AsRef<str>>(&self, prefix: P) -> bool {
        self.inner.lock().is_prefix(prefix)
    }

    /// See [`PrefixTrie::all_words_with_prefix`].
    pub fn all_words_with_prefix<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        self.inner.lock().all_words_with_prefix(prefix)
    }

    /// See [`PrefixTrie::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`PrefixTrie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a copy of the current trie contents.
    pub fn snapshot(&self) -> PrefixTrie {
        self.inner.lock().clone()
    }
}
