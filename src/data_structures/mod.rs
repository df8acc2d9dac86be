//! Data structures for wordtrie.
//!
//! The prefix index behind every dictionary query lives here.

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{PrefixTrie, SharedPrefixTrie, TrieNode, WordsWithPrefix};
