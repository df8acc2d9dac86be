//! wordtrie library
//!
//! A command-line dictionary built around a character trie. The word list is
//! loaded once at startup; headwords go into a prefix index, and the records
//! themselves stay in a list for exact lookups.
//!
//! # Architecture
//!
//! - [`data_structures`]: the prefix trie and its thread-shareable wrapper
//! - [`dictionary`]: record parsing, loading and lookups
//! - [`history`] and [`prefix_test`]: the file-backed features
//! - [`session`]: the interactive menu and result rendering
//! - [`config`] and [`error`]: the layered configuration and error types

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod history;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for wordtrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
