//! Test modules for wordtrie.
//!
//! This module contains the cross-component tests:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary loading and lookups
//! - Interactive session behavior
//!
//! Tests of a single data structure live next to it.

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{sample_dictionary, word_strategy, TestFixture, SAMPLE_WORD_LIST};
