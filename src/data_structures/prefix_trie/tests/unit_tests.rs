// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the prefix trie.

use crate::data_structures::prefix_trie::PrefixTrie;

#[test]
fn test_trie_basic_operations() {
    let mut trie = PrefixTrie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);

    // Test insertion
    assert!(trie.insert("HELLO"));
    assert_eq!(trie.len(), 1);
    assert!(!trie.is_empty());

    // Test membership against prefix checks
    assert!(trie.contains("HELLO"));
    assert!(!trie.contains("HELL"));
    assert!(trie.is_prefix("HELL"));
    assert!(!trie.is_prefix("HELLO WORLD"));

    // Keys are case sensitive, folding belongs to the caller
    assert!(!trie.is_prefix("hello"));
}

#[test]
fn test_empty_prefix_on_empty_trie() {
    let trie = PrefixTrie::new();
    assert!(trie.is_prefix(""));
    assert!(trie.all_words_with_prefix("").is_empty());
    assert!(trie.all_words_with_prefix("A").is_empty());
}

#[test]
fn test_word_and_its_extension() {
    let trie: PrefixTrie = ["CAT", "CATALOG"].into_iter().collect();

    assert_eq!(trie.all_words_with_prefix("CAT"), vec!["CAT", "CATALOG"]);
    assert_eq!(trie.all_words_with_prefix("CATA"), vec!["CATALOG"]);
    assert!(trie.all_words_with_prefix("DOG").is_empty());
}

#[test]
fn test_apple_scenario() {
    let mut trie = PrefixTrie::new();
    trie.insert("APPLE");
    trie.insert("APP");
    trie.insert("APPLY");

    assert_eq!(trie.all_words_with_prefix("APP"), vec!["APP", "APPLE", "APPLY"]);
    assert!(trie.is_prefix("APPL"));
    assert!(!trie.is_prefix("BANANA"));
}

#[test]
fn test_insert_is_idempotent() {
    let mut trie = PrefixTrie::new();
    assert!(trie.insert("WORD"));
    assert!(!trie.insert("WORD"));
    assert!(!trie.insert("WORD"));

    assert_eq!(trie.len(), 1);
    assert_eq!(trie.all_words_with_prefix(""), vec!["WORD"]);
}

#[test]
fn test_empty_word_marks_root() {
    let mut trie = PrefixTrie::new();
    assert!(!trie.contains(""));
    assert!(trie.insert(""));
    assert!(trie.contains(""));

    trie.insert("A");
    assert_eq!(trie.all_words_with_prefix(""), vec!["", "A"]);
}

#[test]
fn test_enumeration_is_lexicographic() {
    let trie: PrefixTrie = ["ZEBRA", "ANT", "MOLE", "ANTELOPE", "AARDVARK", "MOLD"]
        .into_iter()
        .collect();

    assert_eq!(
        trie.all_words_with_prefix(""),
        vec!["AARDVARK", "ANT", "ANTELOPE", "MOLD", "MOLE", "ZEBRA"]
    );
    assert_eq!(trie.all_words_with_prefix("MOL"), vec!["MOLD", "MOLE"]);
}

#[test]
fn test_non_ascii_characters() {
    let trie: PrefixTrie = ["ÉCOLE", "ÉCOUTER", "ÉTÉ"].into_iter().collect();

    assert!(trie.is_prefix("ÉC"));
    assert_eq!(trie.all_words_with_prefix("ÉCO"), vec!["ÉCOLE", "ÉCOUTER"]);
    assert_eq!(trie.all_words_with_prefix("É").len(), 3);
}

#[test]
fn test_lazy_iterator_matches_collected() {
    let trie: PrefixTrie = ["BAT", "BATH", "BATON", "BE"].into_iter().collect();

    let mut words = trie.words_with_prefix("BAT");
    assert_eq!(words.next().as_deref(), Some("BAT"));
    assert_eq!(words.next().as_deref(), Some("BATH"));
    assert_eq!(words.next().as_deref(), Some("BATON"));
    assert_eq!(words.next(), None);

    assert_eq!(trie.words_with_prefix("X").count(), 0);
}

#[test]
fn test_extend_adds_words() {
    let mut trie: PrefixTrie = ["ONE"].into_iter().collect();
    trie.extend(vec!["TWO".to_string(), "THREE".to_string(), "ONE".to_string()]);

    assert_eq!(trie.len(), 3);
    assert_eq!(trie.all_words_with_prefix("T"), vec!["THREE", "TWO"]);
}
