//! One entry of the word list.
//!
//! A line reads `word,translation,part_of_speech,meaning`. The meaning may be
//! wrapped in double quotes, in which case it runs up to the closing quote and
//! can contain commas.

use std::str::FromStr;

use serde::Serialize;

use crate::error::dictionary::DictionaryError;

/// A parsed dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryRecord {
    /// Headword as written in the word list
    pub word: String,

    /// Translation of the headword
    pub translation: String,

    /// Grammatical category, e.g. `noun`
    pub part_of_speech: String,

    /// Definition text
    pub meaning: String,

    /// The line this record was parsed from
    #[serde(skip)]
    raw: String,
}

impl DictionaryRecord {
    /// Parses a line read from line `line_number` (one-based) of a file.
    ///
    /// Missing trailing fields are left empty. A line whose word field is
    /// blank is rejected.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Self, DictionaryError> {
        let mut fields = line.splitn(4, ',');
        let word = fields.next().unwrap_or_default().trim();
        if word.is_empty() {
            return Err(DictionaryError::MalformedRecord {
                line_number,
                reason: "word field is empty".to_string(),
            });
        }

        let translation = fields.next().unwrap_or_default().trim();
        let part_of_speech = fields.next().unwrap_or_default().trim();
        let rest = fields.next().unwrap_or_default();

        let meaning = match rest.split_once('"') {
            Some((_, quoted)) => quoted.split('"').next().unwrap_or_default(),
            None => rest.split(',').next().unwrap_or_default(),
        };

        Ok(Self {
            word: word.to_string(),
            translation: translation.to_string(),
            part_of_speech: part_of_speech.to_string(),
            meaning: meaning.trim().to_string(),
            raw: line.to_string(),
        })
    }

    /// Returns the line this record was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Key under which the word is stored in the prefix index.
    pub fn index_key(&self) -> String {
        normalize(&self.word)
    }

    /// Case-insensitive comparison of the headword with `query`.
    pub fn matches(&self, query: &str) -> bool {
        self.word.to_lowercase() == query.trim().to_lowercase()
    }
}

impl FromStr for DictionaryRecord {
    type Err = DictionaryError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse_line(0, line)
    }
}

/// Case folding applied to every key inserted in or queried against the index.
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}
