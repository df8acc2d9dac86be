//! The dictionary: word list records plus their prefix index.
//!
//! Every record is kept in load order for metadata lookups, and its
//! uppercased headword goes into a [`PrefixTrie`] for prefix queries.

mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_structures::PrefixTrie;
use crate::error::dictionary::DictionaryError;

pub use record::{normalize, DictionaryRecord};

/// Word list records with a prefix index over their headwords.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    index: PrefixTrie,
    records: Vec<DictionaryRecord>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the word list at `path`.
    ///
    /// Blank and malformed lines are skipped with a warning.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DictionaryError::from_io(path, e))?;
        let dictionary =
            Self::from_reader(BufReader::new(file)).map_err(|e| DictionaryError::from_io(path, e))?;

        tracing::info!(
            records = dictionary.len(),
            indexed = dictionary.index.len(),
            "Dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Reads records line by line from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut dictionary = Self::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match DictionaryRecord::parse_line(i + 1, &line) {
                Ok(record) => dictionary.add(record),
                Err(e) => tracing::warn!(error = %e, "Skipping dictionary line"),
            }
        }
        Ok(dictionary)
    }

    /// Adds a record and indexes its headword.
    pub fn add(&mut self, record: DictionaryRecord) {
        self.index.insert(record.index_key());
        self.records.push(record);
    }

    /// Finds the first record whose headword equals `query`, ignoring case.
    pub fn lookup(&self, query: &str) -> Option<&DictionaryRecord> {
        self.records.iter().find(|record| record.matches(query))
    }

    /// Returns the translation of `query`, ignoring case.
    pub fn translate(&self, query: &str) -> Option<&str> {
        self.lookup(query).map(|record| record.translation.as_str())
    }

    /// Lists the indexed words under the longest leading part of `query`
    /// that any word starts with.
    ///
    /// The query is shortened one character at a time. Returns an empty list
    /// when not even its first character starts a word.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let key: Vec<char> = normalize(query).chars().collect();

        // Nodes are only created along inserted words, so an existing
        // path always has at least one word below it.
        (1..=key.len())
            .rev()
            .map(|size| key[..size].iter().collect::<String>())
            .find(|prefix| self.index.is_prefix(prefix))
            .map(|prefix| self.index.all_words_with_prefix(prefix))
            .unwrap_or_default()
    }

    /// Returns the prefix index.
    pub fn index(&self) -> &PrefixTrie {
        &self.index
    }

    /// Returns the records in load order.
    pub fn records(&self) -> &[DictionaryRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the dictionary holds no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<DictionaryRecord> for Dictionary {
    fn from_iter<I: IntoIterator<Item = DictionaryRecord>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for record in iter {
            dictionary.add(record);
        }
        dictionary
    }
}
