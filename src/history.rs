//! Search history.
//!
//! Every successful search appends the raw record line to a plain text file,
//! one record per line. Reading it back parses those lines again.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::dictionary::DictionaryRecord;
use crate::error::dictionary::DictionaryError;

/// Append-only history of looked-up records.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    path: PathBuf,
}

impl SearchHistory {
    /// Creates a history backed by the file at `path`.
    ///
    /// The file is created on the first append.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` to the history file.
    pub fn append(&self, record: &DictionaryRecord) -> Result<(), DictionaryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        writeln!(file, "{}", record.raw()).map_err(|e| self.io_error(e))?;
        tracing::debug!(word = %record.word, path = %self.path.display(), "History entry saved");
        Ok(())
    }

    /// Reads all entries, oldest first.
    ///
    /// A missing file is an empty history. Lines that no longer parse are
    /// skipped with a warning.
    pub fn entries(&self) -> Result<Vec<DictionaryRecord>, DictionaryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut entries = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;
            if line.trim().is_empty() {
                continue;
            }
            match DictionaryRecord::parse_line(i + 1, &line) {
                Ok(record) => entries.push(record),
                Err(e) => tracing::warn!(error = %e, "Skipping history line"),
            }
        }
        Ok(entries)
    }

    fn io_error(&self, source: std::io::Error) -> DictionaryError {
        DictionaryError::from_io(&self.path, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = tempdir().unwrap();
        let history = SearchHistory::new(dir.path().join("history.txt"));
        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_read_back() {
        let dir = tempdir().unwrap();
        let history = SearchHistory::new(dir.path().join("history.txt"));

        let first: DictionaryRecord = "cat,chat,noun,\"a small, furry animal\"".parse().unwrap();
        let second: DictionaryRecord = "run,courir,verb,move fast".parse().unwrap();
        history.append(&first).unwrap();
        history.append(&second).unwrap();
        history.append(&first).unwrap();

        let entries = history.entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].meaning, "a small, furry animal");
        assert_eq!(entries[1].translation, "courir");
        assert_eq!(entries[2].raw(), first.raw());
    }

    #[test]
    fn test_unparsable_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.txt");
        std::fs::write(&path, "dog,chien,noun,barks\n,,,\n\nowl,hibou,noun,hoots\n").unwrap();

        let words: Vec<_> = SearchHistory::new(path)
            .entries()
            .unwrap()
            .into_iter()
            .map(|record| record.word)
            .collect();
        assert_eq!(words, vec!["dog", "owl"]);
    }
}
