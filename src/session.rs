//! Interactive dictionary session.
//!
//! Drives the numbered menu over any line-oriented input and writer, so the
//! same code serves the terminal and the tests. The one-shot CLI commands
//! call the individual operations directly.

use std::io::{BufRead, Write};

use serde_json::json;

use crate::dictionary::Dictionary;
use crate::error::{report_error, ErrorContext, WordTrieError, WordTrieResult};
use crate::history::SearchHistory;
use crate::prefix_test::PrefixTestRunner;

const MENU: &str = "-----------------
Enter your choice
1. Search word
2. Print history on the terminal
3. Translate the word
4. Run tests
0. Exit";

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Look up a word
    Search,
    /// Print the search history
    History,
    /// Translate a word
    Translate,
    /// Run the batch prefix test
    PrefixTest,
    /// Leave the session
    Exit,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::Search),
            2 => Some(Self::History),
            3 => Some(Self::Translate),
            4 => Some(Self::PrefixTest),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How search results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON document per search
    Json,
}

/// A dictionary session bound to an input and an output.
#[derive(Debug)]
pub struct Session<R, W> {
    dictionary: Dictionary,
    history: SearchHistory,
    prefix_test: PrefixTestRunner,
    format: OutputFormat,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over a loaded dictionary.
    pub fn new(
        dictionary: Dictionary,
        history: SearchHistory,
        prefix_test: PrefixTestRunner,
        input: R,
        output: W,
    ) -> Self {
        Self {
            dictionary,
            history,
            prefix_test,
            format: OutputFormat::default(),
            input,
            output,
        }
    }

    /// Sets how search results are rendered.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the dictionary this session queries.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Consumes the session and returns its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or the input ends.
    ///
    /// A failing operation is reported and the loop goes on. Only errors on
    /// the session's own input or output end it. Operations report their file
    /// errors as [`DictionaryError`](crate::error::dictionary::DictionaryError),
    /// so a bare [`WordTrieError::Io`] always comes from the session streams.
    pub fn run(&mut self) -> WordTrieResult<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Choice: ")? else {
                return Ok(());
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(choice) => self.dispatch(choice),
                None => {
                    writeln!(self.output, "Wrong choice! Please try again!")?;
                    Ok(true)
                }
            };

            match outcome {
                Ok(true) => {}
                // Input ran out in the middle of an operation
                Ok(false) => return Ok(()),
                // The session streams are gone, nothing left to prompt on
                Err(WordTrieError::Io(e)) => return Err(WordTrieError::Io(e)),
                Err(e) => {
                    writeln!(self.output, "Operation failed: {e}")?;
                    report_error(
                        ErrorContext::new(e, "session")
                            .with_details(format!("menu choice {}", line.trim()))
                            .with_span_trace(),
                    );
                }
            }
            writeln!(self.output)?;
        }
    }

    /// Runs one menu entry. Returns `false` when the input ended.
    fn dispatch(&mut self, choice: MenuChoice) -> WordTrieResult<bool> {
        tracing::debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::Search => match self.prompt("Enter a word to search> ")? {
                Some(word) => self.search(&word)?,
                None => return Ok(false),
            },
            MenuChoice::History => self.print_history()?,
            MenuChoice::Translate => match self.prompt("Enter the word to translate: ")? {
                Some(word) => self.translate(&word)?,
                None => return Ok(false),
            },
            MenuChoice::PrefixTest => self.run_prefix_test()?,
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Looks up `query` and prints its meaning and type.
    ///
    /// A hit is appended to the history. A miss prints the words sharing the
    /// longest possible prefix with the query.
    pub fn search(&mut self, query: &str) -> WordTrieResult<()> {
        let query = query.trim().to_lowercase();

        match self.dictionary.lookup(&query) {
            Some(record) => {
                match self.format {
                    OutputFormat::Text => {
                        writeln!(self.output, "Meaning: {}", record.meaning)?;
                        writeln!(self.output, "Type: {}", record.part_of_speech)?;
                    }
                    OutputFormat::Json => {
                        let document = json!({
                            "query": query,
                            "found": true,
                            "record": record,
                        });
                        serde_json::to_writer_pretty(&mut self.output, &document)?;
                        writeln!(self.output)?;
                    }
                }
                self.history.append(record)?;
            }
            None => {
                let suggestions = self.dictionary.suggestions(&query);
                tracing::debug!(%query, suggestions = suggestions.len(), "Word not found");
                match self.format {
                    OutputFormat::Text => {
                        writeln!(
                            self.output,
                            "The word {query} can't be found in the dictionary! Here is some similar words :"
                        )?;
                        for word in &suggestions {
                            writeln!(self.output, "{word}")?;
                        }
                    }
                    OutputFormat::Json => {
                        let document = json!({
                            "query": query,
                            "found": false,
                            "suggestions": suggestions,
                        });
                        serde_json::to_writer_pretty(&mut self.output, &document)?;
                        writeln!(self.output)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Prints every history entry, oldest first.
    pub fn print_history(&mut self) -> WordTrieResult<()> {
        let entries = self.history.entries()?;
        if entries.is_empty() {
            writeln!(self.output, "No search history yet.")?;
            return Ok(());
        }

        for record in &entries {
            writeln!(
                self.output,
                "Word: {}, French translation: {}, Type: {}, Meaning: {}",
                record.word, record.translation, record.part_of_speech, record.meaning
            )?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Prints the translation of `query`.
    pub fn translate(&mut self, query: &str) -> WordTrieResult<()> {
        let query = query.trim();
        match self.dictionary.translate(query) {
            Some(translation) => writeln!(self.output, "{query}: {translation}")?,
            None => writeln!(self.output, "The word {query} can't be found in the dictionary")?,
        }
        Ok(())
    }

    /// Runs the batch prefix test and prints a summary.
    pub fn run_prefix_test(&mut self) -> WordTrieResult<()> {
        let report = self.prefix_test.run(&self.dictionary)?;
        writeln!(
            self.output,
            "Prefix test finished: {} queries, results appended to {}",
            report.queries(),
            report.output_path.display()
        )?;
        Ok(())
    }

    /// Prints `message` and reads one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> WordTrieResult<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
