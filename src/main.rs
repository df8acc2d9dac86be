//! wordtrie - Main entrypoint.
//!
//! Parses the command line, loads configuration, initializes logging and
//! the dictionary, then runs either the interactive menu or a one-shot
//! command.

use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use wordtrie_lib::config::{ConfigLoader, LogConfig, WordTrieConfig, ENV_PREFIX};
use wordtrie_lib::dictionary::Dictionary;
use wordtrie_lib::error::{
    report_error, set_error_reporter, ErrorContext, TracingErrorReporter, WordTrieError,
    WordTrieResult,
};
use wordtrie_lib::history::SearchHistory;
use wordtrie_lib::prefix_test::PrefixTestRunner;
use wordtrie_lib::session::{OutputFormat, Session};

/// Configuration file picked up from the working directory when present.
const DEFAULT_CONFIG_PATH: &str = "wordtrie.toml";

/// Command line arguments for wordtrie.
#[derive(Parser, Debug)]
#[clap(name = "wordtrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the word list, overrides the configuration
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu (default)
    Interactive,

    /// Look up a word and print its meaning and type
    Search {
        /// Word to look up
        word: String,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the search history
    History,

    /// Print the translation of a word
    Translate {
        /// Word to translate
        word: String,
    },

    /// Run the batch prefix-count test
    TestPrefix {
        /// Fixture with one query per line
        #[clap(short, long, value_parser)]
        input: Option<PathBuf>,

        /// File the counts are appended to
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so the menu on stdout stays readable.
fn init_logging(log: &LogConfig) -> WordTrieResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if log.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(io::stderr),
            )
            .with(ErrorLayer::default())
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(io::stderr),
            )
            .with(ErrorLayer::default())
            .try_init()
    };

    result.map_err(|e| {
        WordTrieError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Load configuration, falling back to `wordtrie.toml` in the working directory.
fn load_config(explicit: Option<&Path>) -> WordTrieResult<WordTrieConfig> {
    let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_path.exists().then_some(default_path),
    };

    let loader = ConfigLoader::new(path.as_deref(), ENV_PREFIX);
    match loader.load() {
        Ok(config) => {
            init_logging(&config.log)?;
            Ok(config)
        }
        Err(e) => {
            // Logging still has to come up to report the failure
            init_logging(&LogConfig::default())?;
            Err(e.into())
        }
    }
}

/// Write the default configuration as TOML.
fn gen_config(output: &Path) -> anyhow::Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let toml = toml::to_string_pretty(&WordTrieConfig::default())
        .context("Failed to serialize config")?;
    std::fs::write(output, toml)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn run(args: Args) -> WordTrieResult<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(path) = args.dictionary {
        config.dictionary.path = path;
    }

    let command = args.command.unwrap_or(Command::Interactive);
    match command {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            return Ok(());
        }
        Command::GenConfig { output } => {
            gen_config(&output).map_err(|e| WordTrieError::Custom(format!("{e:#}")))?;
            info!("Default configuration written to {:?}", output);
            return Ok(());
        }
        _ => {}
    }

    let dictionary = Dictionary::load(&config.dictionary.path)?;
    let history = SearchHistory::new(&config.dictionary.history_path);
    let prefix_test = match &command {
        Command::TestPrefix { input, output } => PrefixTestRunner::new(
            input.clone().unwrap_or_else(|| config.prefix_test.input_path.clone()),
            output.clone().unwrap_or_else(|| config.prefix_test.output_path.clone()),
        ),
        _ => PrefixTestRunner::from_config(&config.prefix_test),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(dictionary, history, prefix_test, stdin.lock(), stdout.lock());

    match command {
        Command::Interactive => session.run(),
        Command::Search { word, json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            session.with_format(format).search(&word)
        }
        Command::History => session.print_history(),
        Command::Translate { word } => session.translate(&word),
        Command::TestPrefix { .. } => session.run_prefix_test(),
        Command::Validate | Command::GenConfig { .. } => Ok(()),
    }
}

/// Main entry point for the application.
fn main() {
    set_error_reporter(Arc::new(TracingErrorReporter));

    let args = <Args as clap::Parser>::parse();
    if let Err(e) = run(args) {
        report_error(ErrorContext::new(e, "wordtrie").with_span_trace());
        process::exit(1);
    }
}
