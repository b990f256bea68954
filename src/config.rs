//! # Configuration
//!
//! Command line arguments and the fixed strings of the interactive dialogue.

use std::path::PathBuf;
use clap::{Parser, ValueEnum};

/// Environment variable consulted when no corpus path is given.
pub const CORPUS_ENV: &str = "BOOLEAN_SEARCH_CORPUS";

/// Default `RUST_LOG` directive when none is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const BUILDING_BANNER: &str = "Stand by while building index...";
pub const QUERY_PROMPT: &str = "Enter query sentence (press enter to quit): ";
pub const UNAVAILABLE_MESSAGE: &str = "Invalid filename.";
pub const FAREWELL: &str = "Thank you for searching!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Prompts, banners and one identifier per line
    #[default]
    Text,
    /// One JSON object per line, no prompts
    Json,
}

/// Boolean keyword search over a line-paired document corpus
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Corpus file: identifier and text lines, alternating
    #[arg(env = CORPUS_ENV)]
    pub corpus: PathBuf,

    /// Run this query instead of reading queries from stdin (repeatable)
    #[arg(short, long = "query", value_name = "QUERY", allow_hyphen_values = true)]
    pub queries: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corpus_and_defaults() {
        let args = Args::try_parse_from(["boolean-search", "tiny.txt"]).unwrap();
        assert_eq!(args.corpus, PathBuf::from("tiny.txt"));
        assert!(args.queries.is_empty());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn parses_repeated_queries_and_json() {
        let args = Args::try_parse_from([
            "boolean-search", "tiny.txt", "-q", "red +fish", "--query", "blue", "--format", "json",
        ])
        .unwrap();
        assert_eq!(args.queries, vec!["red +fish".to_string(), "blue".to_string()]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn query_may_start_with_a_modifier() {
        let args = Args::try_parse_from(["boolean-search", "tiny.txt", "-q", "-red fish"]).unwrap();
        assert_eq!(args.queries, vec!["-red fish".to_string()]);
    }

    #[test]
    fn debug_assert_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
