//! Rendering of a quoting run as plain text or as a JSON report.

use crate::args::{flatten, Arg};
use crate::quote::{quote_word, shellquote, QuoteStyle};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for the rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The quoted command line only
    #[default]
    Text,
    /// A JSON report with the style chosen for every word
    Json,
}

/// How a single word was quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub word: String,
    pub style: QuoteStyle,
    pub quoted: String,
}

/// Full report of a quoting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteReport {
    pub result: String,
    pub words: Vec<WordReport>,
}

impl QuoteReport {
    /// Build a report for the given arguments.
    pub fn new(args: &[Arg]) -> Self {
        let words = flatten(args)
            .into_iter()
            .map(|word| WordReport {
                word: word.to_string(),
                style: QuoteStyle::for_word(word),
                quoted: quote_word(word).into_owned(),
            })
            .collect();

        Self {
            result: shellquote(args),
            words,
        }
    }
}

/// Generate the output for the given arguments in the requested format.
pub fn generate_output_string(
    args: &[Arg],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(shellquote(args)),
        OutputFormat::Json => serde_json::to_string_pretty(&QuoteReport::new(args)),
    }
}
