//! shellquote - Bourne shell quoting for nested argument lists.
//!
//! This library flattens nested lists of words, quotes each word with the
//! lightest style a Bourne shell will read back verbatim, and joins the
//! quoted words with single spaces.

pub mod args;
pub mod output;
pub mod quote;

pub use args::{flatten, Arg, ArgError, Coercion};
pub use output::{generate_output_string, OutputFormat, QuoteReport};
pub use quote::{
    join_words, quote_bytes, quote_word, shellquote, shellquote_bytes, CharClass, QuoteStyle,
};
