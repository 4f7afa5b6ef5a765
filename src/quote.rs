//! Bourne shell quoting of individual words and whole argument lists.

use crate::args::{flatten, Arg};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Characters that never need quoting in argument position.
pub const SAFE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@%_+=:,./-";
/// Characters that keep a special meaning inside double quotes.
pub const DANGEROUS: &[u8] = b"!\"`$\\";

/// Quoting class of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Needs no quoting at all.
    Safe,
    /// Special even inside double quotes.
    Dangerous,
    /// Anything else: whitespace, single quote, control and non-ASCII bytes.
    Other,
}

impl CharClass {
    /// Classify one byte.
    pub fn of(byte: u8) -> Self {
        if SAFE.contains(&byte) {
            CharClass::Safe
        } else if DANGEROUS.contains(&byte) {
            CharClass::Dangerous
        } else {
            CharClass::Other
        }
    }
}

/// How a word ends up quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Emitted as-is.
    Bare,
    /// Wrapped in double quotes without escapes.
    Double,
    /// Wrapped in single quotes.
    Single,
    /// Wrapped in double quotes with every dangerous byte backslash-escaped.
    Escaped,
}

impl QuoteStyle {
    /// Pick the quoting style for a word, looking at its raw bytes.
    ///
    /// The checks run in order: all-safe non-empty words stay bare, words without
    /// dangerous bytes get plain double quotes, words without a single quote get
    /// single quotes, and everything else is escaped inside double quotes.
    pub fn for_bytes(word: &[u8]) -> Self {
        if !word.is_empty() && word.iter().all(|&b| CharClass::of(b) == CharClass::Safe) {
            QuoteStyle::Bare
        } else if !word.iter().any(|&b| CharClass::of(b) == CharClass::Dangerous) {
            QuoteStyle::Double
        } else if !word.contains(&b'\'') {
            QuoteStyle::Single
        } else {
            QuoteStyle::Escaped
        }
    }

    /// Pick the quoting style for a UTF-8 word.
    pub fn for_word(word: &str) -> Self {
        Self::for_bytes(word.as_bytes())
    }

    fn delimiter(self) -> Option<char> {
        match self {
            QuoteStyle::Bare => None,
            QuoteStyle::Double | QuoteStyle::Escaped => Some('"'),
            QuoteStyle::Single => Some('\''),
        }
    }
}

/// Quote a single word for a Bourne shell.
///
/// Safe words are returned borrowed.
pub fn quote_word(word: &str) -> Cow<'_, str> {
    let style = QuoteStyle::for_word(word);
    trace!(?style, len = word.len(), "quoting word");

    let Some(delim) = style.delimiter() else {
        return Cow::Borrowed(word);
    };

    let mut out = String::with_capacity(word.len() + 2);
    out.push(delim);
    if style == QuoteStyle::Escaped {
        // Dangerous bytes are ASCII, so every index we split at is a char boundary.
        let mut start = 0;
        for (i, b) in word.bytes().enumerate() {
            if CharClass::of(b) == CharClass::Dangerous {
                out.push_str(&word[start..i]);
                out.push('\\');
                start = i;
            }
        }
        out.push_str(&word[start..]);
    } else {
        out.push_str(word);
    }
    out.push(delim);
    Cow::Owned(out)
}

/// Quote a word given as raw bytes, which need not be valid UTF-8.
pub fn quote_bytes(word: &[u8]) -> Cow<'_, [u8]> {
    let style = QuoteStyle::for_bytes(word);
    trace!(?style, len = word.len(), "quoting bytes");

    let Some(delim) = style.delimiter() else {
        return Cow::Borrowed(word);
    };
    let delim = delim as u8;

    let mut out = Vec::with_capacity(word.len() + 2);
    out.push(delim);
    for &b in word {
        if style == QuoteStyle::Escaped && CharClass::of(b) == CharClass::Dangerous {
            out.push(b'\\');
        }
        out.push(b);
    }
    out.push(delim);
    Cow::Owned(out)
}

/// Quote each word of an already flat list and join them with single spaces.
pub fn join_words<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&quote_word(word.as_ref()));
    }
    out
}

/// Byte-level counterpart of [`join_words`].
pub fn shellquote_bytes<I, S>(words: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut out = Vec::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            out.push(b' ');
        }
        out.extend_from_slice(&quote_bytes(word.as_ref()));
    }
    out
}

/// Flatten nested arguments, quote every word and join them with single spaces.
///
/// Total over its input: an empty list yields an empty string.
pub fn shellquote(args: &[Arg]) -> String {
    let words = flatten(args);
    debug!(words = words.len(), "flattened arguments");
    join_words(words)
}
