//! Nested argument lists and their decoding from JSON.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while decoding an argument list.
#[derive(Debug, Error)]
pub enum ArgError {
    #[error("failed to parse JSON arguments: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array of arguments, found {found}")]
    NotAList { found: JsonKind },

    #[error("invalid argument at {path}: expected a string or a list, found {found}")]
    InvalidArgument { path: String, found: JsonKind },
}

/// The JSON type of a rejected value, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "a boolean",
            JsonKind::Number => "a number",
            JsonKind::String => "a string",
            JsonKind::Array => "an array",
            JsonKind::Object => "an object",
        };
        f.write_str(name)
    }
}

/// Policy for scalars that are not strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Reject anything that is not a string or a list.
    #[default]
    Strict,
    /// Accept numbers and booleans using their JSON text. Null and objects are
    /// still rejected.
    Stringify,
}

/// One argument: a word, or a list of further arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Word(String),
    List(Vec<Arg>),
}

impl Arg {
    /// Parse a JSON array into a list of arguments.
    ///
    /// Arrays nest to any depth; strings become words. Other scalars are handled
    /// according to `coercion`.
    pub fn from_json(json: &str, coercion: Coercion) -> Result<Vec<Arg>, ArgError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value, coercion)
    }

    /// Convert an already parsed JSON array into a list of arguments.
    pub fn from_value(value: &Value, coercion: Coercion) -> Result<Vec<Arg>, ArgError> {
        match value {
            Value::Array(items) => decode_items(items, "$", coercion),
            other => Err(ArgError::NotAList {
                found: JsonKind::of(other),
            }),
        }
    }
}

fn decode_items(items: &[Value], path: &str, coercion: Coercion) -> Result<Vec<Arg>, ArgError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_item(item, &format!("{}[{}]", path, i), coercion))
        .collect()
}

fn decode_item(value: &Value, path: &str, coercion: Coercion) -> Result<Arg, ArgError> {
    match (value, coercion) {
        (Value::String(s), _) => Ok(Arg::Word(s.clone())),
        (Value::Array(items), _) => decode_items(items, path, coercion).map(Arg::List),
        (Value::Number(n), Coercion::Stringify) => Ok(Arg::Word(n.to_string())),
        (Value::Bool(b), Coercion::Stringify) => Ok(Arg::Word(b.to_string())),
        (other, _) => Err(ArgError::InvalidArgument {
            path: path.to_string(),
            found: JsonKind::of(other),
        }),
    }
}

impl From<&str> for Arg {
    fn from(word: &str) -> Self {
        Arg::Word(word.to_string())
    }
}

impl From<String> for Arg {
    fn from(word: String) -> Self {
        Arg::Word(word)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::List(items.into_iter().map(Into::into).collect())
    }
}

/// Flatten nested arguments into words, depth-first and left to right.
pub fn flatten(args: &[Arg]) -> Vec<&str> {
    let mut words = Vec::new();
    flatten_into(args, &mut words);
    words
}

fn flatten_into<'a>(args: &'a [Arg], words: &mut Vec<&'a str>) {
    for arg in args {
        match arg {
            Arg::Word(word) => words.push(word),
            Arg::List(items) => flatten_into(items, words),
        }
    }
}
