//! Tag resolution for blueprint strings.
//!
//! # Invariants
//! - A string is a tag only when it starts with the open delimiter and ends
//!   with the close delimiter.
//! - Exactly one delimiter layer is stripped per resolution.
//! - Unmatched tags resolve to their bare name, never to the wrapped input.

use crate::error::{SequenceError, SequenceResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

pub const DEFAULT_TAG_OPEN: &str = "{";
pub const DEFAULT_TAG_CLOSE: &str = "}";

static DEFAULT_TAG_SYNTAX: Lazy<TagSyntax> = Lazy::new(|| {
    TagSyntax::new(DEFAULT_TAG_OPEN, DEFAULT_TAG_CLOSE).expect("default tag syntax is valid")
});

/// Delimiter pair marking a substitution tag.
#[derive(Debug, Clone)]
pub struct TagSyntax {
    open: String,
    close: String,
    pattern: Regex,
}

impl TagSyntax {
    /// Creates a delimiter pair.
    ///
    /// # Errors
    /// - `InvalidTagSyntax` when a delimiter is empty, contains whitespace,
    ///   or both delimiters are identical.
    pub fn new(open: &str, close: &str) -> SequenceResult<Self> {
        for (side, delimiter) in [("open", open), ("close", close)] {
            if delimiter.is_empty() {
                return Err(SequenceError::InvalidTagSyntax(format!(
                    "{side} delimiter cannot be empty"
                )));
            }
            if delimiter.chars().any(char::is_whitespace) {
                return Err(SequenceError::InvalidTagSyntax(format!(
                    "{side} delimiter `{delimiter}` contains whitespace"
                )));
            }
        }
        if open == close {
            return Err(SequenceError::InvalidTagSyntax(format!(
                "open and close delimiters are both `{open}`"
            )));
        }

        let source = format!("(?s)^{}(.*){}$", regex::escape(open), regex::escape(close));
        let pattern =
            Regex::new(&source).map_err(|err| SequenceError::InvalidTagSyntax(err.to_string()))?;
        Ok(Self {
            open: open.to_string(),
            close: close.to_string(),
            pattern,
        })
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Returns the tag name inside one delimiter layer, if `text` is a tag.
    pub fn strip<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str())
    }

    /// Resolves `text` against `values`.
    ///
    /// - Not a tag: returned unchanged as a string.
    /// - Tag with a matching entry: the entry, verbatim.
    /// - Tag without a match: the bare tag name.
    pub fn resolve<V>(&self, text: &str, values: &V) -> Value
    where
        V: TagValues + ?Sized,
    {
        match self.strip(text) {
            Some(name) => values
                .tag_value(name)
                .unwrap_or_else(|| Value::String(name.to_string())),
            None => Value::String(text.to_string()),
        }
    }
}

impl Default for TagSyntax {
    fn default() -> Self {
        DEFAULT_TAG_SYNTAX.clone()
    }
}

impl PartialEq for TagSyntax {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open && self.close == other.close
    }
}

impl Eq for TagSyntax {}

/// Resolves `text` with the default `{`/`}` syntax.
pub fn resolve_tag<V>(text: &str, values: &V) -> Value
where
    V: TagValues + ?Sized,
{
    DEFAULT_TAG_SYNTAX.resolve(text, values)
}

/// A mapping from tag name to substitution value.
pub trait TagValues {
    fn tag_value(&self, name: &str) -> Option<Value>;
}

impl TagValues for Map<String, Value> {
    fn tag_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Only JSON objects carry entries; any other value matches nothing.
impl TagValues for Value {
    fn tag_value(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.tag_value(name))
    }
}

impl<V> TagValues for BTreeMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn tag_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<V, S> TagValues for HashMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn tag_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}
