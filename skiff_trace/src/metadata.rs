//! Contains the structured diagnostic payload optionally attached to an exception when it
//! is created.
//!
//! The payload is opaque to the exception machinery: it is stored on construction and
//! handed back to whichever handler eventually catches the exception, with nothing in
//! between reading or validating the entries. What ends up in here is entirely between the
//! code that raises and the code that handles.

use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// A single diagnostic value stored in a [`Metadata`] mapping.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Value {
    Text(Box<str>),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl From<Box<str>> for Value {
    #[inline]
    fn from(text: Box<str>) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(Box::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text.into_boxed_str())
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => Display::fmt(value, f),
            Self::Float(value) => Display::fmt(value, f),
            Self::Boolean(value) => Display::fmt(value, f),
        }
    }
}

/// A string-keyed mapping of diagnostic values.
///
/// Keys are unique; inserting under an existing key replaces the previous value. Iteration
/// order is unspecified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: FxHashMap<Box<str>, Value>,
}

impl Metadata {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any value previously stored under the same key.
    pub fn insert<K: Into<Box<str>>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_ref(), value))
    }
}

impl<K: Into<Box<str>>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
