//! Core types for the transform kit library
//!
//! This module defines the dynamic value type that flows through callables,
//! the insertion-ordered pair list consumed by the pair-iteration operation,
//! and the library error type. The library is stateless and pure - callers
//! own all collections and decide what to do with the results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for transform and callable operations
pub type Result<T> = std::result::Result<T, CallError>;

/// Errors that can occur when invoking transforms and callables
///
/// Both variants are programmer errors surfaced immediately - there is
/// nothing to retry and no recovery beyond fixing the call site.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// A required transform was not supplied to an operation that mandates one
    #[error("no transform supplied to {operation}")]
    MissingTransform {
        /// Name of the operation that was called without a transform
        operation: &'static str,
    },

    /// A strict-arity callable was invoked with a mismatched argument count
    /// and no declared default covered the gap
    #[error("callable '{name}' expected {expected} argument(s), got {supplied}")]
    ArityMismatch {
        /// Name of the offending callable
        name: String,
        /// Declared parameter count
        expected: usize,
        /// Argument count actually supplied
        supplied: usize,
    },
}

/// Dynamic value type passed to and returned from callables
///
/// `Absent` is the null-like marker that lenient-arity invocation substitutes
/// for missing arguments. It renders as an empty string, so interpolating an
/// absent value into a message produces the same output as interpolating nil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Signed integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// Text value (labels, messages)
    Text(String),
    /// Missing-argument marker substituted by lenient invocation
    Absent,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Absent => Ok(()),
        }
    }
}

impl Value {
    /// Convert to i64 if the value is numeric
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Convert to f64 if the value is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the text content if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Check whether this is the missing-argument marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Insertion-ordered mapping with unique keys
///
/// Backed by a vector of entries so that iteration order is always the order
/// of first insertion. Inserting an existing key replaces its value in place
/// without changing its position. Transform operations take a `&PairList` and
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PairList<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: PartialEq, V> PairList<K, V> {
    /// Create an empty pair list
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a key/value pair, replacing the value if the key exists
    ///
    /// Returns the previous value for the key, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up the value for a key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the list holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for PairList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (k, v) in iter {
            list.insert(k, v);
        }
        list
    }
}
