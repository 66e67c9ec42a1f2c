//! Value types for the site content document.
//!
//! This module defines the nested value tree that page copy is stored in,
//! along with the `ContentDocument` wrapper that the binding engine consumes.

use std::collections::HashMap;
use std::fmt;

use crate::error::{RenderError, RenderErrorKind, Result, SemanticError};

/// Represents one node of the parsed content document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Represents a null value
    Null,
    /// Represents a boolean value
    Boolean(bool),
    /// Represents a number (stored as f64 for simplicity)
    Number(f64),
    /// Represents a string value
    String(String),
    /// Represents an ordered sequence of values
    Array(Vec<Value>),
    /// Represents a nested mapping (a config section or record)
    Map(HashMap<String, Value>),
}

impl Value {
    /// Returns the contained string slice, or `None` for non-string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the contained sequence, or `None` for non-array values.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the contained mapping, or `None` for non-map values.
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The scalar text form used when a binding target gets plain text.
    ///
    /// Strings render without quotes; everything else falls back to the
    /// `Display` form.
    pub fn render_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            Self::Map(obj) => {
                write!(f, "{{")?;
                for (i, (key, val)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, val)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// The immutable site configuration consumed by the binding engine.
///
/// Constructed once from parsed JSON and injected wherever binding happens;
/// nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument {
    root: Value,
}

impl ContentDocument {
    /// Wraps a parsed value tree. The root must be a mapping; anything else
    /// cannot describe a page and is rejected up front.
    pub fn new(root: Value) -> Result<Self> {
        match root {
            Value::Map(_) => Ok(Self { root }),
            _ => Err(RenderError::new(RenderErrorKind::Semantic(
                SemanticError::DocumentNotMap,
            ))),
        }
    }

    /// Parses a content document from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        let mut parser = super::json::ContentParser::new(input)?;
        Self::new(parser.parse()?)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolves a dot-delimited path against the document.
    pub fn resolve(&self, path: &str) -> super::path::Resolved<'_> {
        super::path::resolve(&self.root, path)
    }

    /// Convenience accessor for a string leaf, `None` when the path is
    /// missing or not a string.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        match self.resolve(path) {
            super::path::Resolved::Found(value) => value.as_str(),
            super::path::Resolved::Undefined => None,
        }
    }
}

// Helper function to compare values structurally rather than by string
// representation
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Map(l_map), Value::Map(r_map)) => {
            if l_map.len() != r_map.len() {
                return false;
            }
            l_map
                .iter()
                .all(|(k, v)| r_map.get(k).is_some_and(|r_v| values_equal(v, r_v)))
        }
        (Value::Array(l_arr), Value::Array(r_arr)) => {
            if l_arr.len() != r_arr.len() {
                return false;
            }
            l_arr
                .iter()
                .zip(r_arr.iter())
                .all(|(l, r)| values_equal(l, r))
        }
        (Value::Number(l), Value::Number(r)) => (l - r).abs() < f64::EPSILON,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}
