//! Dot-path resolution over content documents.
//!
//! Binding targets name their content with dot-delimited paths such as
//! `nav.links` or `about.skills.tech.items`. Resolution never fails: a
//! missing segment, an empty segment, or a traversal into a non-mapping
//! value short-circuits to [`Resolved::Undefined`].

use super::value::Value;

/// Outcome of resolving a path against a content document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// The path named an existing value
    Found(&'a Value),
    /// Some segment was missing or hit a non-mapping value
    Undefined,
}

impl<'a> Resolved<'a> {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Converts to an `Option`, dropping the sentinel
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::Undefined => None,
        }
    }
}

/// Resolves `path` against `root`, one mapping lookup per dot-separated
/// segment. Pure; no allocation beyond the segment iterator.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Resolved<'a> {
    if path.is_empty() {
        return Resolved::Undefined;
    }

    let mut current = root;
    for segment in path.split('.') {
        if segment.is_empty() {
            return Resolved::Undefined;
        }
        match current {
            Value::Map(map) => match map.get(segment) {
                Some(next) => current = next,
                None => return Resolved::Undefined,
            },
            _ => return Resolved::Undefined,
        }
    }
    Resolved::Found(current)
}
