//! Path resolution.
//!
//! A path is applied one segment at a time. Each step looks at the structural
//! kind of the current value:
//!
//! - records take string keys and match visible fields
//! - string-keyed mappings take string keys
//! - integer-keyed mappings take integer segments, or strings that parse as
//!   integers
//! - sequences take non-negative integer segments, or strings that parse as
//!   integers
//! - scalars cannot be indexed at all
//!
//! A key of the right type that is simply absent (or an index out of range)
//! resolves to `Ok(None)`. A key of the wrong type is a [`ResolveError`].
//! A wildcard hands the rest of the path to [`expand_all`].

use std::borrow::Cow;

use super::ast::Segment;
use super::coerce::{map_key, sequence_index};
use super::error::ResolveError;
use super::expand::expand_all;
use super::parser::parse_path;
use crate::value::{Mapping, Value};

/// Outcome of resolving a path.
///
/// `Ok(Some(value))` when found, `Ok(None)` when the path is well-typed but
/// nothing is there, and `Err` when a segment does not fit its container.
/// Values are borrowed from the root unless a wildcard had to build a new one.
pub type Resolution<'a> = Result<Option<Cow<'a, Value>>, ResolveError>;

/// Resolves paths against a single root value.
pub struct Resolver<'a> {
    root: &'a Value,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Value) -> Self {
        Resolver { root }
    }

    pub fn root(&self) -> &'a Value {
        self.root
    }

    /// Resolves a list of segments. The empty list returns the root.
    pub fn resolve(&self, segments: &[Segment]) -> Resolution<'a> {
        resolve(self.root, segments)
    }

    /// Resolves a slash-separated path string.
    pub fn resolve_str(&self, path: &str) -> Resolution<'a> {
        resolve_str(self.root, path)
    }
}

/// Resolves `segments` against `root`.
///
/// Ordinary segments are walked in a loop, so long paths do not grow the
/// stack. Only wildcards recurse.
pub fn resolve<'a>(root: &'a Value, segments: &[Segment]) -> Resolution<'a> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        if *segment == Segment::Wildcard {
            return expand_all(current, &segments[depth + 1..]).map(|v| Some(Cow::Owned(v)));
        }
        match step(current, segment)? {
            Some(next) => current = next,
            None => {
                log::trace!("segment {} at depth {} not found", segment, depth);
                return Ok(None);
            }
        }
    }
    Ok(Some(Cow::Borrowed(current)))
}

/// Splits `path` on `/` and resolves the result. `*` becomes a wildcard and
/// the empty string selects the root.
pub fn resolve_str<'a>(root: &'a Value, path: &str) -> Resolution<'a> {
    resolve(root, parse_path(path).as_slice())
}

/// Applies one non-wildcard segment.
fn step<'a>(value: &'a Value, segment: &Segment) -> Result<Option<&'a Value>, ResolveError> {
    match value {
        Value::Record(record) => match segment {
            Segment::Key(name) => Ok(record.lookup(name)),
            other => Err(ResolveError::InvalidFieldName {
                segment: other.to_string(),
                found: other.type_name().to_string(),
            }),
        },
        Value::Mapping(Mapping::Str(map)) => match segment {
            Segment::Key(key) => Ok(map.get(key.as_str())),
            other => Err(ResolveError::InvalidMapKey {
                segment: other.to_string(),
                found: other.type_name().to_string(),
                key_type: "string".to_string(),
            }),
        },
        Value::Mapping(Mapping::Int(map)) => {
            let key = map_key(segment, map.kind())?;
            Ok(map.get(&key))
        }
        Value::Sequence(items) => Ok(sequence_index(segment, items.len())?.map(|i| &items[i])),
        scalar => Err(ResolveError::NotIndexable {
            value_type: scalar.kind_name().into_owned(),
        }),
    }
}
