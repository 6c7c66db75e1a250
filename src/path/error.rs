//! Error types for path resolution.

use std::fmt;

use super::coerce::KeyParseError;

/// Why a path segment could not be applied to the value it indexed.
///
/// This is distinct from a missing key or an out-of-range index, which
/// resolve to `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A non-string segment was used on a record.
    InvalidFieldName { segment: String, found: String },
    /// A segment of the wrong type was used as a map key.
    InvalidMapKey {
        segment: String,
        found: String,
        key_type: String,
    },
    /// A string segment could not be parsed as an integer map key.
    UnparsableKey {
        segment: String,
        key_type: String,
        source: KeyParseError,
    },
    /// A segment of the wrong type was used as a sequence index.
    InvalidIndex { segment: String, found: String },
    /// A string segment could not be parsed as a sequence index.
    UnparsableIndex {
        segment: String,
        source: KeyParseError,
    },
    /// The value is a scalar but the path continues.
    NotIndexable { value_type: String },
    /// A wildcard was applied to a scalar.
    NotExpandable { value_type: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidFieldName { segment, found } => write!(
                f,
                "cannot use {} (type {}) as record field name",
                segment, found
            ),
            ResolveError::InvalidMapKey {
                segment,
                found,
                key_type,
            } => write!(
                f,
                "cannot use {} (type {}) as map key of type {}",
                segment, found, key_type
            ),
            ResolveError::UnparsableKey {
                segment,
                key_type,
                source,
            } => write!(
                f,
                "cannot parse {:?} as map key of type {}: {}",
                segment, key_type, source
            ),
            ResolveError::InvalidIndex { segment, found } => {
                write!(f, "cannot use {} (type {}) as sequence index", segment, found)
            }
            ResolveError::UnparsableIndex { segment, source } => {
                write!(f, "cannot parse {:?} as sequence index: {}", segment, source)
            }
            ResolveError::NotIndexable { value_type } => {
                write!(f, "type {} does not support indexing", value_type)
            }
            ResolveError::NotExpandable { value_type } => {
                write!(f, "type {} does not support retrieving all", value_type)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::UnparsableKey { source, .. }
            | ResolveError::UnparsableIndex { source, .. } => Some(source),
            _ => None,
        }
    }
}
