//! Wildcard expansion.
//!
//! When a path reaches `*`, the rest of the path is resolved against every
//! field, entry or element of the current value, and the results are gathered
//! into a new value of the same shape. Branches that fail are dropped instead
//! of failing the whole query, but the three container kinds filter
//! differently:
//!
//! | container | result kind         | not found      | error          |
//! |-----------|---------------------|----------------|----------------|
//! | record    | string-keyed map    | kept as `Null` | dropped        |
//! | mapping   | same key kind       | dropped        | dropped        |
//! | sequence  | sequence, same len  | `Null` slot    | `Null` slot    |
//!
//! Existing callers depend on these differences, so they are kept as-is.

use indexmap::IndexMap;

use super::ast::Segment;
use super::error::ResolveError;
use super::resolver::resolve;
use crate::value::{IntMap, Mapping, Value};

/// Resolves `rest` against every child of `value`.
pub fn expand_all(value: &Value, rest: &[Segment]) -> Result<Value, ResolveError> {
    match value {
        Value::Record(record) => {
            let mut out = IndexMap::new();
            for field in record.visible_fields() {
                match resolve(&field.value, rest) {
                    Ok(Some(found)) => {
                        out.insert(field.name.clone(), found.into_owned());
                    }
                    Ok(None) => {
                        out.insert(field.name.clone(), Value::Null);
                    }
                    Err(err) => log::debug!("dropping field {}: {}", field.name, err),
                }
            }
            Ok(Value::Mapping(Mapping::Str(out)))
        }
        Value::Mapping(Mapping::Str(map)) => {
            let mut out = IndexMap::new();
            for (key, child) in map {
                if let Some(found) = resolve_branch(child, rest, key) {
                    out.insert(key.clone(), found);
                }
            }
            Ok(Value::Mapping(Mapping::Str(out)))
        }
        Value::Mapping(Mapping::Int(map)) => {
            let mut out = IntMap::new(map.kind());
            for (key, child) in map.iter() {
                if let Some(found) = resolve_branch(child, rest, key) {
                    out.insert(*key, found);
                }
            }
            Ok(Value::Mapping(Mapping::Int(out)))
        }
        Value::Sequence(items) => Ok(Value::Sequence(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| resolve_branch(item, rest, i).unwrap_or(Value::Null))
                .collect(),
        )),
        scalar => Err(ResolveError::NotExpandable {
            value_type: scalar.kind_name().into_owned(),
        }),
    }
}

/// Resolves one branch, folding "not found" and errors into `None`.
fn resolve_branch(
    child: &Value,
    rest: &[Segment],
    key: impl std::fmt::Display,
) -> Option<Value> {
    match resolve(child, rest) {
        Ok(found) => found.map(|v| v.into_owned()),
        Err(err) => {
            log::debug!("dropping entry {}: {}", key, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{IntKind, Integer, Record};

    #[test]
    fn test_record_keeps_missing_drops_errors() {
        let root = Value::Record(
            Record::new("T")
                .field("A", Value::from(vec![1i64]))
                .field("B", Value::from(Vec::<Value>::new()))
                .field("C", 5i64)
                .hidden("d", Value::from(vec![4i64])),
        );
        let expanded = expand_all(&root, &[Segment::from(0)]).unwrap();
        let Value::Mapping(Mapping::Str(map)) = expanded else {
            panic!("expected string-keyed mapping");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["A"], Value::from(1i64));
        assert_eq!(map["B"], Value::Null);
        assert!(!map.contains_key("C"));
        assert!(!map.contains_key("d"));
    }

    #[test]
    fn test_mapping_drops_missing_and_errors() {
        let mut inner = IndexMap::new();
        inner.insert("x", 1i64);
        let mut map = IndexMap::new();
        map.insert("has", Value::from(inner));
        map.insert("lacks", Value::from(IndexMap::<&str, i64>::new()));
        map.insert("scalar", Value::from(3i64));
        let root = Value::from(map);

        let expanded = expand_all(&root, &[Segment::from("x")]).unwrap();
        let Value::Mapping(Mapping::Str(out)) = expanded else {
            panic!("expected string-keyed mapping");
        };
        assert_eq!(out.len(), 1);
        assert_eq!(out["has"], Value::from(1i64));
    }

    #[test]
    fn test_int_mapping_keeps_key_kind() {
        let mut map = IntMap::new(IntKind::U16);
        map.insert(1u16, Value::from(vec!["a"]));
        map.insert(2u16, Value::from(Vec::<Value>::new()));
        let root = Value::Mapping(Mapping::Int(map));

        match expand_all(&root, &[Segment::from(0)]).unwrap() {
            Value::Mapping(Mapping::Int(out)) => {
                assert_eq!(out.kind(), IntKind::U16);
                assert_eq!(out.len(), 1);
                assert_eq!(out.get(&Integer::U16(1)), Some(&Value::from("a")));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_sequence_keeps_every_slot() {
        let root = Value::from(vec![
            Value::from(vec![1i64, 2]),
            Value::from(vec![3i64]),
            Value::from("scalar"),
        ]);
        let expanded = expand_all(&root, &[Segment::from(1)]).unwrap();
        assert_eq!(
            expanded,
            Value::Sequence(vec![Value::from(2i64), Value::Null, Value::Null])
        );
    }

    #[test]
    fn test_empty_rest_copies_children() {
        let root = Value::from(vec!["a", "b"]);
        assert_eq!(expand_all(&root, &[]).unwrap(), root);
    }

    #[test]
    fn test_scalar_cannot_expand() {
        assert_eq!(
            expand_all(&Value::from(true), &[]),
            Err(ResolveError::NotExpandable {
                value_type: "bool".to_string()
            })
        );
    }
}
