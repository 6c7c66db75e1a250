//! Conversions into and out of [`Value`].
//!
//! Rust values convert with `Value::from` / `.into()`. Maps convert through the
//! [`MapKey`] trait, which picks a string- or integer-keyed [`Mapping`] based on
//! the key type. Decoded `serde_json` and `serde_yaml` documents convert with
//! `From`, and `Value` serializes back out through serde.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::node::{IntMap, Mapping, Record, Value};
use super::number::{IntKind, Integer};

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Value::Int(n)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        Value::Time(t.fixed_offset())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Key types that can build a [`Mapping`].
pub trait MapKey: Sized {
    fn collect_mapping<V: Into<Value>>(entries: impl IntoIterator<Item = (Self, V)>) -> Mapping;
}

impl MapKey for String {
    fn collect_mapping<V: Into<Value>>(entries: impl IntoIterator<Item = (Self, V)>) -> Mapping {
        Mapping::Str(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl MapKey for &str {
    fn collect_mapping<V: Into<Value>>(entries: impl IntoIterator<Item = (Self, V)>) -> Mapping {
        Mapping::Str(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}

macro_rules! int_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(Integer::from(n))
                }
            }

            impl MapKey for $ty {
                fn collect_mapping<V: Into<Value>>(
                    entries: impl IntoIterator<Item = (Self, V)>,
                ) -> Mapping {
                    let mut map = IntMap::new(IntKind::$kind);
                    for (k, v) in entries {
                        map.insert(k, v.into());
                    }
                    Mapping::Int(map)
                }
            }
        )*
    };
}

int_value! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl<K: MapKey, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value
where
    K: Eq + Hash,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Mapping(K::collect_mapping(map))
    }
}

impl<K: MapKey, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Mapping(K::collect_mapping(map))
    }
}

impl<K: MapKey, V: Into<Value>, S: BuildHasher> From<IndexMap<K, V, S>> for Value
where
    K: Eq + Hash,
{
    fn from(map: IndexMap<K, V, S>) -> Self {
        Value::Mapping(K::collect_mapping(map))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        from_json(json, false)
    }
}

impl Value {
    /// Converts a JSON document, keeping every number as its literal text
    /// (`Value::Number`) instead of decoding it.
    pub fn from_json_preserving_numbers(json: serde_json::Value) -> Self {
        from_json(json, true)
    }
}

fn from_json(json: serde_json::Value, preserve_numbers: bool) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) if preserve_numbers => Value::Number(n.to_string()),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(Integer::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Int(Integer::U64(u))
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| from_json(item, preserve_numbers))
                .collect(),
        ),
        serde_json::Value::Object(props) => Value::Mapping(Mapping::Str(
            props
                .into_iter()
                .map(|(k, v)| (k, from_json(v, preserve_numbers)))
                .collect(),
        )),
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(yaml: serde_yaml::Value) -> Self {
        from_yaml(yaml, false)
    }
}

impl Value {
    /// Converts a YAML document, keeping every number as its literal text.
    pub fn from_yaml_preserving_numbers(yaml: serde_yaml::Value) -> Self {
        from_yaml(yaml, true)
    }
}

fn from_yaml(yaml: serde_yaml::Value, preserve_numbers: bool) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) if preserve_numbers => Value::Number(n.to_string()),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(Integer::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Int(Integer::U64(u))
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| from_yaml(item, preserve_numbers))
                .collect(),
        ),
        serde_yaml::Value::Mapping(map) => from_yaml_mapping(map, preserve_numbers),
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value, preserve_numbers),
    }
}

/// YAML mappings whose keys are all signed integers become `map[i64]`;
/// anything else is keyed by the key's text.
fn from_yaml_mapping(map: serde_yaml::Mapping, preserve_numbers: bool) -> Value {
    let all_int_keys = !map.is_empty() && map.keys().all(|k| k.as_i64().is_some());
    if all_int_keys {
        let mut out = IntMap::new(IntKind::I64);
        for (k, v) in map {
            if let Some(i) = k.as_i64() {
                out.insert(i, from_yaml(v, preserve_numbers));
            }
        }
        return Value::Mapping(Mapping::Int(out));
    }

    let mut out = IndexMap::with_capacity(map.len());
    for (k, v) in map {
        out.insert(yaml_key_text(&k), from_yaml(v, preserve_numbers));
    }
    Value::Mapping(Mapping::Str(out))
}

fn yaml_key_text(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.kind().is_signed() {
            serializer.serialize_i64(self.as_i64())
        } else {
            serializer.serialize_u64(self.as_u64())
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => n.serialize(serializer),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Number(text) => serialize_number_text(text, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Time(t) => serializer.serialize_str(&t.to_rfc3339()),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(Mapping::Str(map)) => map.serialize(serializer),
            Value::Mapping(Mapping::Int(map)) => serializer.collect_map(map.iter()),
            Value::Record(record) => {
                let mut out = serializer.serialize_map(None)?;
                for field in record.visible_fields() {
                    out.serialize_entry(&field.name, &field.value)?;
                }
                out.end()
            }
        }
    }
}

fn serialize_number_text<S: Serializer>(text: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if let Ok(i) = text.parse::<i64>() {
        serializer.serialize_i64(i)
    } else if let Ok(u) = text.parse::<u64>() {
        serializer.serialize_u64(u)
    } else if let Ok(x) = text.parse::<f64>() {
        serializer.serialize_f64(x)
    } else {
        serializer.serialize_str(text)
    }
}

/// Midnight, 1 January 1970, UTC.
pub fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}
