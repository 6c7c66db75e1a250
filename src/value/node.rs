//! Value tree representation.
//!
//! This module provides the data structures that paths are resolved against.
//! A `Value` is one of four structural kinds:
//!
//! - scalars (null, booleans, numbers, strings, timestamps)
//! - sequences (`Vec<Value>`)
//! - mappings, keyed either by strings or by integers of one fixed width
//! - records, which have named fields that may be hidden from lookup
//!
//! # Example
//!
//! ```
//! use quillpath::value::node::{Mapping, Record, Value};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Value::from("quillpath"));
//! let object = Value::Mapping(Mapping::Str(map));
//!
//! let record = Record::new("Config")
//!     .field("Name", Value::from("quillpath"))
//!     .hidden("secret", Value::from("hunter2"));
//! assert_eq!(record.lookup("name"), Some(&Value::from("quillpath")));
//! assert_eq!(record.lookup("secret"), None);
//! # let _ = object;
//! ```

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

use super::number::{IntKind, Integer};

/// A node in a value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null, also used for "absent" slots produced by wildcard expansion
    Null,
    Bool(bool),
    /// An integer of a fixed width
    Int(Integer),
    Float(f64),
    /// A number kept as its literal text, as read from a document
    Number(String),
    String(String),
    Time(DateTime<FixedOffset>),
    Sequence(Vec<Value>),
    Mapping(Mapping),
    Record(Record),
}

impl Value {
    /// Short type name used in error messages.
    pub fn kind_name(&self) -> Cow<'static, str> {
        match self {
            Value::Null => "null".into(),
            Value::Bool(_) => "bool".into(),
            Value::Int(n) => n.kind().name().into(),
            Value::Float(_) => "f64".into(),
            Value::Number(_) => "number".into(),
            Value::String(_) => "string".into(),
            Value::Time(_) => "timestamp".into(),
            Value::Sequence(_) => "sequence".into(),
            Value::Mapping(m) => format!("map[{}]", m.key_kind()).into(),
            Value::Record(r) => r.name().to_string().into(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Number(text) => f.write_str(text),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Time(t) => f.write_str(&t.to_rfc3339()),
            Value::Sequence(items) => write!(f, "sequence of {}", items.len()),
            Value::Mapping(m) => write!(f, "map[{}] of {}", m.key_kind(), m.len()),
            Value::Record(r) => write!(f, "{} {{..}}", r.name()),
        }
    }
}

/// The key type of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    String,
    Int(IntKind),
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::String => f.write_str("string"),
            KeyKind::Int(kind) => write!(f, "{}", kind),
        }
    }
}

/// A keyed container. Insertion order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    Str(IndexMap<String, Value>),
    Int(IntMap),
}

impl Mapping {
    pub fn with_int_keys(kind: IntKind) -> Self {
        Mapping::Int(IntMap::new(kind))
    }

    pub fn key_kind(&self) -> KeyKind {
        match self {
            Mapping::Str(_) => KeyKind::String,
            Mapping::Int(map) => KeyKind::Int(map.kind()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Mapping::Str(map) => map.len(),
            Mapping::Int(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A mapping whose keys are all integers of one kind.
///
/// Keys of any other width are wrapped into `kind` on insertion, so lookups
/// only ever compare integers of the same kind.
#[derive(Debug, Clone, PartialEq)]
pub struct IntMap {
    kind: IntKind,
    entries: IndexMap<Integer, Value>,
}

impl IntMap {
    pub fn new(kind: IntKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> IntKind {
        self.kind
    }

    /// Inserts an entry, converting the key to this map's kind.
    pub fn insert(&mut self, key: impl Into<Integer>, value: Value) -> Option<Value> {
        let key = self.kind.wrap_integer(key.into());
        self.entries.insert(key, value)
    }

    /// Looks up a key that has already been converted to this map's kind.
    pub fn get(&self, key: &Integer) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Integer, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Hidden fields exist in the record but are never matched by a path
    pub visible: bool,
    pub value: Value,
}

/// A fixed-shape value with named fields, such as a Rust struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    fields: Vec<Field>,
}

impl Record {
    /// Creates an empty record with the given type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a visible field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            visible: true,
            value: value.into(),
        });
        self
    }

    /// Adds a hidden field.
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            visible: false,
            value: value.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterates over the fields a path is allowed to see.
    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.visible)
    }

    /// Finds a visible field by name.
    ///
    /// The first letter of both the key and the field name is capitalized
    /// before comparing, so `"foo"` finds a field named `Foo`. When several
    /// fields normalize to the same name the first one declared wins.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let wanted = capitalize_first(key);
        self.visible_fields()
            .find(|f| capitalize_first(&f.name) == wanted)
            .map(|f| &f.value)
    }
}

fn capitalize_first(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(s),
    }
}
