//! The value trees that paths are resolved against.
//!
//! Values come from decoded JSON or YAML documents, or from Rust data converted
//! with `Value::from`. Structs are modelled as [`Record`]s with named fields.

pub mod convert;
pub mod node;
pub mod number;

pub use convert::{epoch, MapKey};
pub use node::{Field, IntMap, KeyKind, Mapping, Record, Value};
pub use number::{IntKind, Integer};
