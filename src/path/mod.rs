//! Path resolution over value trees.
//!
//! A path is a list of segments applied one after another to a [`Value`]:
//!
//! - a string key selects a record field or map entry, or is parsed as an
//!   integer when the container is a sequence or an integer-keyed map
//! - a signed or unsigned integer selects a sequence element or integer map key
//! - `*` resolves the rest of the path against every child
//!
//! # Examples
//!
//! ```
//! use quillpath::path;
//! use quillpath::path::{resolve, resolve_str};
//! use quillpath::value::Value;
//!
//! let root = Value::from(serde_json::json!({"array": [{"foo": 1}, {"bar": 2}]}));
//!
//! let found = resolve(&root, path!["array", 0, "foo"].as_slice()).unwrap();
//! assert_eq!(found.as_deref(), Some(&Value::from(1i64)));
//!
//! // well-typed but absent
//! assert_eq!(resolve_str(&root, "array/0/bar"), Ok(None));
//!
//! // wrong key type for a string-keyed map
//! assert!(resolve(&root, path![0].as_slice()).is_err());
//! ```
//!
//! [`Value`]: crate::value::Value

pub mod ast;
pub mod coerce;
pub mod error;
pub mod expand;
pub mod extract;
pub mod parser;
pub mod resolver;

pub use ast::{Path, Segment};
pub use error::ResolveError;
pub use expand::expand_all;
pub use extract::{get_bool, get_int, get_string, get_time};
pub use parser::parse_path;
pub use resolver::{resolve, resolve_str, Resolution, Resolver};
