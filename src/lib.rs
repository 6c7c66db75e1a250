//! QuillPath resolves slash-separated paths such as `subobj/subarray/1` in
//! nested JSON, YAML, and Rust record values.
//!
//! - [`value`] holds the value tree model and its conversions
//! - [`path`] parses paths and resolves them
//! - [`file`] loads documents from disk or stdin
//! - [`config`] and [`output`] support the `quillpath` command

pub mod config;
pub mod file;
pub mod output;
pub mod path;
pub mod value;
