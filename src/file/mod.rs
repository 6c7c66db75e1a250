//! File input for documents.
//!
//! This module loads JSON, JSONL, and YAML documents from disk or stdin.

pub mod loader;
