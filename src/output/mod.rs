//! Rendering resolved values for the command line.

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::path::{get_bool, get_int, get_string, get_time, Segment};
use crate::value::Value;

/// Typed getters selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Getter {
    String,
    Int,
    Bool,
    Time,
}

/// Renders a value as JSON or YAML text without a trailing newline.
pub fn render_value(value: &Value, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(value).context("Failed to render JSON")
        }
        OutputFormat::Json => serde_json::to_string(value).context("Failed to render JSON"),
        OutputFormat::Yaml => {
            let text = serde_yaml::to_string(value).context("Failed to render YAML")?;
            Ok(text.trim_end().to_string())
        }
    }
}

/// Runs a typed getter and renders its result as plain text.
pub fn render_getter(getter: Getter, root: &Value, segments: &[Segment]) -> String {
    match getter {
        Getter::String => get_string(root, segments),
        Getter::Int => get_int(root, segments).to_string(),
        Getter::Bool => get_bool(root, segments).to_string(),
        Getter::Time => get_time(root, segments).to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_compact_json() {
        let value = Value::from(vec![1i64, 2]);
        assert_eq!(
            render_value(&value, OutputFormat::Json, false).unwrap(),
            "[1,2]"
        );
    }

    #[test]
    fn test_render_yaml_trims_newline() {
        let value = Value::from("hi");
        assert_eq!(render_value(&value, OutputFormat::Yaml, true).unwrap(), "hi");
    }

    #[test]
    fn test_render_getter_zero_values() {
        let root = Value::Null;
        let missing = [Segment::from("nope")];
        assert_eq!(render_getter(Getter::String, &root, &missing), "");
        assert_eq!(render_getter(Getter::Int, &root, &missing), "0");
        assert_eq!(render_getter(Getter::Bool, &root, &missing), "false");
        assert_eq!(
            render_getter(Getter::Time, &root, &missing),
            "1970-01-01T00:00:00+00:00"
        );
    }
}
