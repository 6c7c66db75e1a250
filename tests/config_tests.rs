use quillpath::config::{Config, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.pretty);
    assert!(!config.preserve_numbers);
    assert!(!config.null_when_not_found);
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();

    assert!(toml_str.contains("output_format = \"json\""));
    assert!(toml_str.contains("pretty = true"));
    assert!(toml_str.contains("preserve_numbers = false"));
}

#[test]
fn test_deserialize_full_config() {
    let toml_str = r#"
        output_format = "yaml"
        pretty = false
        preserve_numbers = true
        null_when_not_found = true
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert!(!config.pretty);
    assert!(config.preserve_numbers);
    assert!(config.null_when_not_found);
}

#[test]
fn test_deserialize_empty_config() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.pretty);
}

#[test]
fn test_unknown_output_format_is_rejected() {
    let result: Result<Config, _> = toml::from_str("output_format = \"xml\"");
    assert!(result.is_err());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let original = Config {
        output_format: OutputFormat::Yaml,
        pretty: false,
        preserve_numbers: true,
        null_when_not_found: true,
    };
    original.save_to(&path).unwrap();

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.output_format, OutputFormat::Yaml);
    assert!(!loaded.pretty);
    assert!(loaded.preserve_numbers);
    assert!(loaded.null_when_not_found);
}

#[test]
fn test_load_missing_or_malformed_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let missing = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(missing.output_format, OutputFormat::Json);

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "pretty = \"maybe\"").unwrap();
    let loaded = Config::load_from(&bad);
    assert!(loaded.pretty);
}
