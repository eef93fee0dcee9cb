//! File-based parsing: extensions, missing files, YAML sources.

use std::fs;

use tempfile::TempDir;
use toki_core::{TokenError, TokenPath, TokenType};
use toki_parse::{ParseOptions, parse_file};

const TOKENS_JSON: &str = r##"{
  "color": {
    "primary": { "value": "#3B82F6", "type": "color", "description": "Brand blue" },
    "link": { "value": "{color.primary}" }
  },
  "font": {
    "body": { "value": ["Inter", "sans-serif"], "type": "fontFamily" }
  }
}"##;

const TOKENS_YAML: &str = r##"color:
  primary:
    value: "#3B82F6"
    type: color
    description: Brand blue
  link:
    value: "{color.primary}"
font:
  body:
    value: [Inter, sans-serif]
    type: fontFamily
"##;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tokens.json", TOKENS_JSON);

    let tree = parse_file(&path, ParseOptions::validating()).unwrap();
    assert_eq!(tree.len(), 3);

    let link = tree.get(&TokenPath::parse("color.link")).unwrap();
    assert_eq!(link.value.as_str(), Some("#3B82F6"));
    assert_eq!(link.token_type, Some(TokenType::Color));
}

#[test]
fn yaml_matches_json() {
    let dir = TempDir::new().unwrap();
    let json = write(&dir, "tokens.json", TOKENS_JSON);
    let yaml = write(&dir, "tokens.yaml", TOKENS_YAML);
    let yml = write(&dir, "tokens.YML", TOKENS_YAML);

    let from_json = parse_file(&json, ParseOptions::validating()).unwrap();
    assert_eq!(parse_file(&yaml, ParseOptions::validating()).unwrap(), from_json);
    assert_eq!(parse_file(&yml, ParseOptions::validating()).unwrap(), from_json);
}

#[test]
fn unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tokens.toml", "[color]");
    let err = parse_file(&path, ParseOptions::default()).unwrap_err();
    assert!(matches!(err, TokenError::UnsupportedFormat { ref format } if format == "toml"));
}

#[test]
fn missing_file() {
    let dir = TempDir::new().unwrap();
    let err = parse_file(dir.path().join("absent.json"), ParseOptions::default()).unwrap_err();
    assert!(matches!(err, TokenError::FileNotFound { .. }));
}

#[test]
fn validation_error_lists_everything() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "bad.json",
        r##"{ "a": { "value": "#12", "type": "color" }, "b": true, "c": { "value": 1, "type": "px" } }"##,
    );
    let err = parse_file(&path, ParseOptions::validating()).unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("validation failed with 3 problem(s)"), "{text}");
    assert!(text.contains("a: invalid color '#12'"));
    assert!(text.contains("b: expected a token or group object, found boolean"));
    assert!(text.contains("c: unknown type 'px'"));
}
