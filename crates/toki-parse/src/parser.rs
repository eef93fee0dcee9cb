//! Parser entry points.
//!
//! ```text
//! source ──build──> TokenGroup ──resolve_aliases──> TokenTree
//!           │
//!           └── diagnostics (fatal only with `validate`)
//! ```

use std::path::Path;

use serde_json::Value;
use toki_core::{Diagnostic, TokenError, TokenPath, TokenResult, TokenTree};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::builder::{build, build_checked};
use crate::resolve::resolve_aliases;

/// Parser behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail with [`TokenError::Validation`] on any structural problem.
    ///
    /// When off, problems are logged at debug level and the offending parts
    /// are skipped or kept as-is.
    pub validate: bool,
}

impl ParseOptions {
    /// Options with validation enabled.
    pub fn validating() -> Self {
        Self { validate: true }
    }
}

/// Parses a deserialized token document into the canonical tree.
///
/// # Errors
///
/// - [`TokenError::InvalidDocument`] if the root is not an object
/// - [`TokenError::Validation`] with every diagnostic, when validating
/// - [`TokenError::UnresolvedReference`] / [`TokenError::CircularReference`]
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use toki_core::TokenPath;
/// use toki_parse::{parse, ParseOptions};
///
/// let source = json!({
///     "color": {
///         "primary": { "value": "#ff0000", "type": "color" },
///         "link": { "value": "{color.primary}" }
///     }
/// });
/// let tree = parse(&source, ParseOptions::validating()).unwrap();
/// let link = tree.get(&TokenPath::parse("color.link")).unwrap();
/// assert_eq!(link.value.as_str(), Some("#ff0000"));
/// ```
pub fn parse(source: &Value, options: ParseOptions) -> TokenResult<TokenTree> {
    let group = build_checked(source, options.validate)?;
    let tree = resolve_aliases(&group)?;
    debug!(tokens = tree.len(), validate = options.validate, "parsed token tree");
    Ok(tree)
}

/// Parses a JSON document.
pub fn parse_str(json: &str, options: ParseOptions) -> TokenResult<TokenTree> {
    let source: Value = serde_json::from_str(json)?;
    parse(&source, options)
}

/// Parses a YAML document.
pub fn parse_yaml_str(yaml: &str, options: ParseOptions) -> TokenResult<TokenTree> {
    let source: Value = serde_yaml::from_str(yaml)?;
    parse(&source, options)
}

/// Reads a token document from disk.
///
/// The extension selects the syntax: `.json`, or `.yaml` / `.yml`.
///
/// # Errors
///
/// [`TokenError::FileNotFound`] if the file is missing,
/// [`TokenError::UnsupportedFormat`] for any other extension, plus
/// everything [`parse`] returns.
pub fn parse_file(path: impl AsRef<Path>, options: ParseOptions) -> TokenResult<TokenTree> {
    let source = read_source(path.as_ref())?;
    parse(&source, options)
}

/// Loads a document from disk without interpreting it.
///
/// Same extension rules and errors as [`parse_file`].
pub fn read_source(path: &Path) -> TokenResult<Value> {
    if !path.exists() {
        return Err(TokenError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    trace!(path = %path.display(), ext = %ext, "reading token source");

    let content = std::fs::read_to_string(path)?;
    match ext.as_str() {
        "json" => Ok(serde_json::from_str(&content)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        _ => Err(TokenError::unsupported_format(ext)),
    }
}

/// Lists every structural problem in a document without failing.
///
/// A non-object root is reported as a single diagnostic at the root path.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use toki_parse::validate;
///
/// let problems = validate(&json!({ "a": { "value": null } }));
/// assert_eq!(problems[0].to_string(), "a: value must not be null");
/// ```
pub fn validate(source: &Value) -> Vec<Diagnostic> {
    match build(source) {
        Ok((_, diagnostics)) => diagnostics,
        Err(e) => vec![Diagnostic::new(TokenPath::root(), e.to_string())],
    }
}
