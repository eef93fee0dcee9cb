//! Token leaves: value, type tag and pass-through metadata.
//!
//! # Reference Syntax
//!
//! A string value of the exact form `{group.path.to.token}` is an alias.
//! Surrounding whitespace inside the braces is ignored; anything else around
//! the braces makes the value an ordinary string.
//!
//! ```rust
//! use toki_core::{TokenPath, TokenValue};
//!
//! let alias = TokenValue::from_json(&serde_json::json!("{color.primary}"));
//! assert_eq!(alias.reference(), Some(&TokenPath::parse("color.primary")));
//!
//! let literal = TokenValue::from_json(&serde_json::json!("#ff0000"));
//! assert_eq!(literal.as_str(), Some("#ff0000"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Number, Value};

use crate::path::TokenPath;

/// Recognized token type tags.
///
/// The text form is the camelCase tag used in token documents. Tags outside
/// the fixed set are kept as [`TokenType::Other`] so lenient parsing can pass
/// them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `color` - `#rrggbb` literal.
    Color,
    /// `dimension` - length with unit (`16px`, `1rem`).
    Dimension,
    /// `fontFamily` - family name or list of names.
    FontFamily,
    /// `fontWeight` - numeric or named weight.
    FontWeight,
    /// `fontSize`.
    FontSize,
    /// `lineHeight`.
    LineHeight,
    /// `letterSpacing`.
    LetterSpacing,
    /// `duration` - time with unit (`200ms`).
    Duration,
    /// `cubicBezier` - easing curve.
    CubicBezier,
    /// `shadow` - shadow string or composite object.
    Shadow,
    /// `opacity`.
    Opacity,
    /// `number` - unitless number.
    Number,
    /// Unrecognized tag, kept verbatim.
    Other(String),
}

impl TokenType {
    /// All recognized tags, in documentation order.
    pub const KNOWN: [TokenType; 12] = [
        TokenType::Color,
        TokenType::Dimension,
        TokenType::FontFamily,
        TokenType::FontWeight,
        TokenType::FontSize,
        TokenType::LineHeight,
        TokenType::LetterSpacing,
        TokenType::Duration,
        TokenType::CubicBezier,
        TokenType::Shadow,
        TokenType::Opacity,
        TokenType::Number,
    ];

    /// The tag as written in token documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Color => "color",
            Self::Dimension => "dimension",
            Self::FontFamily => "fontFamily",
            Self::FontWeight => "fontWeight",
            Self::FontSize => "fontSize",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::Duration => "duration",
            Self::CubicBezier => "cubicBezier",
            Self::Shadow => "shadow",
            Self::Opacity => "opacity",
            Self::Number => "number",
            Self::Other(tag) => tag,
        }
    }

    /// Checks if this is one of the fixed, recognized tags.
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for TokenType {
    type Err = std::convert::Infallible;

    /// Never fails: unknown tags become [`TokenType::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .iter()
            .find(|t| t.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Self::Other(s.to_string())))
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\{\s*([^{}\s]+)\s*\}$").expect("reference pattern is valid")
    })
}

/// Parses `{path}` reference syntax. Returns `None` for ordinary strings.
pub fn parse_reference(text: &str) -> Option<TokenPath> {
    reference_regex()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| TokenPath::parse(m.as_str()))
}

/// A token's value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// String literal (colors, dimensions, font names...).
    String(String),
    /// Numeric literal, kept in its original JSON form.
    Number(Number),
    /// Boolean literal.
    Bool(bool),
    /// Arrays, objects and `null`, passed through as JSON.
    Composite(Value),
    /// Alias to another token. Never present in a resolved tree.
    Reference(TokenPath),
}

impl TokenValue {
    /// Classifies a raw JSON value, detecting reference syntax in strings.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => match parse_reference(s) {
                Some(path) => Self::Reference(path),
                None => Self::String(s.clone()),
            },
            Value::Number(n) => Self::Number(n.clone()),
            Value::Bool(b) => Self::Bool(*b),
            other => Self::Composite(other.clone()),
        }
    }

    /// Converts back to JSON. References become `"{path}"` strings.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Composite(v) => v.clone(),
            Self::Reference(path) => Value::String(format!("{{{path}}}")),
        }
    }

    /// String content for string literals.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Referenced path for aliases.
    #[inline]
    pub fn reference(&self) -> Option<&TokenPath> {
        match self {
            Self::Reference(path) => Some(path),
            _ => None,
        }
    }

    /// Checks if this value is an alias.
    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for TokenValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Plain-text rendering used by flat stylesheet formats.
///
/// Arrays of strings render comma separated (`Inter, sans-serif`); other
/// composites render as compact JSON.
impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Composite(Value::Array(items)) if items.iter().all(Value::is_string) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                f.write_str(&parts.join(", "))
            }
            Self::Composite(v) => write!(f, "{v}"),
            Self::Reference(path) => write!(f, "{{{path}}}"),
        }
    }
}

/// A leaf design value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The value (literal or alias).
    pub value: TokenValue,
    /// Optional type tag.
    pub token_type: Option<TokenType>,
    /// Optional human description.
    pub description: Option<String>,
    /// Opaque metadata, passed through untouched.
    pub extensions: Option<Value>,
}

impl Token {
    /// Creates an untyped token.
    pub fn new(value: impl Into<TokenValue>) -> Self {
        Self {
            value: value.into(),
            token_type: None,
            description: None,
            extensions: None,
        }
    }

    /// Creates a `color` token.
    pub fn color(hex: impl Into<String>) -> Self {
        Self::new(TokenValue::String(hex.into())).with_type(TokenType::Color)
    }

    /// Sets the type tag.
    pub fn with_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the extensions payload.
    pub fn with_extensions(mut self, extensions: Value) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Checks if the token is tagged `color`.
    #[inline]
    pub fn is_color(&self) -> bool {
        self.token_type == Some(TokenType::Color)
    }

    /// Serializes to the source document shape: `value`, then `type`,
    /// `description`, `extensions` when present.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("value".into(), self.value.to_json());
        if let Some(t) = &self.token_type {
            obj.insert("type".into(), Value::String(t.as_str().to_string()));
        }
        if let Some(d) = &self.description {
            obj.insert("description".into(), Value::String(d.clone()));
        }
        if let Some(e) = &self.extensions {
            obj.insert("extensions".into(), e.clone());
        }
        Value::Object(obj)
    }
}
