//! Stylesheet variables: CSS custom properties and SCSS `$variables`.
//!
//! # Grammar
//!
//! ```text
//! css:   <selector> {
//!          --<prefix>-<path-joined-by-dash>: <value>;
//!        }
//! scss:  $<prefix>-<path-joined-by-dash>: <value>;
//! ```
//!
//! ASCII characters outside `[A-Za-z0-9_-]` become `_` in names.
//!
//! Descriptions are emitted as comments on the line above the variable.

use serde_json::Value;
use toki_core::{Token, TokenResult, TokenType, TokenValue};

use crate::walk::{Renderer, Visit};

/// Variable name for a path: optional prefix then escaped segments, joined by `-`.
pub(crate) fn variable_name(prefix: Option<&str>, visit: &Visit<'_>) -> String {
    let joined = visit.path.flat_name();
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}-{joined}"),
        _ => joined,
    }
}

/// Renders a token value as stylesheet text.
///
/// - font family lists: comma separated, names with spaces double-quoted
/// - `cubicBezier` arrays: `cubic-bezier(x1, y1, x2, y2)`
/// - shadow objects (or arrays of them): `[inset] x y blur spread color`
/// - anything else: plain display text
pub fn css_value(token: &Token) -> String {
    match (&token.value, &token.token_type) {
        (TokenValue::Composite(Value::Array(items)), Some(TokenType::CubicBezier))
            if items.len() == 4 && items.iter().all(Value::is_number) =>
        {
            let parts: Vec<String> = items.iter().map(Value::to_string).collect();
            format!("cubic-bezier({})", parts.join(", "))
        }
        (TokenValue::Composite(Value::Array(items)), _) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .map(quote_family)
            .collect::<Vec<_>>()
            .join(", "),
        (TokenValue::Composite(obj @ Value::Object(_)), Some(TokenType::Shadow)) => shadow(obj),
        (TokenValue::Composite(Value::Array(items)), Some(TokenType::Shadow))
            if items.iter().all(Value::is_object) =>
        {
            items.iter().map(shadow).collect::<Vec<_>>().join(", ")
        }
        (value, _) => value.to_string(),
    }
}

fn quote_family(name: &str) -> String {
    if name.contains(char::is_whitespace) {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

fn shadow(value: &Value) -> String {
    const FIELDS: [&str; 5] = ["offsetX", "offsetY", "blur", "spread", "color"];

    let mut parts: Vec<String> = Vec::new();
    if value.get("inset").and_then(Value::as_bool) == Some(true) {
        parts.push("inset".into());
    }
    for field in FIELDS {
        match value.get(field) {
            Some(Value::String(s)) => parts.push(s.clone()),
            Some(Value::Number(n)) => parts.push(n.to_string()),
            _ => {}
        }
    }
    parts.join(" ")
}

/// Comment text with the closing sequence defused.
fn comment(text: &str) -> String {
    text.replace("*/", "* /")
}

/// CSS custom property renderer.
pub(crate) struct CssRenderer<'a> {
    out: String,
    prefix: Option<&'a str>,
    colors_only: bool,
}

impl<'a> CssRenderer<'a> {
    /// Starts a rule for `selector`.
    pub(crate) fn new(selector: &str, prefix: Option<&'a str>) -> Self {
        Self {
            out: format!("{selector} {{\n"),
            prefix,
            colors_only: false,
        }
    }

    /// Only render `color`-typed tokens.
    pub(crate) fn colors_only(mut self) -> Self {
        self.colors_only = true;
        self
    }
}

impl Renderer for CssRenderer<'_> {
    fn token(&mut self, visit: &Visit<'_>, token: &Token) {
        if self.colors_only && !token.is_color() {
            return;
        }
        if let Some(description) = &token.description {
            self.out.push_str(&format!("  /* {} */\n", comment(description)));
        }
        self.out.push_str(&format!(
            "  --{}: {};\n",
            variable_name(self.prefix, visit),
            css_value(token)
        ));
    }

    fn end_document(&mut self) {
        self.out.push_str("}\n");
    }

    fn finish(self) -> TokenResult<String> {
        Ok(self.out)
    }
}

/// SCSS variable renderer.
pub(crate) struct ScssRenderer<'a> {
    out: String,
    prefix: Option<&'a str>,
}

impl<'a> ScssRenderer<'a> {
    pub(crate) fn new(prefix: Option<&'a str>) -> Self {
        Self {
            out: String::new(),
            prefix,
        }
    }
}

impl Renderer for ScssRenderer<'_> {
    fn token(&mut self, visit: &Visit<'_>, token: &Token) {
        if let Some(description) = &token.description {
            self.out.push_str(&format!("// {}\n", description.replace('\n', " ")));
        }
        self.out.push_str(&format!(
            "${}: {};\n",
            variable_name(self.prefix, visit),
            css_value(token)
        ));
    }

    fn finish(self) -> TokenResult<String> {
        Ok(self.out)
    }
}
