//! ES module output, with an optional TypeScript flavor.
//!
//! ```text
//! export const tokens = {
//!   color: {
//!     primary: '#3b82f6',
//!     '100': '#dbeafe',
//!   },
//! };                                   // js
//! } as const;                          // ts
//!
//! export type Tokens = typeof tokens;  // ts only
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use toki_core::{Token, TokenResult, TokenValue};

use crate::walk::{Renderer, Visit};

const INDENT: &str = "  ";

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid"))
}

/// Object key: bare when it is an identifier, single-quoted otherwise.
pub(crate) fn js_key(key: &str) -> String {
    if identifier_regex().is_match(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// Single-quoted, escaped string literal.
pub(crate) fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Inline literal for a JSON value.
fn js_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => js_string(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(js_literal).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".into(),
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", js_key(k), js_literal(v)))
                .collect();
            format!("{{ {} }}", parts.join(", "))
        }
    }
}

/// Renders a token value as a JavaScript literal.
pub fn js_value(token: &Token) -> String {
    match &token.value {
        TokenValue::String(s) => js_string(s),
        other => js_literal(&other.to_json()),
    }
}

/// Nested object literal renderer.
pub(crate) struct JsRenderer {
    out: String,
    typescript: bool,
}

impl JsRenderer {
    pub(crate) fn new(typescript: bool) -> Self {
        Self {
            out: String::new(),
            typescript,
        }
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..=depth {
            self.out.push_str(INDENT);
        }
    }
}

impl Renderer for JsRenderer {
    fn begin_document(&mut self) {
        self.out.push_str("export const tokens = {\n");
    }

    fn begin_group(&mut self, visit: &Visit<'_>) {
        self.indent(visit.depth);
        self.out.push_str(&format!("{}: {{\n", js_key(visit.name)));
    }

    fn token(&mut self, visit: &Visit<'_>, token: &Token) {
        self.indent(visit.depth);
        self.out
            .push_str(&format!("{}: {},\n", js_key(visit.name), js_value(token)));
    }

    fn end_group(&mut self, visit: &Visit<'_>) {
        self.indent(visit.depth);
        self.out.push_str("},\n");
    }

    fn end_document(&mut self) {
        if self.typescript {
            self.out.push_str("} as const;\n\nexport type Tokens = typeof tokens;\n");
        } else {
            self.out.push_str("};\n");
        }
    }

    fn finish(self) -> TokenResult<String> {
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys() {
        assert_eq!(js_key("primary"), "primary");
        assert_eq!(js_key("$scale_2"), "$scale_2");
        assert_eq!(js_key("100"), "'100'");
        assert_eq!(js_key("font-size"), "'font-size'");
        assert_eq!(js_key("it's"), r"'it\'s'");
    }

    #[test]
    fn string_escapes() {
        assert_eq!(js_string(r"a\b"), r"'a\\b'");
        assert_eq!(js_string("line\nbreak"), r"'line\nbreak'");
    }

    #[test]
    fn values() {
        assert_eq!(js_value(&Token::new("#ff0000")), "'#ff0000'");
        assert_eq!(js_value(&Token::new(4_i64)), "4");
        assert_eq!(js_value(&Token::new(false)), "false");
        let family = Token::new(TokenValue::Composite(json!(["Inter", "sans-serif"])));
        assert_eq!(js_value(&family), "['Inter', 'sans-serif']");
        let shadow = Token::new(TokenValue::Composite(json!({ "offset-x": "1px", "blur": 2 })));
        assert_eq!(js_value(&shadow), "{ 'offset-x': '1px', blur: 2 }");
        assert_eq!(js_value(&Token::new(TokenValue::Composite(json!(null)))), "null");
    }
}
