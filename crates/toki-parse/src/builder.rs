//! Raw document -> token group, collecting structural diagnostics.
//!
//! The document is discriminated exactly once here: an object with a
//! `value` key is a token, any other object is a group. Everything the
//! builder cannot use is reported as a [`Diagnostic`] and then dropped or
//! kept as-is, so lenient callers still get a usable group.

use serde_json::{Map, Value};
use toki_color::is_color;
use toki_core::{Diagnostic, Node, Token, TokenError, TokenGroup, TokenPath, TokenResult, TokenType, TokenValue};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Characters that would break dotted path addressing or reference syntax.
const RESERVED_NAME_CHARS: [char; 3] = ['.', '{', '}'];

/// Builds a group from a document root, returning every diagnostic found.
///
/// Fails only when the root is not an object.
pub(crate) fn build(source: &Value) -> TokenResult<(TokenGroup, Vec<Diagnostic>)> {
    let Value::Object(root) = source else {
        return Err(TokenError::invalid_document(format!(
            "root must be an object, found {}",
            kind(source)
        )));
    };

    let mut builder = Builder::default();
    let group = builder.group(&TokenPath::root(), root);
    trace!(
        tokens = group.token_count(),
        diagnostics = builder.diagnostics.len(),
        "built token group"
    );
    Ok((group, builder.diagnostics))
}

/// Builds a group, failing with every diagnostic when `strict` is set.
pub(crate) fn build_checked(source: &Value, strict: bool) -> TokenResult<TokenGroup> {
    let (group, diagnostics) = build(source)?;
    if strict && !diagnostics.is_empty() {
        debug!(count = diagnostics.len(), "validation failed");
        return Err(TokenError::Validation { diagnostics });
    }
    Ok(group)
}

#[derive(Default)]
struct Builder {
    diagnostics: Vec<Diagnostic>,
}

impl Builder {
    fn report(&mut self, path: &TokenPath, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(path.clone(), message));
    }

    fn group(&mut self, prefix: &TokenPath, obj: &Map<String, Value>) -> TokenGroup {
        let mut group = TokenGroup::new();

        for (name, child) in obj {
            let path = prefix.child(name);
            if name.contains(RESERVED_NAME_CHARS) {
                self.report(&path, format!("name '{name}' must not contain '.', '{{' or '}}'"));
            }

            match child {
                Value::Object(fields) if fields.contains_key("value") => {
                    let token = self.token(&path, fields);
                    group.insert(name.clone(), Node::Token(token));
                }
                Value::Object(fields) => {
                    let nested = self.group(&path, fields);
                    group.insert(name.clone(), Node::Group(nested));
                }
                other => {
                    debug!(path = %path, kind = kind(other), "skipping non-object child");
                    self.report(
                        &path,
                        format!("expected a token or group object, found {}", kind(other)),
                    );
                }
            }
        }

        group
    }

    fn token(&mut self, path: &TokenPath, fields: &Map<String, Value>) -> Token {
        let raw = fields.get("value").unwrap_or(&Value::Null);
        if raw.is_null() {
            self.report(path, "value must not be null");
        }
        let mut token = Token::new(TokenValue::from_json(raw));

        match fields.get("type") {
            None => {}
            Some(Value::String(tag)) => {
                let token_type: TokenType = tag.parse().unwrap_or_else(|e| match e {});
                if !token_type.is_known() {
                    self.report(path, format!("unknown type '{tag}'"));
                }
                token.token_type = Some(token_type);
            }
            Some(other) => {
                self.report(path, format!("type must be a string, found {}", kind(other)));
            }
        }

        match fields.get("description") {
            None => {}
            Some(Value::String(text)) => token.description = Some(text.clone()),
            Some(other) => {
                self.report(
                    path,
                    format!("description must be a string, found {}", kind(other)),
                );
            }
        }

        token.extensions = fields.get("extensions").cloned();

        if let TokenValue::String(text) = &token.value {
            if text.starts_with('{') && text.ends_with('}') {
                self.report(path, format!("malformed reference '{text}'"));
            } else if token.is_color() && !is_color(text) {
                self.report(path, format!("invalid color '{text}'"));
            }
        }

        token
    }
}

/// JSON kind name for messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(source: &Value) -> Vec<String> {
        build(source)
            .unwrap()
            .1
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn discriminates_tokens_and_groups() {
        let source = json!({
            "color": {
                "primary": { "value": "#ff0000", "type": "color" },
                "nested": { "deep": { "value": 1 } }
            }
        });
        let (group, diagnostics) = build(&source).unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(group.token_count(), 2);
        assert!(group.token(&TokenPath::parse("color.primary")).unwrap().is_color());
        assert!(group.token(&TokenPath::parse("color.nested.deep")).is_some());
    }

    #[test]
    fn root_must_be_object() {
        for bad in [json!([]), json!("tokens"), json!(null)] {
            let err = build(&bad).unwrap_err();
            assert!(matches!(err, TokenError::InvalidDocument { .. }));
        }
    }

    #[test]
    fn reports_every_problem() {
        let source = json!({
            "a": 5,
            "b": { "value": null },
            "c": { "value": "x", "type": "colour" },
            "d": { "value": "x", "type": 3 },
            "e": { "value": "x", "description": false },
            "f": { "value": "#ggg", "type": "color" },
            "g.h": { "value": 1 },
            "i": { "value": "{oops" },
            "j": { "value": "{a b}" }
        });
        assert_eq!(
            messages(&source),
            [
                "a: expected a token or group object, found number",
                "b: value must not be null",
                "c: unknown type 'colour'",
                "d: type must be a string, found number",
                "e: description must be a string, found boolean",
                "f: invalid color '#ggg'",
                "g.h: name 'g.h' must not contain '.', '{' or '}'",
                "j: malformed reference '{a b}'",
            ]
        );
    }

    #[test]
    fn lenient_keeps_what_it_can() {
        let source = json!({
            "skip": [1, 2],
            "odd": { "value": "x", "type": "colour", "description": 4 }
        });
        let group = build_checked(&source, false).unwrap();
        assert!(group.get("skip").is_none());
        let odd = group.token(&TokenPath::parse("odd")).unwrap();
        assert_eq!(odd.token_type, Some(TokenType::Other("colour".into())));
        assert_eq!(odd.description, None);
    }

    #[test]
    fn strict_fails_with_all_diagnostics() {
        let source = json!({ "a": 1, "b": { "value": null } });
        let err = build_checked(&source, true).unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn color_alias_is_not_checked_as_literal() {
        let source = json!({
            "base": { "value": "#ff0000", "type": "color" },
            "link": { "value": "{base}", "type": "color" }
        });
        assert!(messages(&source).is_empty());
    }

    #[test]
    fn extensions_pass_through() {
        let source = json!({ "a": { "value": 1, "extensions": { "tool": { "id": 7 } } } });
        let group = build_checked(&source, true).unwrap();
        let token = group.token(&TokenPath::parse("a")).unwrap();
        assert_eq!(token.extensions, Some(json!({ "tool": { "id": 7 } })));
    }
}
