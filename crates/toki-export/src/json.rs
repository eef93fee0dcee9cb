//! Canonical token document output.
//!
//! Rebuilds the source shape (`{ "value": ..., "type": ... }` leaves inside
//! nested groups) so the result parses back to the same tree. Pretty printed
//! with two-space indentation and a trailing newline.

use serde_json::{Map, Value};
use toki_core::{Token, TokenResult};

use crate::walk::{Renderer, Visit};

/// Builds the document bottom-up on a stack of open groups.
pub(crate) struct JsonRenderer {
    stack: Vec<Map<String, Value>>,
}

impl JsonRenderer {
    pub(crate) fn new() -> Self {
        Self {
            stack: vec![Map::new()],
        }
    }

    fn top(&mut self) -> &mut Map<String, Value> {
        if self.stack.is_empty() {
            self.stack.push(Map::new());
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

impl Renderer for JsonRenderer {
    fn begin_group(&mut self, _visit: &Visit<'_>) {
        self.stack.push(Map::new());
    }

    fn token(&mut self, visit: &Visit<'_>, token: &Token) {
        self.top().insert(visit.name.to_string(), token.to_json());
    }

    fn end_group(&mut self, visit: &Visit<'_>) {
        let group = self.stack.pop().unwrap_or_default();
        self.top().insert(visit.name.to_string(), Value::Object(group));
    }

    fn finish(mut self) -> TokenResult<String> {
        let root = self.stack.pop().unwrap_or_default();
        let mut text = serde_json::to_string_pretty(&Value::Object(root))?;
        text.push('\n');
        Ok(text)
    }
}
