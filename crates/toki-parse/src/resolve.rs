//! Alias resolution.
//!
//! References are absolute paths from the root of the group being resolved.
//! Each token is dereferenced at most once; chains are followed recursively
//! with an in-progress stack so a cycle is reported with every member in
//! traversal order.

use std::collections::{HashMap, HashSet};

use toki_core::{Token, TokenError, TokenGroup, TokenPath, TokenResult, TokenTree};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Resolves every alias in `group`, producing the canonical tree.
///
/// A resolved alias takes the target's value, and its type too when it has
/// none of its own. Description and extensions stay the alias's own.
///
/// # Errors
///
/// - [`TokenError::UnresolvedReference`] if a path is missing or names a group
/// - [`TokenError::CircularReference`] if a chain revisits a token
pub fn resolve_aliases(group: &TokenGroup) -> TokenResult<TokenTree> {
    let mut resolver = Resolver::new(group);
    for (path, token) in group.tokens() {
        resolver.resolve(&path, token)?;
    }
    debug!(aliases = resolver.aliases, "resolved aliases");

    let resolved = group.map_tokens(|path, token| {
        resolver
            .done
            .get(path)
            .cloned()
            .unwrap_or_else(|| token.clone())
    });
    Ok(TokenTree::new(resolved))
}

/// Every alias failure in `group`, one per broken chain.
///
/// Aliases that fail through the same missing target report it once, and a
/// cycle is reported once whichever member it is entered from.
pub(crate) fn alias_errors(group: &TokenGroup) -> Vec<TokenError> {
    let mut resolver = Resolver::new(group);
    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    for (path, token) in group.tokens() {
        if let Err(e) = resolver.resolve(&path, token) {
            if seen.insert(error_key(&e)) {
                errors.push(e);
            }
        }
    }
    debug!(errors = errors.len(), "checked aliases");
    errors
}

/// Cycles are keyed on their member set, other errors on their message.
fn error_key(error: &TokenError) -> String {
    match error {
        TokenError::CircularReference { cycle } => {
            let mut members: Vec<&TokenPath> = cycle.iter().collect();
            members.sort();
            members.dedup();
            let names: Vec<String> = members.iter().map(ToString::to_string).collect();
            format!("cycle {}", names.join(" "))
        }
        other => other.to_string(),
    }
}

struct Resolver<'a> {
    root: &'a TokenGroup,
    done: HashMap<TokenPath, Token>,
    in_progress: Vec<TokenPath>,
    aliases: usize,
}

impl<'a> Resolver<'a> {
    fn new(root: &'a TokenGroup) -> Self {
        Self {
            root,
            done: HashMap::new(),
            in_progress: Vec::new(),
            aliases: 0,
        }
    }

    fn resolve(&mut self, path: &TokenPath, token: &Token) -> TokenResult<Token> {
        if let Some(hit) = self.done.get(path) {
            return Ok(hit.clone());
        }
        let Some(target_path) = token.value.reference() else {
            return Ok(token.clone());
        };

        if let Some(start) = self.in_progress.iter().position(|p| p == path) {
            let mut cycle = self.in_progress[start..].to_vec();
            cycle.push(path.clone());
            return Err(TokenError::CircularReference { cycle });
        }

        let root = self.root;
        let target = root
            .token(target_path)
            .ok_or_else(|| TokenError::unresolved_reference(target_path.clone(), path.clone()))?;

        trace!(from = %path, to = %target_path, "following alias");
        self.in_progress.push(path.clone());
        let resolved_target = self.resolve(target_path, target);
        self.in_progress.pop();
        let resolved_target = resolved_target?;

        let resolved = Token {
            value: resolved_target.value,
            token_type: token.token_type.clone().or(resolved_target.token_type),
            ..token.clone()
        };
        self.aliases += 1;
        self.done.insert(path.clone(), resolved.clone());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_checked;
    use serde_json::json;
    use toki_core::TokenType;

    fn resolve_json(source: serde_json::Value) -> TokenResult<TokenTree> {
        resolve_aliases(&build_checked(&source, false)?)
    }

    fn value(tree: &TokenTree, path: &str) -> String {
        tree.get(&TokenPath::parse(path)).unwrap().value.to_string()
    }

    #[test]
    fn simple_alias() {
        let tree = resolve_json(json!({
            "color": {
                "primary": { "value": "#ff0000", "type": "color" },
                "link": { "value": "{color.primary}" }
            }
        }))
        .unwrap();
        let link = tree.get(&TokenPath::parse("color.link")).unwrap();
        assert_eq!(link.value.as_str(), Some("#ff0000"));
        assert_eq!(link.token_type, Some(TokenType::Color));
    }

    #[test]
    fn chain_and_forward_reference() {
        let tree = resolve_json(json!({
            "a": { "value": "{b}" },
            "b": { "value": "{c}" },
            "c": { "value": "16px", "type": "dimension" }
        }))
        .unwrap();
        assert_eq!(value(&tree, "a"), "16px");
        assert_eq!(value(&tree, "b"), "16px");
        assert!(tree.tokens().all(|(_, t)| !t.value.is_reference()));
    }

    #[test]
    fn own_type_and_metadata_win() {
        let tree = resolve_json(json!({
            "base": { "value": "4", "type": "number", "description": "base" },
            "size": { "value": "{base}", "type": "dimension", "description": "size" }
        }))
        .unwrap();
        let size = tree.get(&TokenPath::parse("size")).unwrap();
        assert_eq!(size.token_type, Some(TokenType::Dimension));
        assert_eq!(size.description.as_deref(), Some("size"));
    }

    #[test]
    fn two_member_cycle() {
        let err = resolve_json(json!({
            "a": { "value": "{b}" },
            "b": { "value": "{a}" }
        }))
        .unwrap_err();
        match err {
            TokenError::CircularReference { cycle } => {
                let names: Vec<String> = cycle.iter().map(ToString::to_string).collect();
                assert_eq!(names, ["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {other}"),
        }
    }

    #[test]
    fn self_reference() {
        let err = resolve_json(json!({ "a": { "value": "{a}" } })).unwrap_err();
        assert_eq!(err.to_string(), "circular reference: a -> a");
    }

    #[test]
    fn cycle_reached_through_tail() {
        let err = resolve_json(json!({
            "entry": { "value": "{x}" },
            "x": { "value": "{y}" },
            "y": { "value": "{x}" }
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "circular reference: x -> y -> x");
    }

    #[test]
    fn missing_target() {
        let err = resolve_json(json!({ "a": { "value": "{nope.gone}" } })).unwrap_err();
        match err {
            TokenError::UnresolvedReference { path, token } => {
                assert_eq!(path, TokenPath::parse("nope.gone"));
                assert_eq!(token, TokenPath::parse("a"));
            }
            other => panic!("expected unresolved reference, got {other}"),
        }
    }

    #[test]
    fn every_broken_alias_reported() {
        let group = build_checked(
            &json!({
                "a": { "value": "{x}" },
                "b": { "value": "{y}" },
                "c": { "value": "{c}" },
                "d": { "value": "{a}" },
                "ok": { "value": "1px" }
            }),
            false,
        )
        .unwrap();
        let errors: Vec<String> = alias_errors(&group).iter().map(ToString::to_string).collect();
        assert_eq!(
            errors,
            [
                "unresolved reference {x} in token 'a'",
                "unresolved reference {y} in token 'b'",
                "circular reference: c -> c",
            ]
        );
    }

    #[test]
    fn cycle_reported_once() {
        let group = build_checked(
            &json!({
                "entry": { "value": "{x}" },
                "x": { "value": "{y}" },
                "y": { "value": "{x}" }
            }),
            false,
        )
        .unwrap();
        let errors = alias_errors(&group);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "circular reference: x -> y -> x");
    }

    #[test]
    fn group_target_is_unresolved() {
        let err = resolve_json(json!({
            "color": { "primary": { "value": "#ff0000" } },
            "a": { "value": "{color}" }
        }))
        .unwrap_err();
        assert!(err.is_reference_error());
    }

    #[test]
    fn order_preserved() {
        let tree = resolve_json(json!({
            "z": { "value": "{a}" },
            "m": { "value": 2 },
            "a": { "value": 1 }
        }))
        .unwrap();
        let order: Vec<String> = tree.tokens().map(|(p, _)| p.to_string()).collect();
        assert_eq!(order, ["z", "m", "a"]);
    }
}
