//! Theme collections.
//!
//! A collection document looks like:
//!
//! ```json
//! { "themes": [
//!     { "name": "light", "tokens": { ... } },
//!     { "name": "brand", "extends": "light", "tokens": { ... } }
//! ] }
//! ```
//!
//! Theme groups are built with the parser's structural rules, but aliases
//! stay unresolved until [`resolve_theme`] has merged the inheritance chain,
//! so a child can override a base value that parent aliases point at.

use serde::Deserialize;
use serde_json::Value;
use toki_core::{Diagnostic, Theme, ThemeSet, TokenError, TokenPath, TokenResult, TokenTree};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::builder::build;
use crate::parser::ParseOptions;
use crate::resolve::resolve_aliases;

/// One theme entry as written in a collection or project config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeSource {
    /// Unique theme name.
    pub name: String,
    /// Parent theme name.
    #[serde(default)]
    pub extends: Option<String>,
    /// Raw token document for this theme.
    #[serde(default = "empty_object")]
    pub tokens: Value,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

#[derive(Deserialize)]
struct ThemeDocument {
    themes: Vec<ThemeSource>,
}

/// Parses a theme collection document.
///
/// # Errors
///
/// - [`TokenError::InvalidDocument`] if there is no usable `themes` array
/// - [`TokenError::DuplicateTheme`] if two entries share a name
/// - [`TokenError::Validation`] when validating; diagnostic paths are
///   prefixed with `themes.<name>`
pub fn parse_themes(source: &Value, options: ParseOptions) -> TokenResult<ThemeSet> {
    let doc = ThemeDocument::deserialize(source)
        .map_err(|e| TokenError::invalid_document(format!("theme collection: {e}")))?;
    build_theme_set(&doc.themes, options)
}

/// Builds a [`ThemeSet`] from already deserialized entries.
pub fn build_theme_set(sources: &[ThemeSource], options: ParseOptions) -> TokenResult<ThemeSet> {
    let mut set = ThemeSet::new();
    let mut diagnostics = Vec::new();

    for source in sources {
        let (tokens, found) = build(&source.tokens).map_err(|e| {
            TokenError::invalid_document(format!("theme '{}': {e}", source.name))
        })?;
        let prefix = TokenPath::from_segments(["themes", source.name.as_str()]);
        diagnostics.extend(found.into_iter().map(|d| {
            let path = TokenPath::from_segments(
                prefix.segments().iter().chain(d.path.segments()).map(String::as_str),
            );
            Diagnostic::new(path, d.message)
        }));

        let theme = Theme::new(source.name.clone(), tokens);
        let theme = match &source.extends {
            Some(parent) => theme.extending(parent.clone()),
            None => theme,
        };
        trace!(theme = %source.name, extends = ?source.extends, "loaded theme");
        set.insert(theme)?;
    }

    if options.validate && !diagnostics.is_empty() {
        return Err(TokenError::Validation { diagnostics });
    }
    debug!(themes = set.len(), "parsed theme collection");
    Ok(set)
}

/// Merges a theme's inheritance chain, then resolves aliases in the result.
///
/// # Errors
///
/// [`TokenError::ThemeNotFound`] or [`TokenError::CircularReference`] from the
/// `extends` chain, or any alias resolution error.
pub fn resolve_theme(set: &ThemeSet, name: &str) -> TokenResult<TokenTree> {
    let merged = set.effective(name)?;
    debug!(theme = name, tokens = merged.token_count(), "merged theme chain");
    resolve_aliases(&merged)
}
