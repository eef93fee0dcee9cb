//! Named themes with single-parent inheritance.
//!
//! A theme's effective token set is its own group deep-merged over its
//! parent's, applied transitively up the `extends` chain.
//!
//! # Example
//!
//! ```rust
//! use toki_core::{Node, Theme, ThemeSet, Token, TokenGroup, TokenPath};
//!
//! let mut light = TokenGroup::new();
//! light.insert("bg", Node::Token(Token::color("#ffffff")));
//! light.insert("fg", Node::Token(Token::color("#111111")));
//!
//! let mut dark = TokenGroup::new();
//! dark.insert("bg", Node::Token(Token::color("#111111")));
//!
//! let mut set = ThemeSet::new();
//! set.insert(Theme::new("light", light)).unwrap();
//! set.insert(Theme::new("dark", dark).extending("light")).unwrap();
//!
//! let effective = set.effective("dark").unwrap();
//! assert_eq!(effective.token(&TokenPath::parse("bg")).unwrap().value.as_str(), Some("#111111"));
//! assert_eq!(effective.token(&TokenPath::parse("fg")).unwrap().value.as_str(), Some("#111111"));
//! ```

use indexmap::IndexMap;

use crate::error::{TokenError, TokenResult};
use crate::path::TokenPath;
use crate::tree::TokenGroup;

/// A named token tree, optionally extending a parent theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    extends: Option<String>,
    tokens: TokenGroup,
}

impl Theme {
    /// Creates a root theme.
    pub fn new(name: impl Into<String>, tokens: TokenGroup) -> Self {
        Self {
            name: name.into(),
            extends: None,
            tokens,
        }
    }

    /// Sets the parent theme name.
    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Theme name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent theme name.
    #[inline]
    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    /// The theme's own tokens (without inherited ones).
    #[inline]
    pub fn tokens(&self) -> &TokenGroup {
        &self.tokens
    }
}

/// Collection of themes, keyed by name in definition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeSet {
    themes: IndexMap<String, Theme>,
}

impl ThemeSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a theme. Names must be unique.
    pub fn insert(&mut self, theme: Theme) -> TokenResult<()> {
        if self.themes.contains_key(&theme.name) {
            return Err(TokenError::DuplicateTheme { name: theme.name });
        }
        self.themes.insert(theme.name.clone(), theme);
        Ok(())
    }

    /// Theme by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Themes in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    /// Theme names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Number of themes.
    #[inline]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Checks if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Inheritance chain of `name`, from the theme itself up to its root.
    ///
    /// Fails on unknown names and on `extends` cycles.
    pub fn chain(&self, name: &str) -> TokenResult<Vec<&Theme>> {
        let mut chain: Vec<&Theme> = Vec::new();
        let mut current = Some(name);

        while let Some(n) = current {
            if let Some(pos) = chain.iter().position(|t| t.name == n) {
                let mut cycle: Vec<TokenPath> = chain[pos..]
                    .iter()
                    .map(|t| TokenPath::from_segments([t.name.as_str()]))
                    .collect();
                cycle.push(TokenPath::from_segments([n]));
                return Err(TokenError::CircularReference { cycle });
            }
            let theme = self
                .themes
                .get(n)
                .ok_or_else(|| TokenError::ThemeNotFound { name: n.to_string() })?;
            chain.push(theme);
            current = theme.extends.as_deref();
        }

        Ok(chain)
    }

    /// Effective (merged) token group of `name`.
    pub fn effective(&self, name: &str) -> TokenResult<TokenGroup> {
        let chain = self.chain(name)?;
        let merged = chain
            .iter()
            .rev()
            .fold(TokenGroup::new(), |acc, theme| acc.merged_with(&theme.tokens));
        Ok(merged)
    }
}
