//! Token groups and the canonical token tree.
//!
//! Nodes are an explicit tagged variant, [`Node::Token`] or [`Node::Group`],
//! so every traversal handles both cases exhaustively. Groups keep insertion
//! order, which is what makes exports deterministic.
//!
//! # Example
//!
//! ```rust
//! use toki_core::{Node, Token, TokenGroup, TokenPath, TokenTree};
//!
//! let mut color = TokenGroup::new();
//! color.insert("primary", Node::Token(Token::color("#3b82f6")));
//!
//! let mut root = TokenGroup::new();
//! root.insert("color", Node::Group(color));
//!
//! let tree = TokenTree::new(root);
//! let primary = tree.get(&TokenPath::parse("color.primary")).unwrap();
//! assert_eq!(primary.value.as_str(), Some("#3b82f6"));
//! ```

use indexmap::IndexMap;
use indexmap::map::Iter as MapIter;
use serde_json::{Map, Value};

use crate::path::TokenPath;
use crate::token::Token;

/// A node in a token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf value.
    Token(Token),
    /// Nested namespace.
    Group(TokenGroup),
}

impl Node {
    /// Returns the token if this node is a leaf.
    #[inline]
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(t) => Some(t),
            Self::Group(_) => None,
        }
    }

    /// Returns the group if this node is a namespace.
    #[inline]
    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            Self::Group(g) => Some(g),
            Self::Token(_) => None,
        }
    }

    /// Serializes to the source document shape.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Token(t) => t.to_json(),
            Self::Group(g) => g.to_json(),
        }
    }
}

/// Insertion-ordered mapping from name to [`Node`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenGroup {
    children: IndexMap<String, Node>,
}

impl TokenGroup {
    /// Creates an empty group.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a child, returning the node it replaced.
    ///
    /// Replacing keeps the original position; new names are appended.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        self.children.insert(name.into(), node)
    }

    /// Direct child by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Node at `path`, relative to this group. The empty path is not a node.
    pub fn node(&self, path: &TokenPath) -> Option<&Node> {
        let (first, rest) = path.segments().split_first()?;
        let mut node = self.children.get(first)?;
        for segment in rest {
            node = node.as_group()?.children.get(segment)?;
        }
        Some(node)
    }

    /// Token at `path`, or `None` if the path is missing or names a group.
    #[inline]
    pub fn token(&self, path: &TokenPath) -> Option<&Token> {
        self.node(path).and_then(Node::as_token)
    }

    /// Direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of direct children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Checks if the group has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first iterator over every token with its full path.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            stack: vec![(TokenPath::root(), self.children.iter())],
        }
    }

    /// Total number of tokens at any depth.
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    /// Rebuilds the group with every token replaced by `f(path, token)`.
    ///
    /// Structure and order are preserved.
    pub fn map_tokens<F>(&self, mut f: F) -> TokenGroup
    where
        F: FnMut(&TokenPath, &Token) -> Token,
    {
        self.map_inner(&TokenPath::root(), &mut f)
    }

    fn map_inner<F>(&self, prefix: &TokenPath, f: &mut F) -> TokenGroup
    where
        F: FnMut(&TokenPath, &Token) -> Token,
    {
        let children = self
            .children
            .iter()
            .map(|(name, node)| {
                let path = prefix.child(name);
                let mapped = match node {
                    Node::Token(t) => Node::Token(f(&path, t)),
                    Node::Group(g) => Node::Group(g.map_inner(&path, f)),
                };
                (name.clone(), mapped)
            })
            .collect();
        TokenGroup { children }
    }

    /// Deep-merges `overlay` over `self`.
    ///
    /// Groups present on both sides merge recursively; any other collision is
    /// won by `overlay`. Keys of `self` keep their order, keys only in
    /// `overlay` are appended.
    pub fn merged_with(&self, overlay: &TokenGroup) -> TokenGroup {
        let mut out = self.clone();
        for (name, node) in &overlay.children {
            let merged = match (out.children.get(name), node) {
                (Some(Node::Group(base)), Node::Group(over)) => Node::Group(base.merged_with(over)),
                _ => node.clone(),
            };
            out.children.insert(name.clone(), merged);
        }
        out
    }

    /// Serializes to the source document shape.
    pub fn to_json(&self) -> Value {
        let obj: Map<String, Value> = self
            .children
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        Value::Object(obj)
    }
}

/// Iterator returned by [`TokenGroup::tokens`].
pub struct Tokens<'a> {
    stack: Vec<(TokenPath, MapIter<'a, String, Node>)>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (TokenPath, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, iter) = self.stack.last_mut()?;
            match iter.next() {
                Some((name, Node::Token(token))) => return Some((prefix.child(name), token)),
                Some((name, Node::Group(group))) => {
                    let path = prefix.child(name);
                    self.stack.push((path, group.children.iter()));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// The canonical token model.
///
/// Produced by the parser with every alias resolved. There is no mutating
/// API: transformations build a new tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTree {
    root: TokenGroup,
}

impl TokenTree {
    /// Wraps a root group.
    ///
    /// The group is expected to be alias-free; exporters reject any
    /// reference they encounter.
    #[inline]
    pub fn new(root: TokenGroup) -> Self {
        Self { root }
    }

    /// The root group.
    #[inline]
    pub fn root(&self) -> &TokenGroup {
        &self.root
    }

    /// Consumes the tree, returning the root group.
    #[inline]
    pub fn into_root(self) -> TokenGroup {
        self.root
    }

    /// Token at `path`.
    #[inline]
    pub fn get(&self, path: &TokenPath) -> Option<&Token> {
        self.root.token(path)
    }

    /// Depth-first iterator over every token.
    #[inline]
    pub fn tokens(&self) -> Tokens<'_> {
        self.root.tokens()
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.root.token_count()
    }

    /// Checks if the tree has no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes to the source document shape.
    #[inline]
    pub fn to_json(&self) -> Value {
        self.root.to_json()
    }
}

impl From<TokenGroup> for TokenTree {
    fn from(root: TokenGroup) -> Self {
        Self::new(root)
    }
}
