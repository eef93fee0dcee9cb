//! # toki-core
//!
//! Core types for design tokens.
//!
//! - [`Token`] - a leaf value with a type tag and metadata
//! - [`TokenGroup`] - an insertion-ordered namespace of tokens and groups
//! - [`TokenTree`] - the canonical, alias-free model produced by the parser
//! - [`Theme`] / [`ThemeSet`] - named trees with `extends` inheritance
//! - [`TokenError`] - the shared error type
//!
//! # Architecture
//!
//! ```text
//!              toki-cli
//!                 |
//!       +---------+---------+
//!       |                   |
//!  toki-parse          toki-export
//!       |                   |
//!       +-----toki-color----+
//!                 |
//!             toki-core
//! ```
//!
//! # Used By
//!
//! - `toki-color` - dark theme derivation walks [`TokenGroup`]s
//! - `toki-parse` - builds [`TokenTree`]s and [`ThemeSet`]s
//! - `toki-export` - renders [`TokenTree`]s

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod path;
mod theme;
mod token;
mod tree;

pub use error::{Diagnostic, TokenError, TokenResult};
pub use path::TokenPath;
pub use theme::{Theme, ThemeSet};
pub use token::{Token, TokenType, TokenValue, parse_reference};
pub use tree::{Node, TokenGroup, TokenTree, Tokens};
