//! # toki-parse
//!
//! Loads design token documents into the canonical [`TokenTree`].
//!
//! # Pipeline
//!
//! ```text
//! JSON / YAML ──> serde_json::Value ──> TokenGroup ──> TokenTree
//!                                    │              │
//!                               diagnostics    alias resolution
//! ```
//!
//! - [`parse`] / [`parse_str`] / [`parse_yaml_str`] / [`parse_file`] - documents
//! - [`validate`] - structural diagnostics without failing
//! - [`parse_themes`] / [`resolve_theme`] - theme collections with `extends`
//! - [`lint()`] - combined validation, reference and contrast findings
//! - [`ProjectConfig`] - `toki.config.json`
//!
//! # Quick Start
//!
//! ```rust
//! use toki_parse::{parse_str, ParseOptions};
//!
//! let tree = parse_str(
//!     r##"{ "space": { "sm": { "value": "4px", "type": "dimension" } } }"##,
//!     ParseOptions::validating(),
//! ).unwrap();
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! [`TokenTree`]: toki_core::TokenTree

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod config;
pub mod lint;
mod parser;
mod resolve;
mod themes;

pub use config::{CONFIG_FILE_NAME, ProjectConfig};
pub use lint::{Issue, IssueCategory, Severity, lint};
pub use parser::{ParseOptions, parse, parse_file, parse_str, parse_yaml_str, read_source, validate};
pub use resolve::resolve_aliases;
pub use themes::{ThemeSource, build_theme_set, parse_themes, resolve_theme};
