//! # toki-export
//!
//! Renders a canonical [`TokenTree`] into stylesheet, script and JSON
//! outputs.
//!
//! # Formats
//!
//! | Format | Output |
//! |--------|--------|
//! | `css`  | `:root { --color-primary: #3b82f6; }` |
//! | `scss` | `$color-primary: #3b82f6;` |
//! | `js`   | `export const tokens = { color: { primary: '#3b82f6', }, };` |
//! | `ts`   | the `js` module `as const`, plus `export type Tokens` |
//! | `json` | the canonical token document |
//!
//! Every format is a [`Renderer`] over the same depth-first [`walk`], so
//! ordering and alias checks are shared. Output is byte-identical for
//! identical trees.
//!
//! # Quick Start
//!
//! ```rust
//! use toki_export::{export, ExportOptions, Format};
//! use toki_parse::{parse_str, ParseOptions};
//!
//! let tree = parse_str(
//!     r##"{ "space": { "sm": { "value": "4px", "type": "dimension" } } }"##,
//!     ParseOptions::validating(),
//! ).unwrap();
//! let scss = export(&tree, Format::Scss, &ExportOptions::default()).unwrap();
//! assert_eq!(scss, "$space-sm: 4px;\n");
//! ```
//!
//! [`TokenTree`]: toki_core::TokenTree

#![warn(missing_docs)]
#![warn(clippy::all)]

mod css;
mod exporter;
mod format;
mod js;
mod json;
mod walk;

pub use css::css_value;
pub use exporter::{DEFAULT_SELECTOR, ExportOptions, Exporter, TokenExporter, export, export_dark};
pub use format::Format;
pub use js::js_value;
pub use walk::{Renderer, Visit, walk};
