//! Error types for toki-core operations.
//!
//! This module provides a unified error type for everything that can go wrong
//! between reading a token document and rendering it.
//!
//! # Overview
//!
//! The [`TokenError`] enum covers all failure modes that can occur during:
//! - Document loading (I/O, JSON, YAML)
//! - Structural validation (collected [`Diagnostic`]s)
//! - Alias resolution (missing targets, cycles)
//! - Theme inheritance (unknown parents, duplicate names)
//! - Export (unresolved aliases reaching a renderer)
//!
//! # Usage
//!
//! ```rust
//! use toki_core::{TokenError, TokenPath, TokenResult};
//!
//! fn lookup(known: &[&str], path: &str) -> TokenResult<()> {
//!     if !known.contains(&path) {
//!         return Err(TokenError::unresolved_reference(
//!             TokenPath::parse(path),
//!             TokenPath::parse("color.link"),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(lookup(&["color.primary"], "color.secondary").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `toki-parse` - Parse, validation and theme errors
//! - `toki-export` - Export-time contract violations

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::TokenPath;

/// Result type alias using [`TokenError`] as the error type.
pub type TokenResult<T> = std::result::Result<T, TokenError>;

/// Errors that can occur while loading, resolving or exporting tokens.
///
/// # Categories
///
/// - **Input errors**: [`Io`](TokenError::Io), [`Json`](TokenError::Json),
///   [`Yaml`](TokenError::Yaml), [`InvalidDocument`](TokenError::InvalidDocument)
/// - **Validation errors**: [`Validation`](TokenError::Validation)
/// - **Reference errors**: [`UnresolvedReference`](TokenError::UnresolvedReference),
///   [`CircularReference`](TokenError::CircularReference)
/// - **Theme errors**: [`ThemeNotFound`](TokenError::ThemeNotFound),
///   [`DuplicateTheme`](TokenError::DuplicateTheme)
/// - **Export errors**: [`UnresolvedAlias`](TokenError::UnresolvedAlias),
///   [`UnsupportedFormat`](TokenError::UnsupportedFormat)
#[derive(Debug, Error)]
pub enum TokenError {
    /// I/O error reading a token or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Token file not found.
    #[error("token file not found: {path}")]
    FileNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// The document cannot be interpreted at all (e.g. the root is not an object).
    #[error("invalid token document: {reason}")]
    InvalidDocument {
        /// Description of what's wrong.
        reason: String,
    },

    /// Structural validation failed.
    ///
    /// Carries every diagnostic found so callers can report them in one pass.
    #[error("validation failed with {} problem(s): {}", .diagnostics.len(), DiagnosticList(.diagnostics))]
    Validation {
        /// All diagnostics, in document order.
        diagnostics: Vec<Diagnostic>,
    },

    /// An alias points at a path that does not name a token.
    #[error("unresolved reference {{{path}}} in token '{token}'")]
    UnresolvedReference {
        /// The referenced path.
        path: TokenPath,
        /// The token holding the reference.
        token: TokenPath,
    },

    /// An alias chain revisits a path.
    #[error("circular reference: {}", CycleChain(.cycle))]
    CircularReference {
        /// Cycle members in traversal order, first member repeated at the end.
        cycle: Vec<TokenPath>,
    },

    /// A reference reached an exporter.
    #[error("token '{token}' still references {{{path}}} at export time")]
    UnresolvedAlias {
        /// The token holding the reference.
        token: TokenPath,
        /// The referenced path.
        path: TokenPath,
    },

    /// Theme not found in a theme set.
    #[error("theme not found: {name}")]
    ThemeNotFound {
        /// Name of the missing theme.
        name: String,
    },

    /// Two themes share a name.
    #[error("duplicate theme name: {name}")]
    DuplicateTheme {
        /// The repeated name.
        name: String,
    },

    /// Export or source format not recognized.
    #[error("unsupported format: {format}")]
    UnsupportedFormat {
        /// Format name or extension.
        format: String,
    },
}

impl TokenError {
    /// Creates a [`TokenError::InvalidDocument`] error.
    #[inline]
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Creates a [`TokenError::UnresolvedReference`] error.
    #[inline]
    pub fn unresolved_reference(path: TokenPath, token: TokenPath) -> Self {
        Self::UnresolvedReference { path, token }
    }

    /// Creates a [`TokenError::UnresolvedAlias`] error.
    #[inline]
    pub fn unresolved_alias(token: TokenPath, path: TokenPath) -> Self {
        Self::UnresolvedAlias { token, path }
    }

    /// Creates a [`TokenError::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Returns `true` for unresolved and circular reference errors.
    #[inline]
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedReference { .. }
                | Self::CircularReference { .. }
                | Self::UnresolvedAlias { .. }
        )
    }

    /// Returns `true` if this is a validation error.
    #[inline]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns the collected diagnostics of a validation error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Validation { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}

/// One structural problem found while validating a token document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path of the offending node (empty for the root).
    pub path: TokenPath,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic for `path`.
    pub fn new(path: TokenPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

struct DiagnosticList<'a>(&'a [Diagnostic]);

impl fmt::Display for DiagnosticList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

struct CycleChain<'a>(&'a [TokenPath]);

impl fmt::Display for CycleChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_message() {
        let err = TokenError::unresolved_reference(
            TokenPath::parse("color.missing"),
            TokenPath::parse("color.link"),
        );
        let msg = err.to_string();
        assert!(msg.contains("{color.missing}"));
        assert!(msg.contains("color.link"));
        assert!(err.is_reference_error());
    }

    #[test]
    fn test_cycle_message() {
        let err = TokenError::CircularReference {
            cycle: vec![TokenPath::parse("a"), TokenPath::parse("b"), TokenPath::parse("a")],
        };
        assert_eq!(err.to_string(), "circular reference: a -> b -> a");
    }

    #[test]
    fn test_validation_lists_all() {
        let err = TokenError::Validation {
            diagnostics: vec![
                Diagnostic::new(TokenPath::parse("a"), "first"),
                Diagnostic::new(TokenPath::root(), "second"),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 problem(s)"));
        assert!(msg.contains("a: first"));
        assert!(msg.contains("<root>: second"));
        assert_eq!(err.diagnostics().len(), 2);
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TokenError = io_err.into();
        assert!(matches!(err, TokenError::Io(_)));
        assert!(err.diagnostics().is_empty());
    }
}
