//! Exporter capability and the format-dispatching implementation.

use toki_color::generate_dark_theme;
use toki_core::{TokenResult, TokenTree};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::css::{CssRenderer, ScssRenderer};
use crate::format::Format;
use crate::js::JsRenderer;
use crate::json::JsonRenderer;
use crate::walk::{Renderer, walk};

/// Selector used for the light (default) CSS rule.
pub const DEFAULT_SELECTOR: &str = ":root";

/// Options shared by every format. Formats ignore what does not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Variable name prefix (`css`, `scss`).
    pub prefix: Option<String>,
    /// Selector of the main CSS rule.
    pub selector: String,
    /// When set, CSS output gets a second rule under this selector holding
    /// the dark variant of every color token.
    pub dark_selector: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            selector: DEFAULT_SELECTOR.to_string(),
            dark_selector: None,
        }
    }
}

impl ExportOptions {
    /// Sets the variable prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the main CSS selector.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Adds a dark CSS rule under `selector`.
    pub fn with_dark_selector(mut self, selector: impl Into<String>) -> Self {
        self.dark_selector = Some(selector.into());
        self
    }
}

/// Something that turns a canonical tree into text.
///
/// Implement this trait to add an output beyond the built-in [`Format`]s.
pub trait Exporter {
    /// Renders `tree`.
    ///
    /// # Errors
    ///
    /// [`toki_core::TokenError::UnresolvedAlias`] if the tree still holds a
    /// reference.
    fn export(&self, tree: &TokenTree) -> TokenResult<String>;
}

/// Built-in exporter for one [`Format`].
///
/// # Example
///
/// ```rust
/// use toki_core::{Node, Token, TokenGroup, TokenTree};
/// use toki_export::{ExportOptions, Exporter, Format, TokenExporter};
///
/// let mut color = TokenGroup::new();
/// color.insert("primary", Node::Token(Token::color("#3b82f6")));
/// let mut root = TokenGroup::new();
/// root.insert("color", Node::Group(color));
///
/// let exporter = TokenExporter::new(Format::Css, ExportOptions::default().with_prefix("ds"));
/// let css = exporter.export(&TokenTree::new(root)).unwrap();
/// assert_eq!(css, ":root {\n  --ds-color-primary: #3b82f6;\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenExporter {
    format: Format,
    options: ExportOptions,
}

impl TokenExporter {
    /// Creates an exporter.
    pub fn new(format: Format, options: ExportOptions) -> Self {
        Self { format, options }
    }

    /// Output format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Export options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Output file name for `stem`, e.g. `tokens.css`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.format.extension())
    }

    fn prefix(&self) -> Option<&str> {
        self.options.prefix.as_deref()
    }

    fn css(&self, tree: &TokenTree) -> TokenResult<String> {
        let mut out = render(tree, CssRenderer::new(&self.options.selector, self.prefix()))?;
        if let Some(selector) = &self.options.dark_selector {
            let dark = TokenTree::new(generate_dark_theme(tree.root()));
            let rule = render(&dark, CssRenderer::new(selector, self.prefix()).colors_only())?;
            out.push('\n');
            out.push_str(&rule);
        }
        Ok(out)
    }
}

impl Exporter for TokenExporter {
    fn export(&self, tree: &TokenTree) -> TokenResult<String> {
        trace!(format = %self.format, tokens = tree.len(), "exporting");
        let text = match self.format {
            Format::Css => self.css(tree)?,
            Format::Scss => render(tree, ScssRenderer::new(self.prefix()))?,
            Format::Js => render(tree, JsRenderer::new(false))?,
            Format::Ts => render(tree, JsRenderer::new(true))?,
            Format::Json => render(tree, JsonRenderer::new())?,
        };
        debug!(format = %self.format, bytes = text.len(), "exported tokens");
        Ok(text)
    }
}

fn render<R: Renderer>(tree: &TokenTree, mut renderer: R) -> TokenResult<String> {
    walk(tree, &mut renderer)?;
    renderer.finish()
}

/// Exports `tree` in `format`.
pub fn export(tree: &TokenTree, format: Format, options: &ExportOptions) -> TokenResult<String> {
    TokenExporter::new(format, options.clone()).export(tree)
}

/// Exports the dark variant of `tree` in `format`.
///
/// See [`generate_dark_theme`] for how colors are derived.
pub fn export_dark(tree: &TokenTree, format: Format, options: &ExportOptions) -> TokenResult<String> {
    let dark = TokenTree::new(generate_dark_theme(tree.root()));
    export(&dark, format, options)
}
