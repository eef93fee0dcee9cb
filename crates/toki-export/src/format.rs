//! Output format selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use toki_core::TokenError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// CSS custom properties in a `:root` rule.
    Css,
    /// SCSS `$variables`.
    Scss,
    /// ES module exporting a nested object literal.
    Js,
    /// The `js` module with `as const` and a `Tokens` type.
    Ts,
    /// The canonical token document.
    Json,
}

impl Format {
    /// Every format, in documentation order.
    pub const ALL: [Format; 5] = [Format::Css, Format::Scss, Format::Js, Format::Ts, Format::Json];

    /// Short name, also the file extension.
    pub fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Js => "js",
            Self::Ts => "ts",
            Self::Json => "json",
        }
    }

    /// File extension without the dot.
    #[inline]
    pub fn extension(self) -> &'static str {
        self.name()
    }

    /// Detects the format from a file extension.
    ///
    /// Accepts the common long forms (`.mjs`, `.mts`) too.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("css") => Some(Self::Css),
            Some("scss") => Some(Self::Scss),
            Some("js") | Some("mjs") => Some(Self::Js),
            Some("ts") | Some("mts") => Some(Self::Ts),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

impl FromStr for Format {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| TokenError::unsupported_format(s))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
