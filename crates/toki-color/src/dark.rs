//! Dark variant derivation for token trees.

use toki_core::{Token, TokenGroup, TokenPath, TokenValue};

use crate::hsl::{Hsl, rgb_to_hsl};
use crate::rgb::hex_to_rgb;

/// Surfaces drop by this much lightness.
const SURFACE_SHIFT: f64 = 40.0;
/// Surfaces never go darker than this.
const SURFACE_FLOOR: f64 = 10.0;
/// Text rises by this much lightness.
const TEXT_SHIFT: f64 = 30.0;
/// Text never goes lighter than this.
const TEXT_CEILING: f64 = 90.0;

/// The role a color plays, inferred from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Surface,
    Text,
    Other,
}

impl Role {
    fn of(path: &TokenPath) -> Self {
        let full = path.to_string();
        if full.contains("background") || full.contains("surface") {
            Self::Surface
        } else if full.contains("text") {
            Self::Text
        } else {
            Self::Other
        }
    }

    fn shift(self, hsl: Hsl) -> Hsl {
        let l = match self {
            Self::Surface => (hsl.l - SURFACE_SHIFT).max(SURFACE_FLOOR),
            Self::Text => (hsl.l + TEXT_SHIFT).min(TEXT_CEILING),
            Self::Other => 100.0 - hsl.l,
        };
        hsl.with_lightness(l)
    }
}

/// Derives a dark variant of `group`.
///
/// Only tokens typed `color` with a literal color value change; the role is
/// matched against the token's full dotted path:
///
/// | path contains            | lightness              |
/// |--------------------------|------------------------|
/// | `background`, `surface`  | `l - 40`, at least 10  |
/// | `text`                   | `l + 30`, at most 90   |
/// | anything else            | `100 - l`              |
///
/// Structure, order and every other token are copied as-is.
///
/// # Example
///
/// ```rust
/// use toki_core::{Node, Token, TokenGroup, TokenPath};
/// use toki_color::generate_dark_theme;
///
/// let mut color = TokenGroup::new();
/// color.insert("accent", Node::Token(Token::color("#000000")));
/// let mut root = TokenGroup::new();
/// root.insert("color", Node::Group(color));
///
/// let dark = generate_dark_theme(&root);
/// let accent = dark.token(&TokenPath::parse("color.accent")).unwrap();
/// assert_eq!(accent.value.as_str(), Some("#ffffff"));
/// ```
pub fn generate_dark_theme(group: &TokenGroup) -> TokenGroup {
    group.map_tokens(|path, token| darken_token(path, token).unwrap_or_else(|| token.clone()))
}

fn darken_token(path: &TokenPath, token: &Token) -> Option<Token> {
    if !token.is_color() {
        return None;
    }
    let rgb = hex_to_rgb(token.value.as_str()?)?;
    let shifted = Role::of(path).shift(rgb_to_hsl(rgb));
    Some(Token {
        value: TokenValue::String(shifted.to_hex()),
        ..token.clone()
    })
}
