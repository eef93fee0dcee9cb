//! Hex color literals and 8-bit RGB triples.
//!
//! The only accepted literal form is six hex digits with an optional leading
//! `#`, in any case. Shorthand (`#rgb`), alpha and named colors are not
//! colors as far as this crate is concerned.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red, 0-255.
    pub r: u8,
    /// Green, 0-255.
    pub g: u8,
    /// Blue, 0-255.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a triple.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex literal. See [`hex_to_rgb`].
    #[inline]
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex)
    }

    /// Canonical `#rrggbb` form.
    #[inline]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels normalized to [0, 1].
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex pattern is valid")
    })
}

/// Parses a `#rrggbb` literal (leading `#` optional, case-insensitive).
///
/// Returns `None` for anything else; callers treat `None` as "not a color".
///
/// # Example
///
/// ```rust
/// use toki_color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#3B82F6"), Some(Rgb::new(59, 130, 246)));
/// assert_eq!(hex_to_rgb("3b82f6"), Some(Rgb::new(59, 130, 246)));
/// assert_eq!(hex_to_rgb("#fff"), None);
/// assert_eq!(hex_to_rgb("red"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let caps = hex_regex().captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(caps.get(i)?.as_str(), 16).ok();
    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Formats channels as `#rrggbb`, rounding each to the nearest integer.
///
/// Clamping is the caller's job: values outside 0-255 produce digits
/// outside the two-per-channel grammar rather than a panic.
///
/// # Example
///
/// ```rust
/// use toki_color::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(255.0, 0.0, 127.6), "#ff0080");
/// assert_eq!(rgb_to_hex(0.0, 0.0, 0.0), "#000000");
/// ```
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |v: f64| format!("{:02x}", v.round() as i64);
    format!("#{}{}{}", channel(r), channel(g), channel(b))
}

/// Checks whether `text` is a color literal.
#[inline]
pub fn is_color(text: &str) -> bool {
    hex_regex().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(hex_to_rgb("#000000"), Some(Rgb::BLACK));
        assert_eq!(hex_to_rgb("FFFFFF"), Some(Rgb::WHITE));
        assert_eq!(hex_to_rgb("#aBcDeF"), Some(Rgb::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn parse_invalid() {
        for bad in ["", "#", "#fff", "#ffff", "#fffffff", "##ffffff", "#gggggg", " #ffffff", "#ffffff80", "blue"] {
            assert_eq!(hex_to_rgb(bad), None, "{bad:?} should not parse");
            assert!(!is_color(bad));
        }
    }

    #[test]
    fn format_is_lowercase_padded() {
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_string(), "#abcdef");
        assert_eq!(rgb_to_hex(10.4, 10.5, 10.6), "#0a0b0b");
    }

    #[test]
    fn out_of_range_does_not_panic() {
        let hex = rgb_to_hex(256.0, -1.0, 300.0);
        assert!(hex.starts_with("#100"));
    }

    #[test]
    fn hex_roundtrip_all_channels() {
        for v in 0..=255u8 {
            let rgb = Rgb::new(v, 255 - v, v / 2);
            assert_eq!(hex_to_rgb(&rgb.to_hex()), Some(rgb));
            assert_eq!(
                rgb_to_hex(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)),
                rgb.to_hex()
            );
        }
    }
}
