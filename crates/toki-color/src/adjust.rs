//! Lightness and saturation adjustments on hex literals.
//!
//! `percent` is an absolute delta on the HSL channel (lightening `#808080`
//! by 10 moves lightness from 50 to 60), clamped to [0, 100]. Inputs that are
//! not colors come back unchanged.

use crate::hsl::{Hsl, rgb_to_hsl};
use crate::rgb::hex_to_rgb;

fn adjust(hex: &str, f: impl FnOnce(Hsl) -> Hsl) -> String {
    match hex_to_rgb(hex) {
        Some(rgb) => f(rgb_to_hsl(rgb)).to_hex(),
        None => hex.to_string(),
    }
}

/// Raises HSL lightness by `percent`.
///
/// # Example
///
/// ```rust
/// use toki_color::lighten;
///
/// assert_eq!(lighten("#000000", 100.0), "#ffffff");
/// assert_eq!(lighten("not-a-color", 10.0), "not-a-color");
/// ```
pub fn lighten(hex: &str, percent: f64) -> String {
    adjust(hex, |hsl| hsl.with_lightness((hsl.l + percent).clamp(0.0, 100.0)))
}

/// Lowers HSL lightness by `percent`.
pub fn darken(hex: &str, percent: f64) -> String {
    adjust(hex, |hsl| hsl.with_lightness((hsl.l - percent).clamp(0.0, 100.0)))
}

/// Raises HSL saturation by `percent`.
pub fn saturate(hex: &str, percent: f64) -> String {
    adjust(hex, |hsl| hsl.with_saturation((hsl.s + percent).clamp(0.0, 100.0)))
}

/// Lowers HSL saturation by `percent`.
pub fn desaturate(hex: &str, percent: f64) -> String {
    adjust(hex, |hsl| hsl.with_saturation((hsl.s - percent).clamp(0.0, 100.0)))
}
