//! WCAG contrast and accessibility correction.
//!
//! # Formula
//!
//! ```text
//! linear(c) = c / 12.92                      if c <= 0.03928
//!           = ((c + 0.055) / 1.055) ^ 2.4    otherwise
//! L         = 0.2126 R + 0.7152 G + 0.0722 B
//! ratio     = (L_lighter + 0.05) / (L_darker + 0.05)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::hsl::rgb_to_hsl;
use crate::rgb::{Rgb, hex_to_rgb};

/// Iterations of the lightness search in [`find_accessible_color`].
const SEARCH_ITERATIONS: usize = 20;

/// WCAG conformance level for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WcagLevel {
    /// Minimum ratio 4.5:1.
    #[default]
    Aa,
    /// Minimum ratio 7:1.
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level.
    #[inline]
    pub fn threshold(self) -> f64 {
        match self {
            Self::Aa => 4.5,
            Self::Aaa => 7.0,
        }
    }
}

impl FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aa" => Ok(Self::Aa),
            "aaa" => Ok(Self::Aaa),
            _ => Err(format!("unknown WCAG level '{s}' (expected AA or AAA)")),
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

#[inline]
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// YIQ perceived brightness in [0, 255].
///
/// Cruder than luminance but matches the brightness-difference rule of
/// thumb (difference of at least 125 for body text, 50 as a floor).
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    (299.0 * f64::from(rgb.r) + 587.0 * f64::from(rgb.g) + 114.0 * f64::from(rgb.b)) / 1000.0
}

fn ratio_of(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors, in [1, 21].
///
/// Symmetric in its arguments. Returns `1.0` if either is not a color.
///
/// # Example
///
/// ```rust
/// use toki_color::contrast_ratio;
///
/// assert_eq!(contrast_ratio("#000000", "#ffffff"), 21.0);
/// assert_eq!(contrast_ratio("#3b82f6", "#3b82f6"), 1.0);
/// assert_eq!(contrast_ratio("#000000", "black"), 1.0);
/// ```
pub fn contrast_ratio(c1: &str, c2: &str) -> f64 {
    match (hex_to_rgb(c1), hex_to_rgb(c2)) {
        (Some(a), Some(b)) => ratio_of(a, b),
        _ => 1.0,
    }
}

/// Checks `fg` on `bg` against `level`.
#[inline]
pub fn is_accessible(fg: &str, bg: &str, level: WcagLevel) -> bool {
    contrast_ratio(fg, bg) >= level.threshold()
}

/// Adjusts the lightness of `fg` until it meets `level` on `bg`.
///
/// Hue and saturation stay fixed. The search runs a fixed number of
/// bisection steps over the half of the lightness axis that moves away from
/// the background (darker when `bg` is the more luminous color, lighter
/// otherwise) and returns the passing candidate closest to the original
/// lightness. If nothing passes, the highest-contrast candidate seen is
/// returned.
///
/// Only one direction is ever tried, so a pairing that can only be fixed by
/// crossing the background's lightness is not found.
///
/// `fg` is returned unchanged if it already passes or is not a color.
///
/// # Example
///
/// ```rust
/// use toki_color::{contrast_ratio, find_accessible_color, WcagLevel};
///
/// let fixed = find_accessible_color("#777777", "#ffffff", WcagLevel::Aa);
/// assert!(contrast_ratio(&fixed, "#ffffff") >= 4.5);
/// ```
pub fn find_accessible_color(fg: &str, bg: &str, level: WcagLevel) -> String {
    if is_accessible(fg, bg, level) {
        return fg.to_string();
    }
    let (Some(fg_rgb), Some(bg_rgb)) = (hex_to_rgb(fg), hex_to_rgb(bg)) else {
        return fg.to_string();
    };

    let target = level.threshold();
    let hsl = rgb_to_hsl(fg_rgb);
    let darker = relative_luminance(bg_rgb) > relative_luminance(fg_rgb);

    // `lo..hi` brackets the boundary; the passing side is the outer one.
    let (mut lo, mut hi) = if darker { (0.0, hsl.l) } else { (hsl.l, 100.0) };
    let mut passing: Option<(f64, Rgb)> = None;
    let mut strongest = (fg_rgb, ratio_of(fg_rgb, bg_rgb));

    for _ in 0..SEARCH_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let candidate = hsl.with_lightness(mid).to_rgb();
        let ratio = ratio_of(candidate, bg_rgb);

        if ratio > strongest.1 {
            strongest = (candidate, ratio);
        }

        if ratio >= target {
            let distance = (mid - hsl.l).abs();
            if passing.is_none_or(|(d, _)| distance < d) {
                passing = Some((distance, candidate));
            }
            if darker { lo = mid } else { hi = mid }
        } else if darker {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    passing.map_or(strongest.0, |(_, rgb)| rgb).to_hex()
}
