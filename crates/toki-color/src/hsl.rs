//! sRGB <-> HSL conversion.
//!
//! # Units
//!
//! - Hue: degrees, 0-359
//! - Saturation, lightness: percent, 0-100
//!
//! [`rgb_to_hsl`] rounds every component to a whole number; all derived-color
//! operations work on these rounded values. Rounding to whole degrees and
//! percent quantizes the space, so `hsl_to_rgb(rgb_to_hsl(c))` can drift from
//! `c` by up to 5 per channel for saturated colors (at most 1 for grays).
//! [`Hsl::from_rgb`] keeps full precision and round-trips within 1.
//!
//! # Formula
//!
//! ```text
//! l = (max + min) / 2
//! s = d / (2 - max - min)   if l > 0.5
//!     d / (max + min)       otherwise
//! h = sector of max, scaled to [0, 1)
//! ```

use crate::rgb::Rgb;

/// An HSL triple. Components may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Creates a triple.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Unrounded conversion from RGB.
    ///
    /// Achromatic colors (`max == min`) get hue and saturation 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Self::new(h * 360.0, s * 100.0, l * 100.0)
    }

    /// Rounds each component to a whole number, wrapping hue 360 to 0.
    pub fn rounded(self) -> Self {
        Self::new(
            self.h.round().rem_euclid(360.0),
            self.s.round(),
            self.l.round(),
        )
    }

    /// Returns a copy with lightness replaced.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Returns a copy with saturation replaced.
    #[inline]
    pub fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Returns a copy with hue replaced.
    #[inline]
    pub fn with_hue(self, h: f64) -> Self {
        Self { h, ..self }
    }

    /// Converts back to RGB. See [`hsl_to_rgb`].
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// Converts to a `#rrggbb` literal.
    #[inline]
    pub fn to_hex(self) -> String {
        hsl_to_rgb(self).to_hex()
    }
}

/// Converts RGB to HSL with whole-number components.
///
/// # Example
///
/// ```rust
/// use toki_color::{rgb_to_hsl, Hsl, Rgb};
///
/// assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0.0, 100.0, 50.0));
/// assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0.0, 0.0, 50.0));
/// ```
#[inline]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    Hsl::from_rgb(rgb).rounded()
}

/// Converts HSL to RGB, rounding channels to the nearest integer.
///
/// Hue wraps modulo 360. Saturation and lightness are expected in 0-100;
/// channels are clamped into 0-255.
///
/// # Example
///
/// ```rust
/// use toki_color::{hsl_to_rgb, Hsl, Rgb};
///
/// assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
/// assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), Rgb::WHITE);
/// ```
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

#[inline]
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
