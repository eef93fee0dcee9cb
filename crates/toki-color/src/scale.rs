//! Shade scales and hue-rotated palettes.

use indexmap::IndexMap;

use crate::hsl::rgb_to_hsl;
use crate::rgb::hex_to_rgb;

/// Default number of shades in a scale.
pub const DEFAULT_SHADE_COUNT: usize = 10;

/// Default number of colors in a palette.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Generates `count` lightness steps of `base`, keyed `"0"`, `"100"`, ...
///
/// Lightness runs evenly from 0 to 100 inclusive (rounded to whole percent)
/// with hue and saturation held at the base color's values. A single shade
/// sits at lightness 0. Returns an empty map if `base` is not a color.
///
/// # Example
///
/// ```rust
/// use toki_color::generate_shades;
///
/// let shades = generate_shades("#3B82F6", 10);
/// assert_eq!(shades.len(), 10);
/// assert_eq!(shades["0"], "#000000");
/// assert_eq!(shades["900"], "#ffffff");
/// ```
pub fn generate_shades(base: &str, count: usize) -> IndexMap<String, String> {
    let Some(rgb) = hex_to_rgb(base) else {
        return IndexMap::new();
    };
    let hsl = rgb_to_hsl(rgb);

    // `count` is caller input; never preallocate from it.
    let mut shades = IndexMap::new();
    for i in 0..count {
        let lightness = if count > 1 {
            (i as f64 / (count - 1) as f64 * 100.0).round()
        } else {
            0.0
        };
        shades.insert((i * 100).to_string(), hsl.with_lightness(lightness).to_hex());
    }

    shades
}

/// Generates `count` colors with hues `360 / count` degrees apart, starting at
/// the base hue, keeping saturation and lightness.
///
/// Returns `[base]` unchanged if `base` is not a color.
///
/// # Example
///
/// ```rust
/// use toki_color::generate_palette;
///
/// let palette = generate_palette("#ff0000", 3);
/// assert_eq!(palette, ["#ff0000", "#00ff00", "#0000ff"]);
/// assert_eq!(generate_palette("nope", 3), ["nope"]);
/// ```
pub fn generate_palette(base: &str, count: usize) -> Vec<String> {
    let Some(rgb) = hex_to_rgb(base) else {
        return vec![base.to_string()];
    };
    let hsl = rgb_to_hsl(rgb);

    let mut palette = Vec::new();
    for i in 0..count {
        let shift = i as f64 * 360.0 / count as f64;
        palette.push(hsl.with_hue((hsl.h + shift) % 360.0).to_hex());
    }
    palette
}
