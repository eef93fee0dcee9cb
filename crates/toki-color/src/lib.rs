//! # toki-color
//!
//! Color engine for design tokens.
//!
//! Pure functions over `#rrggbb` literals: format conversion, derived colors,
//! and WCAG accessibility checks. Nothing here does I/O or returns errors;
//! a bad input yields `None`, a neutral value, or the input unchanged.
//!
//! # Operations
//!
//! | Area        | Functions |
//! |-------------|-----------|
//! | Conversion  | [`hex_to_rgb`], [`rgb_to_hex`], [`rgb_to_hsl`], [`hsl_to_rgb`] |
//! | Adjustment  | [`lighten`], [`darken`], [`saturate`], [`desaturate`] |
//! | Generation  | [`generate_shades`], [`generate_palette`], [`generate_dark_theme`] |
//! | Contrast    | [`contrast_ratio`], [`is_accessible`], [`find_accessible_color`] |
//!
//! # Quick Start
//!
//! ```rust
//! use toki_color::{contrast_ratio, darken, hex_to_rgb, Rgb};
//!
//! assert_eq!(hex_to_rgb("#3b82f6"), Some(Rgb::new(59, 130, 246)));
//! let deep = darken("#3b82f6", 20.0);
//! assert!(contrast_ratio(&deep, "#ffffff") > contrast_ratio("#3b82f6", "#ffffff"));
//! ```
//!
//! # Dependencies
//!
//! - [`toki_core`] - token tree types, for dark theme derivation
//! - [`indexmap`] - ordered shade maps
//! - [`regex`] - the hex literal grammar

#![warn(missing_docs)]
#![warn(clippy::all)]

mod adjust;
mod contrast;
mod dark;
mod hsl;
mod rgb;
mod scale;

pub use adjust::{darken, desaturate, lighten, saturate};
pub use contrast::{
    WcagLevel, contrast_ratio, find_accessible_color, is_accessible, perceived_brightness,
    relative_luminance,
};
pub use dark::generate_dark_theme;
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use rgb::{Rgb, hex_to_rgb, is_color, rgb_to_hex};
pub use scale::{DEFAULT_PALETTE_SIZE, DEFAULT_SHADE_COUNT, generate_palette, generate_shades};
