//! Ktheme color core
//!
//! Single source of truth for color representation and conversion:
//!
//! - **Color model**: hex strings and structured RGB(A) records, normalized
//!   to a canonical RGBA form for all math
//! - **Conversions**: hex ↔ RGB(A) ↔ HSL, with lossless round trips
//! - **Compositing**: alpha-over compositing, mixing, darken/lighten
//! - **Accessibility math**: WCAG relative luminance and contrast ratios
//! - **Palette derivation**: analogous/triadic/split-complementary schemes
//!   and full seed-to-scheme generation
//!
//! # Quick Start
//!
//! ```
//! use ktheme_core::{contrast_ratio, Color};
//!
//! let bg = Color::hex("#0A1630");
//! let fg = Color::hex("#E8E3D8");
//! let ratio = contrast_ratio(&bg, &fg).unwrap();
//! assert!(ratio > 4.5);
//! ```

pub mod color;
pub mod error;
pub mod hsl;
pub mod palette;

pub use color::{
    composite_over, contrast_color, contrast_ratio, darken, hex_to_rgb, hex_to_rgba, is_valid_hex,
    lighten, mix, opacity, relative_luminance, rgb_to_hex, rgba_to_hex, Color, Rgb, Rgba,
};
pub use error::ColorError;
pub use hsl::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, normalize_hue, rgb_to_hsl, Hsl};
pub use palette::{
    adjust_hue, adjust_saturation, analogous_palette, complementary_color,
    generate_palette_from_seed, split_complementary_palette, triadic_palette, SeedPalette,
};
