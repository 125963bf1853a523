//! Palette derivation
//!
//! Harmonious color sets generated from a single seed: fixed hue-rotation
//! schemes (complementary, triadic, split-complementary), evenly-spread
//! analogous fans, and a full seed-to-scheme derivation with fixed
//! saturation/lightness offsets per role. All of it is deterministic:
//! the same seed always yields the same palette.

use crate::color::{contrast_color, darken, lighten, Color};
use crate::error::ColorError;
use crate::hsl::{hsl_to_hex, normalize_hue, rgb_to_hsl, Hsl};

fn color_to_hsl(color: &Color) -> Result<Hsl, ColorError> {
    Ok(rgb_to_hsl(color.normalize()?.rgb()))
}

/// Build an analogous palette around a seed color.
///
/// `count` hues (floored to a minimum of 2) evenly spaced across
/// `[h - spread, h + spread]`, saturation and lightness preserved.
pub fn analogous_palette(
    color: &Color,
    count: usize,
    spread: f64,
) -> Result<Vec<String>, ColorError> {
    let hsl = color_to_hsl(color)?;
    let total = count.max(2);
    let start = hsl.h - spread;
    let increment = (spread * 2.0) / (total - 1) as f64;

    Ok((0..total)
        .map(|index| {
            hsl_to_hex(Hsl {
                h: normalize_hue(start + increment * index as f64),
                ..hsl
            })
        })
        .collect())
}

/// The complementary color (hue rotated 180°).
pub fn complementary_color(color: &Color) -> Result<String, ColorError> {
    let hsl = color_to_hsl(color)?;
    Ok(hsl_to_hex(Hsl {
        h: normalize_hue(hsl.h + 180.0),
        ..hsl
    }))
}

/// Triadic palette: hue shifts of 0°, 120° and 240°.
pub fn triadic_palette(color: &Color) -> Result<Vec<String>, ColorError> {
    let hsl = color_to_hsl(color)?;
    Ok([0.0, 120.0, 240.0]
        .iter()
        .map(|shift| {
            hsl_to_hex(Hsl {
                h: normalize_hue(hsl.h + shift),
                ..hsl
            })
        })
        .collect())
}

/// Split-complementary palette: hue shifts of 0°, 150° and 210°.
pub fn split_complementary_palette(color: &Color) -> Result<Vec<String>, ColorError> {
    let hsl = color_to_hsl(color)?;
    Ok([0.0, 150.0, 210.0]
        .iter()
        .map(|shift| {
            hsl_to_hex(Hsl {
                h: normalize_hue(hsl.h + shift),
                ..hsl
            })
        })
        .collect())
}

/// Shift a color's saturation by `amount`, clamped to `[0, 100]`.
pub fn adjust_saturation(color: &Color, amount: f64) -> Result<String, ColorError> {
    let hsl = color_to_hsl(color)?;
    Ok(hsl_to_hex(Hsl {
        s: (hsl.s + amount).clamp(0.0, 100.0),
        ..hsl
    }))
}

/// Rotate a color's hue by `degrees`.
pub fn adjust_hue(color: &Color, degrees: f64) -> Result<String, ColorError> {
    let hsl = color_to_hsl(color)?;
    Ok(hsl_to_hex(Hsl {
        h: normalize_hue(hsl.h + degrees),
        ..hsl
    }))
}

/// A coherent color family derived from one seed color.
///
/// Covers the primary/secondary/tertiary on/container quads plus the
/// neutral surfaces; error/scrim/inverse roles stay with the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedPalette {
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub secondary_container: Color,
    pub on_secondary_container: Color,
    pub tertiary: Color,
    pub on_tertiary: Color,
    pub tertiary_container: Color,
    pub on_tertiary_container: Color,
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,
}

/// Generate a coherent partial color scheme from a single brand color.
pub fn generate_palette_from_seed(seed: &Color) -> Result<SeedPalette, ColorError> {
    let base = color_to_hsl(seed)?;
    let secondary = Color::hex(adjust_hue(seed, 30.0)?);
    let tertiary = Color::hex(adjust_hue(seed, -30.0)?);
    let surface = Color::hex(hsl_to_hex(Hsl {
        h: base.h,
        s: (base.s * 0.12).clamp(4.0, 16.0),
        l: 97.0,
    }));
    let surface_variant = Color::hex(hsl_to_hex(Hsl {
        h: base.h,
        s: (base.s * 0.2).clamp(8.0, 24.0),
        l: 92.0,
    }));
    let background = Color::hex(hsl_to_hex(Hsl {
        h: base.h,
        s: (base.s * 0.08).clamp(2.0, 12.0),
        l: 99.0,
    }));
    let on_surface = Color::hex(hsl_to_hex(Hsl {
        h: base.h,
        s: (base.s * 0.18).clamp(8.0, 24.0),
        l: 14.0,
    }));

    Ok(SeedPalette {
        primary: Color::hex(hsl_to_hex(Hsl {
            s: base.s.clamp(45.0, 90.0),
            l: 46.0,
            ..base
        })),
        on_primary: Color::hex(hsl_to_hex(Hsl {
            s: (base.s * 0.4).clamp(20.0, 40.0),
            l: 98.0,
            ..base
        })),
        primary_container: Color::hex(hsl_to_hex(Hsl {
            s: (base.s * 0.6).clamp(25.0, 60.0),
            l: 88.0,
            ..base
        })),
        on_primary_container: Color::hex(hsl_to_hex(Hsl {
            s: (base.s * 0.7).clamp(35.0, 75.0),
            l: 20.0,
            ..base
        })),
        on_secondary: contrast_color(&secondary)?,
        secondary_container: lighten(&secondary, 40.0)?.into(),
        on_secondary_container: darken(&secondary, 55.0)?.into(),
        secondary,
        on_tertiary: contrast_color(&tertiary)?,
        tertiary_container: lighten(&tertiary, 38.0)?.into(),
        on_tertiary_container: darken(&tertiary, 52.0)?.into(),
        tertiary,
        background,
        on_background: on_surface.clone(),
        surface,
        on_surface,
        surface_variant,
        on_surface_variant: Color::hex(hsl_to_hex(Hsl {
            h: base.h,
            s: (base.s * 0.2).clamp(8.0, 22.0),
            l: 30.0,
        })),
        outline: Color::hex(hsl_to_hex(Hsl {
            h: base.h,
            s: (base.s * 0.12).clamp(4.0, 16.0),
            l: 58.0,
        })),
        outline_variant: Color::hex(hsl_to_hex(Hsl {
            h: base.h,
            s: (base.s * 0.12).clamp(4.0, 16.0),
            l: 72.0,
        })),
    })
}
