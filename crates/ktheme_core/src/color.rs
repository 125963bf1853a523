//! Color representation, conversion and compositing
//!
//! Every color in a theme is either a hex string (`#RRGGBB`, plus `#RGB` /
//! `#RRGGBBAA` accepted by the validator) or a structured RGB(A) record.
//! All math normalizes to [`Rgba`] first: channels 0–255 as `f64` so that
//! darken/mix results keep sub-integer precision, alpha 0–1.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An RGB triple, channels 0–255.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// An RGBA quadruple, channels 0–255 and alpha 0–1.
///
/// The canonical form for all color math.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Drop the alpha channel.
    pub fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Rgba {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: 1.0,
        }
    }
}

/// A theme color: either a hex string or a structured RGB(A) record.
///
/// The untagged serde representation matches the shared theme JSON schema:
/// a color is serialized as `"#1A2645"` or `{"r":26,"g":38,"b":69}` /
/// `{"r":26,"g":38,"b":69,"a":0.8}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Hex(String),
    Structured {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<f64>,
    },
}

impl Color {
    /// A hex string color.
    pub fn hex(value: impl Into<String>) -> Self {
        Color::Hex(value.into())
    }

    /// A structured opaque RGB color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Structured { r, g, b, a: None }
    }

    /// A structured RGBA color.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color::Structured { r, g, b, a: Some(a) }
    }

    /// Normalize to the canonical RGBA form.
    ///
    /// Hex strings are parsed (6-digit only, see [`hex_to_rgb`]); structured
    /// colors without an alpha get `a = 1`.
    pub fn normalize(&self) -> Result<Rgba, ColorError> {
        match self {
            Color::Hex(hex) => hex_to_rgba(hex, 1.0),
            Color::Structured { r, g, b, a } => Ok(Rgba {
                r: *r,
                g: *g,
                b: *b,
                a: a.unwrap_or(1.0),
            }),
        }
    }

    /// Render as a CSS color value.
    ///
    /// Hex strings pass through unchanged; structured colors become
    /// `rgb(...)` or `rgba(...)` depending on alpha.
    pub fn to_css(&self) -> String {
        match self {
            Color::Hex(hex) => hex.clone(),
            Color::Structured { r, g, b, a } => match a {
                Some(a) if *a < 1.0 => format!("rgba({}, {}, {}, {})", r, g, b, a),
                _ => format!("rgb({}, {}, {})", r, g, b),
            },
        }
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::rgba(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::rgb(rgb.r, rgb.g, rgb.b)
    }
}

fn hex_pair_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex color pattern")
    })
}

fn any_hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
            .expect("hex validator pattern")
    })
}

/// Parse a 6-digit hex color into an RGB triple.
///
/// Only `RRGGBB` (with optional leading `#`) parses; anything else fails
/// with [`ColorError::MalformedHex`] naming the offending string.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let caps = hex_pair_re()
        .captures(hex)
        .ok_or_else(|| ColorError::MalformedHex(hex.to_string()))?;
    let channel = |i: usize| -> f64 {
        // The regex guarantees two hex digits per capture.
        u8::from_str_radix(&caps[i], 16).unwrap_or(0) as f64
    };
    Ok(Rgb {
        r: channel(1),
        g: channel(2),
        b: channel(3),
    })
}

fn to_hex_pair(n: f64) -> String {
    let v = n.round().clamp(0.0, 255.0) as u8;
    format!("{:02x}", v)
}

/// Encode an RGB triple as `#rrggbb`, each channel rounded to nearest.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{}{}{}",
        to_hex_pair(rgb.r),
        to_hex_pair(rgb.g),
        to_hex_pair(rgb.b)
    )
}

/// Parse a 6-digit hex color and attach the given alpha.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<Rgba, ColorError> {
    let rgb = hex_to_rgb(hex)?;
    Ok(Rgba {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
        a: alpha,
    })
}

/// Encode an RGBA quadruple as `#rrggbbaa`.
pub fn rgba_to_hex(rgba: Rgba) -> String {
    format!(
        "#{}{}{}{}",
        to_hex_pair(rgba.r),
        to_hex_pair(rgba.g),
        to_hex_pair(rgba.b),
        to_hex_pair(rgba.a * 255.0)
    )
}

/// Check whether a string looks like a hex color.
///
/// Accepts 3-, 6- and 8-digit forms with an optional leading `#`. Note the
/// deliberate asymmetry with [`hex_to_rgb`], which only consumes the
/// 6-digit form: 3- and 8-digit strings pass this validator but are not
/// accepted by the conversion path.
pub fn is_valid_hex(hex: &str) -> bool {
    any_hex_re().is_match(hex)
}

/// Multiplicatively darken a color by a percentage, floored at 0.
///
/// `percent` is not clamped here; callers own the range.
pub fn darken(color: &Color, percent: f64) -> Result<Rgba, ColorError> {
    let rgba = color.normalize()?;
    let factor = 1.0 - percent / 100.0;
    Ok(Rgba {
        r: (rgba.r * factor).max(0.0),
        g: (rgba.g * factor).max(0.0),
        b: (rgba.b * factor).max(0.0),
        a: rgba.a,
    })
}

/// Lighten a color by lerping each channel toward white, capped at 255.
///
/// `percent` is not clamped here; callers own the range.
pub fn lighten(color: &Color, percent: f64) -> Result<Rgba, ColorError> {
    let rgba = color.normalize()?;
    let factor = percent / 100.0;
    Ok(Rgba {
        r: (rgba.r + (255.0 - rgba.r) * factor).min(255.0),
        g: (rgba.g + (255.0 - rgba.g) * factor).min(255.0),
        b: (rgba.b + (255.0 - rgba.b) * factor).min(255.0),
        a: rgba.a,
    })
}

/// Replace a color's alpha, clamped to [0, 1].
pub fn opacity(color: &Color, alpha: f64) -> Result<Rgba, ColorError> {
    let rgba = color.normalize()?;
    Ok(Rgba {
        a: alpha.clamp(0.0, 1.0),
        ..rgba
    })
}

/// Linearly interpolate two colors per channel and per alpha.
///
/// `weight = 0` yields `color1`, `weight = 1` yields `color2`.
pub fn mix(color1: &Color, color2: &Color, weight: f64) -> Result<Rgba, ColorError> {
    let a = color1.normalize()?;
    let b = color2.normalize()?;
    Ok(Rgba {
        r: a.r * (1.0 - weight) + b.r * weight,
        g: a.g * (1.0 - weight) + b.g * weight,
        b: a.b * (1.0 - weight) + b.b * weight,
        a: a.a * (1.0 - weight) + b.a * weight,
    })
}

/// Composite a foreground color over a background (standard alpha-over).
///
/// A fully transparent result is returned as transparent black instead of
/// dividing by zero.
pub fn composite_over(foreground: &Color, background: &Color) -> Result<Rgba, ColorError> {
    let fg = foreground.normalize()?;
    let bg = background.normalize()?;

    let out_alpha = fg.a + bg.a * (1.0 - fg.a);
    if out_alpha == 0.0 {
        return Ok(Rgba::TRANSPARENT);
    }

    Ok(Rgba {
        r: (fg.r * fg.a + bg.r * bg.a * (1.0 - fg.a)) / out_alpha,
        g: (fg.g * fg.a + bg.g * bg.a * (1.0 - fg.a)) / out_alpha,
        b: (fg.b * fg.a + bg.b * bg.a * (1.0 - fg.a)) / out_alpha,
        a: out_alpha,
    })
}

/// WCAG 2.1 relative luminance.
pub fn relative_luminance(color: &Color) -> Result<f64, ColorError> {
    let rgba = color.normalize()?;
    let to_linear = |channel: f64| -> f64 {
        let normalized = channel / 255.0;
        if normalized <= 0.03928 {
            normalized / 12.92
        } else {
            ((normalized + 0.055) / 1.055).powf(2.4)
        }
    };

    Ok(0.2126 * to_linear(rgba.r) + 0.7152 * to_linear(rgba.g) + 0.0722 * to_linear(rgba.b))
}

/// WCAG contrast ratio between two colors. Symmetric in its arguments;
/// ranges from 1 (identical) to 21 (black on white).
pub fn contrast_ratio(color_a: &Color, color_b: &Color) -> Result<f64, ColorError> {
    let lum_a = relative_luminance(color_a)?;
    let lum_b = relative_luminance(color_b)?;
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Pick pure black or white text for a background.
///
/// Uses the simplified perceptual luminance (0.299/0.587/0.114), not the
/// WCAG formula above; the two can disagree on borderline backgrounds and
/// are kept separate on purpose.
pub fn contrast_color(background: &Color) -> Result<Color, ColorError> {
    let rgb = background.normalize()?;
    let luminance = (0.299 * rgb.r + 0.587 * rgb.g + 0.114 * rgb.b) / 255.0;
    Ok(if luminance > 0.5 {
        Color::hex("#000000")
    } else {
        Color::hex("#FFFFFF")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex_with_and_without_hash() {
        let rgb = hex_to_rgb("#1F93CB").unwrap();
        assert_eq!((rgb.r, rgb.g, rgb.b), (31.0, 147.0, 203.0));

        let bare = hex_to_rgb("1f93cb").unwrap();
        assert_eq!(bare, rgb);
    }

    #[test]
    fn rejects_malformed_hex_with_offending_string() {
        for bad in ["#FFF", "#12345", "#GGGGGG", "", "#12345678"] {
            let err = hex_to_rgb(bad).unwrap_err();
            assert_eq!(err, ColorError::MalformedHex(bad.to_string()));
            assert!(err.to_string().contains(bad) || bad.is_empty());
        }
    }

    #[test]
    fn validator_accepts_short_and_alpha_forms_parser_does_not() {
        assert!(is_valid_hex("#FFF"));
        assert!(is_valid_hex("#FFFFFF"));
        assert!(is_valid_hex("#FFFFFFAA"));
        assert!(!is_valid_hex("#FFFF"));

        assert!(hex_to_rgb("#FFF").is_err());
        assert!(hex_to_rgb("#FFFFFFAA").is_err());
    }

    #[test]
    fn hex_round_trip_zero_pads() {
        assert_eq!(
            rgb_to_hex(Rgb {
                r: 0.0,
                g: 10.0,
                b: 255.0
            }),
            "#000aff"
        );
        assert_eq!(
            rgba_to_hex(Rgba {
                r: 212.0,
                g: 175.0,
                b: 55.0,
                a: 0.5
            }),
            "#d4af3780"
        );
    }

    #[test]
    fn normalize_defaults_alpha_to_one() {
        let rgba = Color::rgb(10.0, 20.0, 30.0).normalize().unwrap();
        assert_eq!(rgba.a, 1.0);

        let hex = Color::hex("#0A141E").normalize().unwrap();
        assert_eq!((hex.r, hex.g, hex.b, hex.a), (10.0, 20.0, 30.0, 1.0));
    }

    #[test]
    fn darken_and_lighten_are_bounded() {
        let black = darken(&Color::hex("#102030"), 200.0).unwrap();
        assert_eq!((black.r, black.g, black.b), (0.0, 0.0, 0.0));

        let white = lighten(&Color::hex("#102030"), 100.0).unwrap();
        assert_eq!((white.r, white.g, white.b), (255.0, 255.0, 255.0));
    }

    #[test]
    fn mix_endpoints_return_inputs() {
        let a = Color::rgba(10.0, 20.0, 30.0, 1.0);
        let b = Color::rgba(110.0, 120.0, 130.0, 0.5);

        let at_zero = mix(&a, &b, 0.0).unwrap();
        assert_eq!(at_zero, a.normalize().unwrap());

        let at_one = mix(&a, &b, 1.0).unwrap();
        assert_eq!(at_one, b.normalize().unwrap());
    }

    #[test]
    fn opacity_clamps_alpha() {
        assert_eq!(opacity(&Color::hex("#000000"), 2.0).unwrap().a, 1.0);
        assert_eq!(opacity(&Color::hex("#000000"), -1.0).unwrap().a, 0.0);
    }

    #[test]
    fn composite_over_handles_fully_transparent_stack() {
        let fg = Color::rgba(255.0, 0.0, 0.0, 0.0);
        let bg = Color::rgba(0.0, 255.0, 0.0, 0.0);
        assert_eq!(composite_over(&fg, &bg).unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn composite_over_opaque_background() {
        let fg = Color::rgba(255.0, 255.0, 255.0, 0.5);
        let bg = Color::hex("#000000");
        let out = composite_over(&fg, &bg).unwrap();
        assert_eq!(out.a, 1.0);
        assert!((out.r - 127.5).abs() < 1e-9);
    }

    #[test]
    fn contrast_ratio_is_symmetric_and_spans_full_range() {
        let black = Color::hex("#000000");
        let white = Color::hex("#FFFFFF");

        assert_eq!(contrast_ratio(&black, &white).unwrap(), 21.0);
        assert_eq!(
            contrast_ratio(&black, &white).unwrap(),
            contrast_ratio(&white, &black).unwrap()
        );

        let gray = Color::hex("#777777");
        assert_eq!(contrast_ratio(&gray, &gray).unwrap(), 1.0);
    }

    #[test]
    fn contrast_color_flips_on_perceptual_midpoint() {
        assert_eq!(
            contrast_color(&Color::hex("#FFFFFF")).unwrap(),
            Color::hex("#000000")
        );
        assert_eq!(
            contrast_color(&Color::hex("#141414")).unwrap(),
            Color::hex("#FFFFFF")
        );
    }

    #[test]
    fn css_rendering_matches_wire_shapes() {
        assert_eq!(Color::hex("#D4AF37").to_css(), "#D4AF37");
        assert_eq!(Color::rgb(1.0, 2.0, 3.0).to_css(), "rgb(1, 2, 3)");
        assert_eq!(
            Color::rgba(1.0, 2.0, 3.0, 0.5).to_css(),
            "rgba(1, 2, 3, 0.5)"
        );
    }

    #[test]
    fn serde_wire_format_is_untagged() {
        let hex: Color = serde_json::from_str("\"#1A2645\"").unwrap();
        assert_eq!(hex, Color::hex("#1A2645"));

        let rgb: Color = serde_json::from_str(r#"{"r":26,"g":38,"b":69}"#).unwrap();
        assert_eq!(rgb, Color::rgb(26.0, 38.0, 69.0));

        let rgba: Color = serde_json::from_str(r#"{"r":26,"g":38,"b":69,"a":0.8}"#).unwrap();
        assert_eq!(rgba, Color::rgba(26.0, 38.0, 69.0, 0.8));

        assert_eq!(
            serde_json::to_string(&Color::rgb(1.0, 2.0, 3.0)).unwrap(),
            r#"{"r":1.0,"g":2.0,"b":3.0}"#
        );
    }
}
