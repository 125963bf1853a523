//! RGB ↔ HSL conversion
//!
//! Standard chroma/hue-sector algorithm. Hue is always normalized into
//! `[0, 360)` (negative inputs wrap positive); saturation and lightness are
//! percentages in `[0, 100]`.

use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, rgb_to_hex, Rgb};
use crate::error::ColorError;

/// HSL color: hue in degrees `[0, 360)`, saturation/lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Wrap a hue (possibly negative) into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Convert an RGB triple to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let mut h = 0.0;
    let mut s = 0.0;

    if delta != 0.0 {
        s = delta / (1.0 - (2.0 * l - 1.0).abs());

        h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
    }

    Hsl {
        h: normalize_hue(h),
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Convert an HSL color to RGB, each channel rounded to nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r_prime, g_prime, b_prime) = if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb {
        r: ((r_prime + m) * 255.0).round(),
        g: ((g_prime + m) * 255.0).round(),
        b: ((b_prime + m) * 255.0).round(),
    }
}

/// Parse a 6-digit hex color straight into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Ok(rgb_to_hsl(hex_to_rgb(hex)?))
}

/// Encode an HSL color as `#rrggbb`.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}
