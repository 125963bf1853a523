//! Media surface helpers
//!
//! Quick-access card overlays sit on arbitrary theme surfaces, so their
//! alpha values cannot be constants: the search below raises the alpha in
//! small steps until the composited overlay clears a minimum contrast
//! against the surface, or hits the alpha ceiling.

use ktheme_core::{
    composite_over, contrast_color, contrast_ratio, opacity, relative_luminance, Color, ColorError,
};

/// Tunable inputs for the quick-access alpha search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickAccessCardAlphaTokens {
    pub border_base: f64,
    pub chip_base: f64,
    pub dark_surface_boost: f64,
    pub light_surface_boost: f64,
    pub min_border_contrast: f64,
    pub min_chip_contrast: f64,
    pub max_alpha: f64,
    pub alpha_step: f64,
}

impl Default for QuickAccessCardAlphaTokens {
    fn default() -> Self {
        Self {
            border_base: 0.12,
            chip_base: 0.18,
            dark_surface_boost: 0.08,
            light_surface_boost: 0.04,
            min_border_contrast: 1.2,
            min_chip_contrast: 1.35,
            max_alpha: 0.5,
            alpha_step: 0.01,
        }
    }
}

/// Resolved overlay alphas for a quick-access card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickAccessCardAlphaValues {
    pub border: f64,
    pub chip: f64,
}

fn clamp_alpha(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn ensure_minimum_contrast(
    overlay_color: &Color,
    surface_color: &Color,
    initial_alpha: f64,
    min_contrast: f64,
    tokens: &QuickAccessCardAlphaTokens,
) -> Result<f64, ColorError> {
    let mut alpha = clamp_alpha(initial_alpha);
    let mut composite = composite_over(&Color::from(opacity(overlay_color, alpha)?), surface_color)?;
    let mut ratio = contrast_ratio(&Color::from(composite), surface_color)?;

    while ratio < min_contrast && alpha < tokens.max_alpha {
        alpha = clamp_alpha(alpha + tokens.alpha_step);
        composite = composite_over(&Color::from(opacity(overlay_color, alpha)?), surface_color)?;
        ratio = contrast_ratio(&Color::from(composite), surface_color)?;
    }

    Ok(alpha)
}

/// Luminance-aware overlay alphas for quick-access cards.
///
/// When no overlay color is given, the black/white contrast color of the
/// surface is used. Dark surfaces get a larger base boost than light ones.
pub fn quick_access_card_alphas(
    surface: &Color,
    overlay: Option<&Color>,
    tokens: QuickAccessCardAlphaTokens,
) -> Result<QuickAccessCardAlphaValues, ColorError> {
    let surface_luminance = relative_luminance(surface)?;
    let overlay_color = match overlay {
        Some(color) => color.clone(),
        None => contrast_color(surface)?,
    };

    let luminance_boost = if surface_luminance < 0.5 {
        tokens.dark_surface_boost
    } else {
        tokens.light_surface_boost
    };

    let border = ensure_minimum_contrast(
        &overlay_color,
        surface,
        tokens.border_base + luminance_boost,
        tokens.min_border_contrast,
        &tokens,
    )?;

    let chip = ensure_minimum_contrast(
        &overlay_color,
        surface,
        tokens.chip_base + luminance_boost,
        tokens.min_chip_contrast,
        &tokens,
    )?;

    Ok(QuickAccessCardAlphaValues { border, chip })
}

/// Media type colors for consistent UI accents.
pub mod media_type_colors {
    pub const BOOK: &str = "#4CAF50";
    pub const MOVIE: &str = "#2196F3";
    pub const MUSIC: &str = "#9C27B0";
    pub const TV_SHOW: &str = "#FF9800";
    pub const PODCAST: &str = "#F44336";
    pub const AUDIOBOOK: &str = "#009688";
    pub const COMIC: &str = "#FFEB3B";
    pub const RADIO: &str = "#00BCD4";
    pub const MAGAZINE: &str = "#3F51B5";
    pub const NEWS: &str = "#FFC107";
    pub const FANFICTION: &str = "#E91E63";
}

/// Accent color for a media type name. Unknown types fall back to the
/// book color.
pub fn media_type_color(media_type: &str) -> Color {
    use media_type_colors::*;

    let normalized: String = media_type
        .to_lowercase()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect();

    let hex = match normalized.as_str() {
        "book" | "ebook" => BOOK,
        "movie" => MOVIE,
        "music" | "musictrack" | "album" => MUSIC,
        "tvshow" | "tv" | "series" => TV_SHOW,
        "podcast" => PODCAST,
        "audiobook" => AUDIOBOOK,
        "comic" | "manga" => COMIC,
        "radio" => RADIO,
        "magazine" => MAGAZINE,
        "news" => NEWS,
        "fanfiction" => FANFICTION,
        _ => BOOK,
    };

    Color::hex(hex)
}
