//! Preset themes
//!
//! The built-in catalog: three metallic dark themes, a paper-white reading
//! theme, a slate dashboard theme and a glassy aqua theme. Every preset is
//! a complete, valid `Theme`.

use ktheme_core::Color;

use crate::adaptation::AdaptationPreset;
use crate::engine::iso_now;
use crate::types::{
    AnimationEffect, BlendMode, BlurEffect, ColorScheme, CornerTokens, DensityTokens,
    DesignTokens, Easing, FontSizeScale, FontWeightScale, GradientEffect, GradientStop,
    MetallicEffect, MetallicVariant, OverlayEffect, ReducedMotionPolicy, SemanticRoles,
    ShadowEffect, ShimmerEffect, Theme, ThemeMetadata, TransitionEffect, Typography,
    VisualEffects,
};

fn c(hex: &str) -> Option<Color> {
    Some(Color::hex(hex))
}

fn metadata(id: &str, name: &str, description: &str, tags: &[&str]) -> ThemeMetadata {
    let now = iso_now();
    ThemeMetadata {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        author: "Ktheme".to_string(),
        version: "1.0.0".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        created_at: now.clone(),
        updated_at: now,
    }
}

fn system_typography() -> Typography {
    Typography {
        font_family: "system-ui, -apple-system, sans-serif".to_string(),
        font_size: FontSizeScale {
            small: 12.0,
            medium: 16.0,
            large: 20.0,
            xlarge: 28.0,
        },
        font_weight: FontWeightScale {
            light: 300.0,
            regular: 400.0,
            medium: 500.0,
            bold: 700.0,
        },
        line_height: 1.5,
        letter_spacing: 0.0,
    }
}

/// Navy Gold: elegant navy background with luxurious gold metallic
/// accents.
pub fn navy_gold_theme() -> Theme {
    Theme {
        metadata: metadata(
            "navy-gold",
            "Navy Gold",
            "Elegant navy background with luxurious gold metallic accents",
            &["metallic", "elegant", "dark"],
        ),
        dark_mode: true,
        color_scheme: Some(ColorScheme {
            primary: c("#D4AF37"),
            on_primary: c("#0A1630"),
            primary_container: c("#856D34"),
            on_primary_container: c("#FFF8DC"),

            secondary: c("#4A90E2"),
            on_secondary: c("#FFFFFF"),
            secondary_container: c("#2C5F9E"),
            on_secondary_container: c("#E3F2FD"),

            tertiary: c("#9C8970"),
            on_tertiary: c("#FFFFFF"),
            tertiary_container: c("#6B5D4F"),
            on_tertiary_container: c("#F5E6D3"),

            error: c("#CF6679"),
            on_error: c("#FFFFFF"),
            error_container: c("#93000A"),
            on_error_container: c("#FFDAD6"),

            background: c("#0A1630"),
            on_background: c("#E8E3D8"),
            surface: c("#1A2645"),
            on_surface: c("#E8E3D8"),
            surface_variant: c("#2A3655"),
            on_surface_variant: c("#C9C4B9"),

            outline: c("#938F84"),
            outline_variant: c("#44483E"),

            scrim: c("#000000"),
            inverse_surface: c("#E8E3D8"),
            inverse_on_surface: c("#0A1630"),
            inverse_primary: c("#6D5D28"),

            state_layers: None,
            semantic_roles: None,
        }),
        effects: Some(VisualEffects {
            metallic: Some(MetallicEffect {
                enabled: true,
                variant: MetallicVariant::GoldRoyalBlue,
                gradient: MetallicVariant::GoldRoyalBlue.gradient(),
                intensity: 0.8,
            }),
            shadows: Some(ShadowEffect {
                enabled: true,
                elevation: 4.0,
                blur: 8.0,
                color: Color::hex("#00000066"),
            }),
            shimmer: Some(ShimmerEffect {
                enabled: true,
                speed: 3.0,
                intensity: 0.6,
                angle: 135.0,
            }),
            ..Default::default()
        }),
        typography: Some(system_typography()),
        ..Default::default()
    }
}

/// Emerald Silver: rich emerald green with elegant silver metallic
/// accents.
pub fn emerald_silver_theme() -> Theme {
    Theme {
        metadata: metadata(
            "emerald-silver",
            "Emerald Silver",
            "Rich emerald green with elegant silver metallic accents",
            &["metallic", "nature", "dark"],
        ),
        dark_mode: true,
        color_scheme: Some(ColorScheme {
            primary: c("#C0C0C0"),
            on_primary: c("#0D3B2E"),
            primary_container: c("#505050"),
            on_primary_container: c("#F5F5F5"),

            secondary: c("#50C878"),
            on_secondary: c("#FFFFFF"),
            secondary_container: c("#2E7D5A"),
            on_secondary_container: c("#D5F4E6"),

            tertiary: c("#8BA888"),
            on_tertiary: c("#FFFFFF"),
            tertiary_container: c("#5D7A5A"),
            on_tertiary_container: c("#E8F5E8"),

            error: c("#CF6679"),
            on_error: c("#FFFFFF"),
            error_container: c("#93000A"),
            on_error_container: c("#FFDAD6"),

            background: c("#0D3B2E"),
            on_background: c("#E8F5E8"),
            surface: c("#1A5544"),
            on_surface: c("#E8F5E8"),
            surface_variant: c("#2A6554"),
            on_surface_variant: c("#C9E4D9"),

            outline: c("#8A9E94"),
            outline_variant: c("#3E4E44"),

            scrim: c("#000000"),
            inverse_surface: c("#E8F5E8"),
            inverse_on_surface: c("#0D3B2E"),
            inverse_primary: c("#6B6B6B"),

            state_layers: None,
            semantic_roles: None,
        }),
        effects: Some(VisualEffects {
            metallic: Some(MetallicEffect {
                enabled: true,
                variant: MetallicVariant::Silver,
                gradient: MetallicVariant::Silver.gradient(),
                intensity: 0.7,
            }),
            shadows: Some(ShadowEffect {
                enabled: true,
                elevation: 3.0,
                blur: 6.0,
                color: Color::hex("#00000055"),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Rose Gold: warm and elegant rose gold with burgundy undertones.
pub fn rose_gold_theme() -> Theme {
    Theme {
        metadata: metadata(
            "rose-gold",
            "Rose Gold",
            "Warm and elegant rose gold with burgundy undertones",
            &["metallic", "warm", "elegant", "dark"],
        ),
        dark_mode: true,
        color_scheme: Some(ColorScheme {
            primary: c("#B76E79"),
            on_primary: c("#3D1F2B"),
            primary_container: c("#7D4A52"),
            on_primary_container: c("#F5D5D8"),

            secondary: c("#D4A5A5"),
            on_secondary: c("#442929"),
            secondary_container: c("#8C6969"),
            on_secondary_container: c("#F5E5E5"),

            tertiary: c("#C9A9A9"),
            on_tertiary: c("#3D2929"),
            tertiary_container: c("#8A7474"),
            on_tertiary_container: c("#F5EAEA"),

            error: c("#FFB4AB"),
            on_error: c("#690005"),
            error_container: c("#93000A"),
            on_error_container: c("#FFDAD6"),

            background: c("#3D1F2B"),
            on_background: c("#F5E5E8"),
            surface: c("#4D2F3B"),
            on_surface: c("#F5E5E8"),
            surface_variant: c("#5D3F4B"),
            on_surface_variant: c("#E5D5D8"),

            outline: c("#9E8A8E"),
            outline_variant: c("#4E3A3E"),

            scrim: c("#000000"),
            inverse_surface: c("#F5E5E8"),
            inverse_on_surface: c("#3D1F2B"),
            inverse_primary: c("#8A5A64"),

            state_layers: None,
            semantic_roles: None,
        }),
        effects: Some(VisualEffects {
            metallic: Some(MetallicEffect {
                enabled: true,
                variant: MetallicVariant::RoseGold,
                gradient: MetallicVariant::RoseGold.gradient(),
                intensity: 0.75,
            }),
            shadows: Some(ShadowEffect {
                enabled: true,
                elevation: 2.0,
                blur: 4.0,
                color: Color::hex("#00000044"),
            }),
            shimmer: Some(ShimmerEffect {
                enabled: true,
                speed: 4.0,
                intensity: 0.5,
                angle: 120.0,
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Paper Ink: paper-white surfaces and high-legibility ink text for
/// long-form reading.
pub fn paper_ink_theme() -> Theme {
    Theme {
        metadata: metadata(
            "paper-ink",
            "Paper Ink",
            "Calm paper-white surfaces with high-legibility ink text",
            &["light", "minimal", "readability"],
        ),
        dark_mode: false,
        color_scheme: Some(ColorScheme {
            primary: c("#1F2937"),
            on_primary: c("#F9FAFB"),
            primary_container: c("#E5E7EB"),
            on_primary_container: c("#111827"),

            secondary: c("#6B7280"),
            on_secondary: c("#FFFFFF"),
            secondary_container: c("#F3F4F6"),
            on_secondary_container: c("#1F2937"),

            tertiary: c("#92400E"),
            on_tertiary: c("#FFFFFF"),
            tertiary_container: c("#FEF3C7"),
            on_tertiary_container: c("#78350F"),

            error: c("#B3261E"),
            on_error: c("#FFFFFF"),
            error_container: c("#F9DEDC"),
            on_error_container: c("#410E0B"),

            background: c("#FDFCF8"),
            on_background: c("#1F2937"),
            surface: c("#FAF9F4"),
            on_surface: c("#1F2937"),
            surface_variant: c("#EFEDE6"),
            on_surface_variant: c("#4B5563"),

            outline: c("#9CA3AF"),
            outline_variant: c("#D1D5DB"),

            scrim: c("#000000"),
            inverse_surface: c("#1F2937"),
            inverse_on_surface: c("#F9FAFB"),
            inverse_primary: c("#D1D5DB"),

            state_layers: None,
            semantic_roles: None,
        }),
        effects: None,
        typography: Some(Typography {
            line_height: 1.6,
            ..Typography::default()
        }),
        tokens: Some(DesignTokens {
            density: Some(DensityTokens {
                scale: 1.0,
                base_spacing: 8.0,
            }),
            corners: Some(CornerTokens {
                small: 4.0,
                medium: 8.0,
                large: 12.0,
                xlarge: Some(16.0),
            }),
        }),
        ..Default::default()
    }
}

/// Slate Cyan: cool slate surfaces with cyan accents for focused
/// dashboards.
pub fn slate_cyan_theme() -> Theme {
    Theme {
        metadata: metadata(
            "slate-cyan",
            "Slate Cyan",
            "Cool slate surfaces with cyan accents for focused dashboards",
            &["dark", "cool", "dashboard"],
        ),
        dark_mode: true,
        color_scheme: Some(ColorScheme {
            primary: c("#22D3EE"),
            on_primary: c("#083344"),
            primary_container: c("#155E6B"),
            on_primary_container: c("#CFFAFE"),

            secondary: c("#94A3B8"),
            on_secondary: c("#0F172A"),
            secondary_container: c("#334155"),
            on_secondary_container: c("#E2E8F0"),

            tertiary: c("#818CF8"),
            on_tertiary: c("#1E1B4B"),
            tertiary_container: c("#3730A3"),
            on_tertiary_container: c("#E0E7FF"),

            error: c("#F87171"),
            on_error: c("#450A0A"),
            error_container: c("#7F1D1D"),
            on_error_container: c("#FEE2E2"),

            background: c("#0F172A"),
            on_background: c("#E2E8F0"),
            surface: c("#1E293B"),
            on_surface: c("#E2E8F0"),
            surface_variant: c("#334155"),
            on_surface_variant: c("#CBD5E1"),

            outline: c("#64748B"),
            outline_variant: c("#475569"),

            scrim: c("#000000"),
            inverse_surface: c("#E2E8F0"),
            inverse_on_surface: c("#0F172A"),
            inverse_primary: c("#0E7490"),

            state_layers: None,
            semantic_roles: Some(SemanticRoles {
                success: c("#34D399"),
                on_success: c("#022C22"),
                warning: c("#FBBF24"),
                on_warning: c("#451A03"),
                info: c("#38BDF8"),
                on_info: c("#082F49"),
                ..Default::default()
            }),
        }),
        effects: Some(VisualEffects {
            shadows: Some(ShadowEffect {
                enabled: true,
                elevation: 3.0,
                blur: 8.0,
                color: Color::hex("#00000066"),
            }),
            transitions: Some(TransitionEffect {
                enabled: true,
                duration: 180.0,
                properties: vec![
                    "background-color".to_string(),
                    "color".to_string(),
                    "box-shadow".to_string(),
                ],
            }),
            ..Default::default()
        }),
        typography: Some(system_typography()),
        ..Default::default()
    }
}

/// Frutiger Aero: glossy aqua gradients and translucent panels.
pub fn frutiger_aero_theme() -> Theme {
    Theme {
        metadata: metadata(
            "frutiger-aero",
            "Frutiger Aero",
            "Glossy aqua gradients and translucent panels",
            &["light", "glass", "retro"],
        ),
        dark_mode: false,
        color_scheme: Some(ColorScheme {
            primary: c("#0369A1"),
            on_primary: c("#FFFFFF"),
            primary_container: c("#BAE6FD"),
            on_primary_container: c("#082F49"),

            secondary: c("#047857"),
            on_secondary: c("#FFFFFF"),
            secondary_container: c("#D1FAE5"),
            on_secondary_container: c("#064E3B"),

            tertiary: c("#7C3AED"),
            on_tertiary: c("#FFFFFF"),
            tertiary_container: c("#EDE9FE"),
            on_tertiary_container: c("#4C1D95"),

            error: c("#B91C1C"),
            on_error: c("#FFFFFF"),
            error_container: c("#FEE2E2"),
            on_error_container: c("#450A0A"),

            background: c("#EFF8FC"),
            on_background: c("#0C3247"),
            surface: c("#E3F2FB"),
            on_surface: c("#0C3247"),
            surface_variant: c("#CFE8F6"),
            on_surface_variant: c("#1E4B63"),

            outline: c("#6FA8C4"),
            outline_variant: c("#A8CCDF"),

            scrim: c("#000000"),
            inverse_surface: c("#123B52"),
            inverse_on_surface: c("#E8F5FC"),
            inverse_primary: c("#7DD3FC"),

            state_layers: None,
            semantic_roles: None,
        }),
        effects: Some(VisualEffects {
            blur: Some(BlurEffect {
                enabled: true,
                radius: 14.0,
            }),
            gradients: Some(GradientEffect {
                enabled: true,
                angle: 120.0,
                stops: vec![
                    GradientStop {
                        offset: 0.0,
                        color: Color::hex("#BDE7FF"),
                    },
                    GradientStop {
                        offset: 1.0,
                        color: Color::hex("#E8FBF0"),
                    },
                ],
            }),
            shimmer: Some(ShimmerEffect {
                enabled: true,
                speed: 5.0,
                intensity: 0.25,
                angle: 120.0,
            }),
            overlays: Some(OverlayEffect {
                enabled: true,
                color: Color::hex("#BBDDF5"),
                opacity: 0.2,
                blend_mode: Some(BlendMode::Screen),
            }),
            animations: Some(AnimationEffect {
                enabled: true,
                duration: 220.0,
                easing: Easing::EaseOut,
                reduced_motion_policy: Some(ReducedMotionPolicy::Reduce),
            }),
            ..Default::default()
        }),
        adaptation: Some(AdaptationPreset::FrutigerAero.adaptation()),
        ..Default::default()
    }
}

/// The full preset catalog, in display order.
pub fn preset_themes() -> Vec<Theme> {
    vec![
        navy_gold_theme(),
        emerald_silver_theme(),
        rose_gold_theme(),
        paper_ink_theme(),
        slate_cyan_theme(),
        frutiger_aero_theme(),
    ]
}
