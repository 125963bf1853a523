//! Expansion packs
//!
//! Named, composable theme transformations applied as pure
//! `Theme -> Theme` functions. A pack never mutates its input: it clones,
//! appends provenance tags (`expansion-pack` plus the pack id) and an
//! idempotent " · Label" name suffix, then layers its changes on top.
//!
//! The implemented pack set must exactly match the planned set in
//! [`crate::strategy::EXPANSION_PACK_PLANS`]; the registry initializer
//! asserts coverage before any pack is applied.

use std::sync::OnceLock;

use indexmap::IndexMap;
use ktheme_core::{darken, lighten, mix, opacity, Color};
use rustc_hash::FxHashMap;

use crate::engine::iso_now;
use crate::error::ThemeError;
use crate::strategy::EXPANSION_PACK_PLANS;
use crate::types::{
    AnimationEffect, BlendMode, BlurEffect, ColorScheme, ComponentOverride, CornerStyle,
    CornerTokens, Density, DensityTokens, DesignTokens, Easing, FocusRingEffect, GradientEffect,
    GradientStop, IconAdaptation, IconCorner, IconFamily, IconStyle, LayoutAdaptation,
    NavigationStyle, OverlayEffect, PanelStyle, ReducedMotionPolicy, SemanticRoles, ShimmerEffect,
    StyleValue, Theme, ThemeAdaptation, TransitionEffect, Typography,
};

/// An implemented expansion pack.
pub struct ExpansionPack {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    apply: fn(&Theme) -> Result<Theme, ThemeError>,
}

impl ExpansionPack {
    /// Apply this pack to a theme, returning the transformed clone.
    pub fn apply(&self, theme: &Theme) -> Result<Theme, ThemeError> {
        (self.apply)(theme)
    }
}

fn required_color(theme: &Theme, role: &str) -> Result<Color, ThemeError> {
    theme
        .color_scheme
        .as_ref()
        .and_then(|scheme| scheme.role(role))
        .cloned()
        .ok_or_else(|| ThemeError::InvalidTheme {
            errors: vec![format!("Missing required color: {role}")],
        })
}

/// Semantic roles with every baseline pair filled, preserving values the
/// theme already declares.
fn ensure_semantic_roles(theme: &Theme) -> SemanticRoles {
    let existing = theme
        .color_scheme
        .as_ref()
        .and_then(|scheme| scheme.semantic_roles.clone())
        .unwrap_or_default();

    SemanticRoles {
        success: existing.success.or_else(|| Some(Color::hex("#1B7F47"))),
        on_success: existing.on_success.or_else(|| Some(Color::hex("#FFFFFF"))),
        warning: existing.warning.or_else(|| Some(Color::hex("#A66200"))),
        on_warning: existing.on_warning.or_else(|| Some(Color::hex("#FFFFFF"))),
        info: existing.info.or_else(|| Some(Color::hex("#1A73E8"))),
        on_info: existing.on_info.or_else(|| Some(Color::hex("#FFFFFF"))),
        ..existing
    }
}

fn append_metadata_label(name: &mut String, label: &str) {
    let suffix = format!(" · {label}");
    if !name.ends_with(&suffix) {
        name.push_str(&suffix);
    }
}

/// Clone the theme and stamp pack provenance: tags, name suffix,
/// updated timestamp.
fn base_expansion(theme: &Theme, id: &str, label: &str) -> Theme {
    let mut next = theme.clone();
    for tag in ["expansion-pack", id] {
        if !next.metadata.tags.iter().any(|existing| existing == tag) {
            next.metadata.tags.push(tag.to_string());
        }
    }
    append_metadata_label(&mut next.metadata.name, label);
    next.metadata.updated_at = iso_now();
    next
}

fn scheme_mut(theme: &mut Theme) -> &mut ColorScheme {
    theme.color_scheme.get_or_insert_with(ColorScheme::default)
}

fn domain_packs(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "domain-packs", "Domain");
    let primary = required_color(theme, "primary")?;
    let on_primary = required_color(theme, "onPrimary")?;

    let roles = ensure_semantic_roles(&next);
    scheme_mut(&mut next).semantic_roles = Some(SemanticRoles {
        success: Some(Color::hex("#117A45")),
        on_success: Some(Color::hex("#FFFFFF")),
        success_container: Some(Color::hex("#D7F7E6")),
        on_success_container: Some(Color::hex("#002111")),
        warning: Some(Color::hex("#A05A00")),
        on_warning: Some(Color::hex("#FFFFFF")),
        warning_container: Some(Color::hex("#FFE3BF")),
        on_warning_container: Some(Color::hex("#2F1600")),
        info: Some(primary),
        on_info: Some(on_primary),
        ..roles
    });

    let adaptation = next.adaptation.get_or_insert_with(ThemeAdaptation::default);
    adaptation.layout = Some(LayoutAdaptation {
        density: Density::Compact,
        corner_style: CornerStyle::Rounded,
        spacing_scale: 0.95,
        panel_style: Some(PanelStyle::Elevated),
        navigation_style: Some(NavigationStyle::Rail),
    });

    Ok(next)
}

fn localization_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "localization-pack", "Localization");

    let mut typography = next.typography.clone().unwrap_or_default();
    typography.font_family =
        "Inter, Noto Sans, Noto Sans Arabic, Noto Sans CJK, system-ui, sans-serif".to_string();
    typography.line_height = 1.58;
    next.typography = Some(typography);

    let adaptation = next.adaptation.get_or_insert_with(ThemeAdaptation::default);
    adaptation.component_overrides.push(ComponentOverride {
        selector: "[dir=\"rtl\"] .layout-flow".to_string(),
        styles: styles(&[("direction", StyleValue::Text("rtl".to_string()))]),
    });
    adaptation.component_overrides.push(ComponentOverride {
        selector: ".localized-copy".to_string(),
        styles: styles(&[
            ("word-break", StyleValue::Text("keep-all".to_string())),
            ("line-break", StyleValue::Text("strict".to_string())),
        ]),
    });

    Ok(next)
}

fn accessibility_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "accessibility-pack", "A11y");
    let primary = required_color(theme, "primary")?;

    let scheme = scheme_mut(&mut next);
    scheme.on_primary = Some(Color::hex("#FFFFFF"));
    scheme.on_secondary = Some(Color::hex("#FFFFFF"));
    scheme.on_tertiary = Some(Color::hex("#FFFFFF"));

    let effects = next.effects.get_or_insert_with(Default::default);
    effects.focus_ring = Some(FocusRingEffect {
        enabled: true,
        color: Color::from(mix(&primary, &Color::hex("#FFFFFF"), 0.25)?),
        width: 3.0,
        offset: 2.0,
    });

    let tokens = next.tokens.get_or_insert_with(DesignTokens::default);
    tokens.density = Some(DensityTokens {
        scale: 1.08,
        base_spacing: 8.0,
    });

    Ok(next)
}

fn motion_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "motion-pack", "Motion");

    let effects = next.effects.get_or_insert_with(Default::default);
    effects.animations = Some(AnimationEffect {
        enabled: true,
        duration: 240.0,
        easing: Easing::EaseInOut,
        reduced_motion_policy: Some(ReducedMotionPolicy::Reduce),
    });
    effects.transitions = Some(TransitionEffect {
        enabled: true,
        duration: 180.0,
        properties: vec![
            "background-color".to_string(),
            "color".to_string(),
            "transform".to_string(),
            "box-shadow".to_string(),
        ],
    });

    Ok(next)
}

fn data_viz_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "data-viz-pack", "Data Viz");
    let surface = required_color(theme, "surface")?;

    let roles = ensure_semantic_roles(&next);
    scheme_mut(&mut next).semantic_roles = Some(SemanticRoles {
        success: Some(Color::hex("#1C8E4A")),
        on_success: Some(Color::hex("#FFFFFF")),
        warning: Some(Color::hex("#B96A00")),
        on_warning: Some(Color::hex("#FFFFFF")),
        info: Some(Color::hex("#1A73E8")),
        on_info: Some(Color::hex("#FFFFFF")),
        critical: Some(Color::hex("#D93025")),
        on_critical: Some(Color::hex("#FFFFFF")),
        ..roles
    });

    let effects = next.effects.get_or_insert_with(Default::default);
    effects.overlays = Some(OverlayEffect {
        enabled: true,
        color: Color::from(opacity(&surface, 0.72)?),
        opacity: 0.22,
        blend_mode: Some(BlendMode::Overlay),
    });

    Ok(next)
}

fn email_docs_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "email-docs-pack", "Email + Docs");
    let surface = required_color(theme, "surface")?;
    let on_surface = required_color(theme, "onSurface")?;

    let mut typography = next.typography.clone().unwrap_or(Typography {
        line_height: 1.6,
        ..Typography::default()
    });
    typography.font_family = "Source Serif 4, Georgia, Times New Roman, serif".to_string();
    typography.line_height = 1.72;
    typography.letter_spacing = 0.1;
    next.typography = Some(typography);

    let scheme = scheme_mut(&mut next);
    scheme.surface = Some(Color::from(lighten(&surface, 8.0)?));
    scheme.on_surface = Some(Color::from(darken(&on_surface, 12.0)?));

    Ok(next)
}

fn seasonal_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "seasonal-pack", "Campaign");
    let primary = required_color(theme, "primary")?;
    let tertiary = required_color(theme, "tertiary")?;

    let effects = next.effects.get_or_insert_with(Default::default);
    effects.gradients = Some(GradientEffect {
        enabled: true,
        angle: 135.0,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Color::from(opacity(&primary, 0.7)?),
            },
            GradientStop {
                offset: 1.0,
                color: Color::from(opacity(&tertiary, 0.35)?),
            },
        ],
    });
    effects.shimmer = Some(ShimmerEffect {
        enabled: true,
        speed: 1.6,
        intensity: 0.2,
        angle: 18.0,
    });

    Ok(next)
}

fn widget_skin_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "widget-skin-pack", "Widget");

    let tokens = next.tokens.get_or_insert_with(DesignTokens::default);
    tokens.density = Some(DensityTokens {
        scale: 0.92,
        base_spacing: 6.0,
    });
    tokens.corners = Some(CornerTokens {
        small: 6.0,
        medium: 10.0,
        large: 14.0,
        xlarge: Some(18.0),
    });

    let adaptation = next.adaptation.get_or_insert_with(ThemeAdaptation::default);
    adaptation.layout = Some(LayoutAdaptation {
        density: Density::Compact,
        corner_style: CornerStyle::Rounded,
        spacing_scale: 0.9,
        panel_style: Some(PanelStyle::Flat),
        navigation_style: Some(NavigationStyle::Tabs),
    });

    Ok(next)
}

fn platform_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "platform-pack", "Platform");

    let adaptation = next.adaptation.get_or_insert_with(ThemeAdaptation::default);
    let assets = adaptation.assets.get_or_insert_with(Default::default);
    assets.font_family_override =
        Some("Inter, Roboto, Segoe UI, SF Pro Text, system-ui, sans-serif".to_string());
    adaptation.icons = Some(IconAdaptation {
        family: IconFamily::Material,
        style: IconStyle::Outlined,
        size_scale: 1.0,
        stroke_width: Some(1.8),
        corner_style: Some(IconCorner::Rounded),
    });

    Ok(next)
}

fn ai_ui_pack(theme: &Theme) -> Result<Theme, ThemeError> {
    let mut next = base_expansion(theme, "ai-ui-pack", "AI UI");

    let roles = ensure_semantic_roles(&next);
    scheme_mut(&mut next).semantic_roles = Some(SemanticRoles {
        info: Some(Color::hex("#5B5BD6")),
        on_info: Some(Color::hex("#FFFFFF")),
        critical: Some(Color::hex("#A81818")),
        on_critical: Some(Color::hex("#FFFFFF")),
        ..roles
    });

    let effects = next.effects.get_or_insert_with(Default::default);
    effects.blur = Some(BlurEffect {
        enabled: true,
        radius: 8.0,
    });
    effects.overlays = Some(OverlayEffect {
        enabled: true,
        color: Color::from(opacity(&Color::hex("#6D73FF"), 0.25)?),
        opacity: 0.18,
        blend_mode: Some(BlendMode::SoftLight),
    });

    Ok(next)
}

fn styles(entries: &[(&str, StyleValue)]) -> IndexMap<String, StyleValue> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// The implemented expansion packs.
///
/// The first access asserts coverage against the planned pack ids; a
/// mismatch is a programming error and panics before any theme is
/// processed.
pub fn expansion_packs() -> &'static [ExpansionPack] {
    static PACKS: OnceLock<Vec<ExpansionPack>> = OnceLock::new();
    PACKS.get_or_init(|| {
        let packs = vec![
            ExpansionPack {
                id: "domain-packs",
                name: "Domain Packs",
                summary: "Adds finance-grade semantic roles and denser operational layouts.",
                apply: domain_packs,
            },
            ExpansionPack {
                id: "localization-pack",
                name: "Localization Pack",
                summary: "Introduces script-aware type defaults and direction-safe overrides.",
                apply: localization_pack,
            },
            ExpansionPack {
                id: "accessibility-pack",
                name: "Accessibility Pack",
                summary: "Improves focus visibility, color contrast, and touch target comfort.",
                apply: accessibility_pack,
            },
            ExpansionPack {
                id: "motion-pack",
                name: "Motion Pack",
                summary: "Adds intent-led animation tokens with reduced-motion support.",
                apply: motion_pack,
            },
            ExpansionPack {
                id: "data-viz-pack",
                name: "Data Viz Pack",
                summary: "Introduces chart-safe semantic series and annotation contrast helpers.",
                apply: data_viz_pack,
            },
            ExpansionPack {
                id: "email-docs-pack",
                name: "Email + Docs Pack",
                summary: "Applies long-form typography and print-safe neutral surfaces.",
                apply: email_docs_pack,
            },
            ExpansionPack {
                id: "seasonal-pack",
                name: "Seasonal / Campaign Pack",
                summary: "Layered campaign accents without mutating core brand tokens.",
                apply: seasonal_pack,
            },
            ExpansionPack {
                id: "widget-skin-pack",
                name: "Widget Skin Pack",
                summary: "Optimizes compact iframe-friendly widgets and host-safe overlays.",
                apply: widget_skin_pack,
            },
            ExpansionPack {
                id: "platform-pack",
                name: "Platform Pack",
                summary: "Creates cross-surface defaults for web, mobile, and desktop parity.",
                apply: platform_pack,
            },
            ExpansionPack {
                id: "ai-ui-pack",
                name: "AI UI Pack",
                summary: "Adds conversation/status-oriented semantics for assistant interfaces.",
                apply: ai_ui_pack,
            },
        ];
        assert_plan_coverage(&packs);
        packs
    })
}

fn assert_plan_coverage(packs: &[ExpansionPack]) {
    let plan_ids: Vec<&str> = EXPANSION_PACK_PLANS.iter().map(|plan| plan.id).collect();
    let implementation_ids: Vec<&str> = packs.iter().map(|pack| pack.id).collect();

    let missing: Vec<&str> = plan_ids
        .iter()
        .filter(|id| !implementation_ids.contains(id))
        .copied()
        .collect();
    let unknown: Vec<&str> = implementation_ids
        .iter()
        .filter(|id| !plan_ids.contains(id))
        .copied()
        .collect();

    if !missing.is_empty() || !unknown.is_empty() {
        panic!(
            "Expansion pack coverage mismatch. Missing: [{}], Unknown: [{}]",
            missing.join(", "),
            unknown.join(", ")
        );
    }
}

fn pack_map() -> &'static FxHashMap<&'static str, &'static ExpansionPack> {
    static MAP: OnceLock<FxHashMap<&'static str, &'static ExpansionPack>> = OnceLock::new();
    MAP.get_or_init(|| {
        expansion_packs()
            .iter()
            .map(|pack| (pack.id, pack))
            .collect()
    })
}

/// Apply a single expansion pack by id.
pub fn apply_expansion_pack(theme: &Theme, expansion_pack_id: &str) -> Result<Theme, ThemeError> {
    let pack = pack_map()
        .get(expansion_pack_id)
        .ok_or_else(|| ThemeError::UnknownExpansionPack(expansion_pack_id.to_string()))?;
    tracing::debug!(pack = pack.id, theme = %theme.metadata.id, "applying expansion pack");
    pack.apply(theme)
}

/// Apply every planned pack to a theme, keyed by pack id.
pub fn apply_all_expansion_packs(theme: &Theme) -> Result<IndexMap<String, Theme>, ThemeError> {
    let mut results = IndexMap::new();
    for plan in EXPANSION_PACK_PLANS {
        results.insert(plan.id.to_string(), apply_expansion_pack(theme, plan.id)?);
    }
    Ok(results)
}
