//! Theme data model
//!
//! The entity graph shared across processes as JSON: metadata, color
//! scheme, visual effects, typography, design tokens, adaptation and
//! accessibility policy. Field names serialize in camelCase to match the
//! theme JSON schema; optional fields are omitted when absent.

use indexmap::IndexMap;
use ktheme_core::Color;
use serde::{Deserialize, Serialize};

/// Theme identity and provenance. Timestamps are ISO-8601 strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMetadata {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Interactive state layer colors layered over components.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateLayers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dragged: Option<Color>,
}

impl StateLayers {
    /// Present layers with their wire names.
    pub fn entries(&self) -> [(&'static str, Option<&Color>); 4] {
        [
            ("hover", self.hover.as_ref()),
            ("pressed", self.pressed.as_ref()),
            ("focused", self.focused.as_ref()),
            ("dragged", self.dragged.as_ref()),
        ]
    }
}

/// Semantic status aliases (success/warning/info, optional containers and
/// a standalone critical pair).
///
/// Each of success/warning/info must ship with its "on" partner; a partial
/// pair is a validation error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticRoles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_success_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_warning: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_warning_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_info: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_info_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_critical: Option<Color>,
}

impl SemanticRoles {
    /// Present roles with their wire names.
    pub fn entries(&self) -> [(&'static str, Option<&Color>); 14] {
        [
            ("success", self.success.as_ref()),
            ("onSuccess", self.on_success.as_ref()),
            ("successContainer", self.success_container.as_ref()),
            ("onSuccessContainer", self.on_success_container.as_ref()),
            ("warning", self.warning.as_ref()),
            ("onWarning", self.on_warning.as_ref()),
            ("warningContainer", self.warning_container.as_ref()),
            ("onWarningContainer", self.on_warning_container.as_ref()),
            ("info", self.info.as_ref()),
            ("onInfo", self.on_info.as_ref()),
            ("infoContainer", self.info_container.as_ref()),
            ("onInfoContainer", self.on_info_container.as_ref()),
            ("critical", self.critical.as_ref()),
            ("onCritical", self.on_critical.as_ref()),
        ]
    }
}

/// Complete color scheme for a theme.
///
/// Roles are optional at the type level so that structural completeness is
/// a validation concern (missing required roles produce validation errors,
/// not deserialization failures).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_primary: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_primary_container: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_secondary: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_secondary_container: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_tertiary: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_tertiary_container: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_error: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_container: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_error_container: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_surface: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_variant: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_surface_variant: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_variant: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrim: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_surface: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_on_surface: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_primary: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_layers: Option<StateLayers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<SemanticRoles>,
}

impl ColorScheme {
    /// The baseline roles every theme must define.
    pub const REQUIRED_ROLES: [&'static str; 8] = [
        "primary",
        "onPrimary",
        "background",
        "onBackground",
        "surface",
        "onSurface",
        "error",
        "onError",
    ];

    /// Look up a base role by its wire name.
    pub fn role(&self, name: &str) -> Option<&Color> {
        self.roles()
            .into_iter()
            .find(|(role, _)| *role == name)
            .and_then(|(_, color)| color)
    }

    /// All base roles with their wire names, in schema order.
    pub fn roles(&self) -> [(&'static str, Option<&Color>); 28] {
        [
            ("primary", self.primary.as_ref()),
            ("onPrimary", self.on_primary.as_ref()),
            ("primaryContainer", self.primary_container.as_ref()),
            ("onPrimaryContainer", self.on_primary_container.as_ref()),
            ("secondary", self.secondary.as_ref()),
            ("onSecondary", self.on_secondary.as_ref()),
            ("secondaryContainer", self.secondary_container.as_ref()),
            ("onSecondaryContainer", self.on_secondary_container.as_ref()),
            ("tertiary", self.tertiary.as_ref()),
            ("onTertiary", self.on_tertiary.as_ref()),
            ("tertiaryContainer", self.tertiary_container.as_ref()),
            ("onTertiaryContainer", self.on_tertiary_container.as_ref()),
            ("error", self.error.as_ref()),
            ("onError", self.on_error.as_ref()),
            ("errorContainer", self.error_container.as_ref()),
            ("onErrorContainer", self.on_error_container.as_ref()),
            ("background", self.background.as_ref()),
            ("onBackground", self.on_background.as_ref()),
            ("surface", self.surface.as_ref()),
            ("onSurface", self.on_surface.as_ref()),
            ("surfaceVariant", self.surface_variant.as_ref()),
            ("onSurfaceVariant", self.on_surface_variant.as_ref()),
            ("outline", self.outline.as_ref()),
            ("outlineVariant", self.outline_variant.as_ref()),
            ("scrim", self.scrim.as_ref()),
            ("inverseSurface", self.inverse_surface.as_ref()),
            ("inverseOnSurface", self.inverse_on_surface.as_ref()),
            ("inversePrimary", self.inverse_primary.as_ref()),
        ]
    }
}

/// Metallic theme variants.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetallicVariant {
    Silver,
    Gold,
    GoldRoyalBlue,
    Bronze,
    Copper,
    Platinum,
    RoseGold,
    Titanium,
    Chrome,
    Cobalt,
}

/// Gradient stops for shimmer and metallic effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetallicGradient {
    pub base: Color,
    pub highlight: Color,
    pub shadow: Color,
    pub shimmer: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetallicEffect {
    pub enabled: bool,
    pub variant: MetallicVariant,
    pub gradient: MetallicGradient,
    /// 0–1; values above 1 draw a validation warning.
    pub intensity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowEffect {
    pub enabled: bool,
    pub elevation: f64,
    pub blur: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientEffect {
    pub enabled: bool,
    /// Degrees.
    pub angle: f64,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShimmerEffect {
    pub enabled: bool,
    pub speed: f64,
    pub intensity: f64,
    pub angle: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurEffect {
    pub enabled: bool,
    pub radius: f64,
}

/// CSS timing functions supported by animation and transition blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Per-effect rule governing how an animation responds to a user's
/// reduced-motion preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReducedMotionPolicy {
    /// Leave the animation untouched.
    None,
    /// Scale the duration down (the default when unset).
    Reduce,
    /// Turn the animation off entirely.
    Disable,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationEffect {
    pub enabled: bool,
    /// Milliseconds.
    pub duration: f64,
    pub easing: Easing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion_policy: Option<ReducedMotionPolicy>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionEffect {
    pub enabled: bool,
    /// Milliseconds.
    pub duration: f64,
    /// CSS properties to transition.
    pub properties: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    SoftLight,
    HardLight,
}

impl BlendMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::SoftLight => "soft-light",
            Self::HardLight => "hard-light",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayEffect {
    pub enabled: bool,
    pub color: Color,
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusRingEffect {
    pub enabled: bool,
    pub color: Color,
    pub width: f64,
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoiseEffect {
    pub enabled: bool,
    pub opacity: f64,
    pub scale: f64,
}

/// Visual effects configuration: independent optional feature blocks.
///
/// The blocks are orthogonal; only `animations` and `transitions` interact
/// with runtime reduced-motion resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metallic: Option<MetallicEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<GradientEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shimmer: Option<ShimmerEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<BlurEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<AnimationEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<TransitionEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlays: Option<OverlayEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_ring: Option<FocusRingEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<NoiseEffect>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizeScale {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub xlarge: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontWeightScale {
    pub light: f64,
    pub regular: f64,
    pub medium: f64,
    pub bold: f64,
}

/// Typography configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: FontSizeScale,
    pub font_weight: FontWeightScale,
    pub line_height: f64,
    pub letter_spacing: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Inter, system-ui, sans-serif".to_string(),
            font_size: FontSizeScale {
                small: 12.0,
                medium: 14.0,
                large: 18.0,
                xlarge: 24.0,
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
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityTokens {
    pub scale: f64,
    pub base_spacing: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerTokens {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xlarge: Option<f64>,
}

impl CornerTokens {
    /// All declared corner values.
    pub fn values(&self) -> Vec<f64> {
        let mut values = vec![self.small, self.medium, self.large];
        if let Some(xlarge) = self.xlarge {
            values.push(xlarge);
        }
        values
    }
}

/// Scale-free numeric knobs consumed by CSS emission and validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<DensityTokens>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corners: Option<CornerTokens>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    Comfortable,
    Spacious,
}

impl Density {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
            Self::Spacious => "spacious",
        }
    }

    /// Scale factor used by the CSS layout namespace.
    pub fn scale(self) -> f64 {
        match self {
            Self::Compact => 0.85,
            Self::Comfortable => 1.0,
            Self::Spacious => 1.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    Sharp,
    Rounded,
    Pill,
}

impl CornerStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Rounded => "rounded",
            Self::Pill => "pill",
        }
    }

    /// Base radius in px used by the CSS layout namespace.
    pub fn radius(self) -> f64 {
        match self {
            Self::Sharp => 0.0,
            Self::Rounded => 12.0,
            Self::Pill => 999.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStyle {
    Flat,
    Elevated,
    Glass,
}

impl PanelStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Elevated => "elevated",
            Self::Glass => "glass",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    Tabs,
    Rail,
    Drawer,
    Pivot,
}

impl NavigationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Rail => "rail",
            Self::Drawer => "drawer",
            Self::Pivot => "pivot",
        }
    }
}

/// Layout adaptation tokens for reshaping app structure per theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAdaptation {
    pub density: Density,
    pub corner_style: CornerStyle,
    pub spacing_scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_style: Option<PanelStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_style: Option<NavigationStyle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconFamily {
    Material,
    Fluent,
    SfSymbols,
    Custom,
}

impl IconFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Fluent => "fluent",
            Self::SfSymbols => "sf-symbols",
            Self::Custom => "custom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Outlined,
    Filled,
    Duotone,
    Line,
}

impl IconStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Duotone => "duotone",
            Self::Line => "line",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCorner {
    Sharp,
    Rounded,
}

impl IconCorner {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Rounded => "rounded",
        }
    }
}

/// Icon adaptation tokens for icon pack/weight/size control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconAdaptation {
    pub family: IconFamily,
    pub style: IconStyle,
    pub size_scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_style: Option<IconCorner>,
}

/// A CSS style value: either a raw string or a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

/// Explicit component-level layout/style override.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverride {
    pub selector: String,
    pub styles: IndexMap<String, StyleValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_sprite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family_override: Option<String>,
}

/// Theme adaptation profile used to restyle layout, icons and app chrome.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeAdaptation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutAdaptation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconAdaptation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_overrides: Vec<ComponentOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<AdaptationAssets>,
}

/// Accessibility controls that products can expose to end users.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityControls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_contrast_toggle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_motion_toggle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_font_scale_control: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_focus_ring_toggle: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityTypography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityMotion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_motion_by_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_parallax: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_shimmer: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityInteraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_target_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_ring_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_ring_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline_links: Option<bool>,
}

/// Accessibility defaults and guardrails declared by a theme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_contrast_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_include_in_generated_css: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<AccessibilityControls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<AccessibilityTypography>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<AccessibilityMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<AccessibilityInteraction>,
}

/// Runtime accessibility preferences resolved from OS/user choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityRuntimePreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefers_reduced_motion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefers_high_contrast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefers_forced_colors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_font_scale: Option<f64>,
}

/// Fully resolved accessibility controls (every toggle decided).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAccessibilityControls {
    pub allow_contrast_toggle: bool,
    pub allow_motion_toggle: bool,
    pub allow_font_scale_control: bool,
    pub allow_focus_ring_toggle: bool,
}

/// Fully resolved accessibility policy used by render layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAccessibilitySettings {
    pub enabled: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub forced_colors: bool,
    pub minimum_contrast_ratio: f64,
    pub font_scale: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
    pub minimum_target_size: f64,
    pub focus_ring_width: f64,
    pub focus_ring_offset: f64,
    pub underline_links: bool,
    pub disable_parallax: bool,
    pub disable_shimmer: bool,
    pub controls: ResolvedAccessibilityControls,
}

/// Complete theme definition: the aggregate root.
///
/// Immutable once derived: derivation operations clone instead of
/// mutating, and themes are identified solely by `metadata.id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub metadata: ThemeMetadata,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<VisualEffects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<DesignTokens>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptation: Option<ThemeAdaptation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilitySettings>,
}

/// Outcome of validating a theme. Errors make the theme unusable;
/// warnings are advisory and never affect validity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}
