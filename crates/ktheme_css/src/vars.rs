//! CSS custom-property emission
//!
//! Every variable lives under the `--kt-` prefix. Color roles use the
//! kebab-case form of their wire name (`onPrimary` → `--kt-on-primary`);
//! layout, icon, density and corner tokens each keep their own namespace.

use ktheme_engine::{
    resolve_accessibility_settings, should_auto_include_accessibility_css, ColorScheme,
    ComponentOverride, DesignTokens, IconAdaptation, LayoutAdaptation, StyleValue, Theme,
};

/// Convert a camelCase wire name to kebab-case.
fn to_kebab_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Keys whose numeric values are unitless in CSS.
const UNITLESS_KEYS: [&str; 4] = ["opacity", "z-index", "font-weight", "line-height"];

fn normalize_numeric_value(key: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) if !UNITLESS_KEYS.contains(&key) => format!("{n}px"),
        StyleValue::Number(n) => format!("{n}"),
        StyleValue::Text(text) => text.clone(),
    }
}

/// Custom properties for the `--kt-layout-*` namespace.
pub fn generate_layout_css_variables(adaptation: Option<&LayoutAdaptation>) -> String {
    let Some(layout) = adaptation else {
        return String::new();
    };

    let panel_style = layout.panel_style.map_or("flat", |style| style.as_str());
    let navigation_style = layout
        .navigation_style
        .map_or("tabs", |style| style.as_str());

    [
        format!("    --kt-layout-density: {};", layout.density.as_str()),
        format!("    --kt-layout-density-scale: {};", layout.density.scale()),
        format!("    --kt-layout-spacing-scale: {};", layout.spacing_scale),
        format!(
            "    --kt-layout-corner-style: {};",
            layout.corner_style.as_str()
        ),
        format!("    --kt-layout-radius: {}px;", layout.corner_style.radius()),
        format!("    --kt-layout-panel-style: {panel_style};"),
        format!("    --kt-layout-navigation-style: {navigation_style};"),
    ]
    .join("\n")
}

/// Custom properties for the `--kt-icon-*` namespace.
pub fn generate_icon_css_variables(adaptation: Option<&IconAdaptation>) -> String {
    let Some(icons) = adaptation else {
        return String::new();
    };

    let stroke_width = icons.stroke_width.unwrap_or(1.8);
    let corner_style = icons.corner_style.map_or("rounded", |style| style.as_str());

    [
        format!("    --kt-icon-family: {};", icons.family.as_str()),
        format!("    --kt-icon-style: {};", icons.style.as_str()),
        format!("    --kt-icon-size-scale: {};", icons.size_scale),
        format!("    --kt-icon-stroke-width: {stroke_width};"),
        format!("    --kt-icon-corner-style: {corner_style};"),
    ]
    .join("\n")
}

/// Custom properties for the `--kt-density-*` and `--kt-corner-*`
/// namespaces.
pub fn generate_design_token_css_variables(tokens: Option<&DesignTokens>) -> String {
    let Some(tokens) = tokens else {
        return String::new();
    };

    let density_scale = tokens.density.as_ref().map_or(1.0, |d| d.scale);
    let base_spacing = tokens.density.as_ref().map_or(8.0, |d| d.base_spacing);
    let corner_small = tokens.corners.as_ref().map_or(4.0, |c| c.small);
    let corner_medium = tokens.corners.as_ref().map_or(8.0, |c| c.medium);
    let corner_large = tokens.corners.as_ref().map_or(12.0, |c| c.large);
    let corner_xlarge = tokens
        .corners
        .as_ref()
        .and_then(|c| c.xlarge)
        .unwrap_or(16.0);

    [
        format!("    --kt-density-scale: {density_scale};"),
        format!("    --kt-density-base-spacing: {base_spacing}px;"),
        format!("    --kt-corner-small: {corner_small}px;"),
        format!("    --kt-corner-medium: {corner_medium}px;"),
        format!("    --kt-corner-large: {corner_large}px;"),
        format!("    --kt-corner-xlarge: {corner_xlarge}px;"),
    ]
    .join("\n")
}

/// Custom properties for the full color scheme, including state layers
/// (`--kt-state-*`) and semantic roles.
pub fn generate_color_scheme_css_variables(scheme: &ColorScheme) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (name, color) in scheme.roles() {
        if let Some(color) = color {
            lines.push(format!(
                "    --kt-{}: {};",
                to_kebab_case(name),
                color.to_css()
            ));
        }
    }

    if let Some(layers) = scheme.state_layers.as_ref() {
        for (name, color) in layers.entries() {
            if let Some(color) = color {
                lines.push(format!(
                    "    --kt-state-{}: {};",
                    to_kebab_case(name),
                    color.to_css()
                ));
            }
        }
    }

    if let Some(roles) = scheme.semantic_roles.as_ref() {
        for (name, color) in roles.entries() {
            if let Some(color) = color {
                lines.push(format!(
                    "    --kt-{}: {};",
                    to_kebab_case(name),
                    color.to_css()
                ));
            }
        }
    }

    lines.join("\n")
}

/// Accessibility custom properties (`--kt-a11y-*`) resolved from the
/// theme's declared policy.
pub fn generate_accessibility_css(theme: &Theme) -> String {
    if !should_auto_include_accessibility_css(theme) {
        return String::new();
    }

    let settings = resolve_accessibility_settings(theme, None);
    if !settings.enabled {
        return String::new();
    }

    let focus_color = theme
        .color_scheme
        .as_ref()
        .and_then(|scheme| scheme.primary.as_ref())
        .map_or_else(|| "currentColor".to_string(), |color| color.to_css());
    let underline = if settings.underline_links {
        "underline"
    } else {
        "none"
    };

    [
        format!(
            "    --kt-a11y-min-contrast: {};",
            settings.minimum_contrast_ratio
        ),
        format!("    --kt-a11y-font-scale: {};", settings.font_scale),
        format!("    --kt-a11y-line-height: {};", settings.line_height),
        format!(
            "    --kt-a11y-letter-spacing: {}em;",
            settings.letter_spacing
        ),
        format!(
            "    --kt-a11y-target-size: {}px;",
            settings.minimum_target_size
        ),
        format!("    --kt-a11y-focus-width: {}px;", settings.focus_ring_width),
        format!(
            "    --kt-a11y-focus-offset: {}px;",
            settings.focus_ring_offset
        ),
        format!("    --kt-a11y-focus-color: {focus_color};"),
        format!("    --kt-a11y-underline-links: {underline};"),
    ]
    .join("\n")
}

/// Built-in accessibility utility rules consuming the `--kt-a11y-*`
/// variables.
pub fn generate_accessibility_utility_css(theme: &Theme) -> String {
    if !should_auto_include_accessibility_css(theme) {
        return String::new();
    }

    let settings = resolve_accessibility_settings(theme, None);
    if !settings.enabled {
        return String::new();
    }

    let reduced_motion_block = if settings.reduced_motion {
        "\n* {\n  animation-duration: 0.01ms !important;\n  animation-iteration-count: 1 !important;\n  transition-duration: 0.01ms !important;\n  scroll-behavior: auto !important;\n}"
    } else {
        ""
    };

    format!(
        r#"[data-ktheme] {{
  font-size: calc(1rem * var(--kt-a11y-font-scale));
  line-height: var(--kt-a11y-line-height);
  letter-spacing: var(--kt-a11y-letter-spacing);
}}

[data-ktheme] a {{
  text-decoration: var(--kt-a11y-underline-links);
}}

[data-ktheme] :is(button, [role="button"], input, select, textarea, a) {{
  min-width: var(--kt-a11y-target-size);
  min-height: var(--kt-a11y-target-size);
}}

[data-ktheme] :focus-visible {{
  outline: var(--kt-a11y-focus-width) solid var(--kt-a11y-focus-color);
  outline-offset: var(--kt-a11y-focus-offset);
}}

@media (prefers-reduced-motion: reduce) {{{reduced_motion_block}
}}

@media (forced-colors: active) {{
  [data-ktheme] :focus-visible {{
    outline-color: CanvasText;
  }}
}}"#
    )
}

/// Convert component overrides into CSS blocks. Numeric values get a `px`
/// suffix except for unitless properties.
pub fn generate_component_override_css(overrides: &[ComponentOverride]) -> String {
    if overrides.is_empty() {
        return String::new();
    }

    overrides
        .iter()
        .map(|component_override| {
            let body = component_override
                .styles
                .iter()
                .map(|(key, value)| {
                    format!("  {key}: {};", normalize_numeric_value(key, value))
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!("{} {{\n{body}\n}}", component_override.selector)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generate the complete `:root` block plus override and utility CSS for
/// a theme.
pub fn generate_theme_adaptation_css(theme: &Theme) -> String {
    let adaptation = theme.adaptation.as_ref();
    let color_vars = theme
        .color_scheme
        .as_ref()
        .map(generate_color_scheme_css_variables)
        .unwrap_or_default();
    let layout_vars = generate_layout_css_variables(adaptation.and_then(|a| a.layout.as_ref()));
    let icon_vars = generate_icon_css_variables(adaptation.and_then(|a| a.icons.as_ref()));
    let token_vars = generate_design_token_css_variables(theme.tokens.as_ref());
    let accessibility_vars = generate_accessibility_css(theme);
    let override_css = adaptation
        .map(|a| generate_component_override_css(&a.component_overrides))
        .unwrap_or_default();
    let utility_css = generate_accessibility_utility_css(theme);

    let root_sections: Vec<&str> = [
        color_vars.as_str(),
        layout_vars.as_str(),
        icon_vars.as_str(),
        token_vars.as_str(),
        accessibility_vars.as_str(),
    ]
    .into_iter()
    .filter(|section| !section.is_empty())
    .collect();

    if root_sections.is_empty() && override_css.is_empty() && utility_css.is_empty() {
        return String::new();
    }

    let mut blocks: Vec<String> = Vec::new();
    if !root_sections.is_empty() {
        blocks.push(format!(":root {{\n{}\n}}", root_sections.join("\n")));
    }
    if !override_css.is_empty() {
        blocks.push(override_css);
    }
    if !utility_css.is_empty() {
        blocks.push(utility_css);
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use ktheme_core::Color;
    use ktheme_engine::{
        paper_ink_theme, AccessibilitySettings, CornerStyle, CornerTokens, Density, DensityTokens,
        DesignTokens, IconCorner, IconFamily, IconStyle, NavigationStyle, PanelStyle, SemanticRoles,
        StateLayers,
    };

    #[test]
    fn layout_and_icon_namespaces() {
        let layout_vars = generate_layout_css_variables(Some(&LayoutAdaptation {
            density: Density::Spacious,
            corner_style: CornerStyle::Sharp,
            spacing_scale: 1.25,
            panel_style: Some(PanelStyle::Flat),
            navigation_style: Some(NavigationStyle::Pivot),
        }));
        assert!(layout_vars.contains("--kt-layout-density: spacious;"));
        assert!(layout_vars.contains("--kt-layout-corner-style: sharp;"));
        assert!(layout_vars.contains("--kt-layout-radius: 0px;"));
        assert!(layout_vars.contains("--kt-layout-spacing-scale: 1.25;"));

        let icon_vars = generate_icon_css_variables(Some(&IconAdaptation {
            family: IconFamily::Fluent,
            style: IconStyle::Line,
            size_scale: 1.0,
            stroke_width: Some(1.6),
            corner_style: Some(IconCorner::Sharp),
        }));
        assert!(icon_vars.contains("--kt-icon-family: fluent;"));
        assert!(icon_vars.contains("--kt-icon-style: line;"));
        assert!(icon_vars.contains("--kt-icon-stroke-width: 1.6;"));
    }

    #[test]
    fn missing_blocks_emit_nothing() {
        assert_eq!(generate_layout_css_variables(None), "");
        assert_eq!(generate_icon_css_variables(None), "");
        assert_eq!(generate_design_token_css_variables(None), "");
        assert_eq!(generate_component_override_css(&[]), "");
    }

    #[test]
    fn design_token_variables_with_defaults() {
        let token_vars = generate_design_token_css_variables(Some(&DesignTokens {
            density: Some(DensityTokens {
                scale: 1.1,
                base_spacing: 10.0,
            }),
            corners: Some(CornerTokens {
                small: 2.0,
                medium: 8.0,
                large: 14.0,
                xlarge: Some(20.0),
            }),
        }));
        assert!(token_vars.contains("--kt-density-scale: 1.1;"));
        assert!(token_vars.contains("--kt-corner-xlarge: 20px;"));

        let defaulted = generate_design_token_css_variables(Some(&DesignTokens::default()));
        assert!(defaulted.contains("--kt-density-scale: 1;"));
        assert!(defaulted.contains("--kt-density-base-spacing: 8px;"));
        assert!(defaulted.contains("--kt-corner-xlarge: 16px;"));
    }

    #[test]
    fn color_scheme_variables_are_kebab_cased_and_include_extensions() {
        let mut scheme = paper_ink_theme().color_scheme.unwrap();
        scheme.state_layers = Some(StateLayers {
            hover: Some(Color::hex("#00000014")),
            ..Default::default()
        });
        scheme.semantic_roles = Some(SemanticRoles {
            success: Some(Color::hex("#2E7D32")),
            on_success: Some(Color::hex("#FFFFFF")),
            ..Default::default()
        });

        let vars = generate_color_scheme_css_variables(&scheme);
        assert!(vars.contains("--kt-primary: #1F2937;"));
        assert!(vars.contains("--kt-on-primary-container: #111827;"));
        assert!(vars.contains("--kt-state-hover: #00000014;"));
        assert!(vars.contains("--kt-success: #2E7D32;"));
        assert!(vars.contains("--kt-on-success: #FFFFFF;"));
        assert!(!vars.contains("--kt-warning"));
    }

    #[test]
    fn component_overrides_render_with_px_normalization() {
        let mut styles: IndexMap<String, StyleValue> = IndexMap::new();
        styles.insert("border-radius".to_string(), StyleValue::Number(0.0));
        styles.insert(
            "text-transform".to_string(),
            StyleValue::Text("uppercase".to_string()),
        );
        styles.insert("opacity".to_string(), StyleValue::Number(0.8));

        let css = generate_component_override_css(&[ComponentOverride {
            selector: ".tile".to_string(),
            styles,
        }]);

        assert!(css.contains(".tile {"));
        assert!(css.contains("border-radius: 0px;"));
        assert!(css.contains("text-transform: uppercase;"));
        assert!(css.contains("opacity: 0.8;"));
        assert!(!css.contains("opacity: 0.8px;"));
    }

    #[test]
    fn full_adaptation_css_assembles_root_block() {
        let mut theme = paper_ink_theme();
        theme.adaptation = Some(ktheme_engine::AdaptationPreset::WindowsPhoneMetro.adaptation());

        let css = generate_theme_adaptation_css(&theme);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--kt-layout-density: spacious;"));
        assert!(css.contains("--kt-primary: #1F2937;"));
        assert!(css.contains("--kt-icon-family: fluent;"));
        assert!(css.contains("--kt-density-base-spacing: 8px;"));
        assert!(css.contains(".tile {"));
        assert!(css.contains("[data-ktheme]"));
    }

    #[test]
    fn tokens_only_theme_still_emits_density_variables() {
        let mut theme = paper_ink_theme();
        theme.adaptation = None;

        let css = generate_theme_adaptation_css(&theme);
        assert!(css.contains("--kt-density-scale: 1;"));
    }

    #[test]
    fn accessibility_block_respects_opt_out() {
        let mut theme = paper_ink_theme();
        theme.accessibility = Some(AccessibilitySettings {
            auto_include_in_generated_css: Some(false),
            ..Default::default()
        });

        assert_eq!(generate_accessibility_css(&theme), "");
        assert_eq!(generate_accessibility_utility_css(&theme), "");
        assert!(!generate_theme_adaptation_css(&theme).contains("--kt-a11y-"));
    }

    #[test]
    fn accessibility_variables_reflect_resolved_policy() {
        let theme = paper_ink_theme();
        let css = generate_accessibility_css(&theme);
        assert!(css.contains("--kt-a11y-min-contrast: 4.5;"));
        assert!(css.contains("--kt-a11y-target-size: 44px;"));
        assert!(css.contains("--kt-a11y-focus-color: #1F2937;"));
        assert!(css.contains("--kt-a11y-underline-links: underline;"));
    }

    #[test]
    fn kebab_case_conversion() {
        assert_eq!(to_kebab_case("onPrimaryContainer"), "on-primary-container");
        assert_eq!(to_kebab_case("primary"), "primary");
        assert_eq!(to_kebab_case("inverseOnSurface"), "inverse-on-surface");
    }
}
