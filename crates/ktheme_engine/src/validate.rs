//! Theme validation engine
//!
//! Runs every check and accumulates results; it never short-circuits, so
//! test suites can assert on errors/warnings by content rather than
//! position. Errors make a theme unusable (registration fails); warnings
//! are advisory. Color conversions inside the checks are guarded: a
//! malformed color becomes a validation error, never a propagated failure.

use ktheme_core::{contrast_ratio, Color};

use crate::types::{ColorScheme, SemanticRoles, Theme, ThemeValidationResult};

const CONTRAST_PAIRS: [(&str, &str, &str); 4] = [
    ("primary", "onPrimary", "primary/onPrimary"),
    ("background", "onBackground", "background/onBackground"),
    ("surface", "onSurface", "surface/onSurface"),
    ("error", "onError", "error/onError"),
];

/// Validate a theme, producing categorized errors and warnings.
pub fn validate_theme(theme: &Theme) -> ThemeValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_metadata(theme, &mut errors);
    check_color_scheme(theme, &mut errors, &mut warnings);
    check_effects(theme, &mut warnings);
    check_adaptation(theme, &mut errors);
    check_tokens(theme, &mut errors);
    check_accessibility(theme, &mut errors, &mut warnings);

    ThemeValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_metadata(theme: &Theme, errors: &mut Vec<String>) {
    if theme.metadata.id.is_empty() {
        errors.push("Theme ID is required".to_string());
    }
    if theme.metadata.name.is_empty() {
        errors.push("Theme name is required".to_string());
    }
    if theme.metadata.version.is_empty() {
        errors.push("Theme version is required".to_string());
    }
}

fn check_color_scheme(theme: &Theme, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let Some(scheme) = theme.color_scheme.as_ref() else {
        errors.push("Color scheme is required".to_string());
        return;
    };

    for role in ColorScheme::REQUIRED_ROLES {
        if scheme.role(role).is_none() {
            errors.push(format!("Missing required color: {role}"));
        }
    }

    check_contrast(scheme, errors, warnings);
    if let Some(roles) = scheme.semantic_roles.as_ref() {
        check_semantic_pairs(roles, errors);
    }
    if let Some(layers) = scheme.state_layers.as_ref() {
        for (key, value) in layers.entries() {
            if let Some(Color::Structured { .. }) = value {
                warnings.push(format!(
                    "State layer {key} should be a CSS color string for portability"
                ));
            }
        }
    }
}

fn check_contrast(scheme: &ColorScheme, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    for (base, on, label) in CONTRAST_PAIRS {
        let (Some(base_color), Some(on_color)) = (scheme.role(base), scheme.role(on)) else {
            // Missing roles are reported by the required-role check.
            continue;
        };

        match contrast_ratio(base_color, on_color) {
            Ok(ratio) if ratio < 4.5 => warnings.push(format!(
                "Low contrast for {label}: {ratio:.2} (recommended >= 4.5)"
            )),
            Ok(_) => {}
            Err(err) => errors.push(format!("Invalid color in pair {label}: {err}")),
        }
    }
}

fn check_semantic_pairs(roles: &SemanticRoles, errors: &mut Vec<String>) {
    let pairs = [
        (&roles.success, &roles.on_success, "success", "onSuccess"),
        (&roles.warning, &roles.on_warning, "warning", "onWarning"),
        (&roles.info, &roles.on_info, "info", "onInfo"),
    ];
    for (base_color, on_color, base, on) in pairs {
        if base_color.is_none() || on_color.is_none() {
            errors.push(format!("Semantic role pair {base}/{on} is incomplete"));
        }
    }
}

fn check_effects(theme: &Theme, warnings: &mut Vec<String>) {
    let Some(metallic) = theme.effects.as_ref().and_then(|e| e.metallic.as_ref()) else {
        return;
    };
    if metallic.enabled && metallic.intensity > 1.0 {
        warnings.push("Metallic intensity should be between 0 and 1".to_string());
    }
}

fn check_adaptation(theme: &Theme, errors: &mut Vec<String>) {
    let Some(adaptation) = theme.adaptation.as_ref() else {
        return;
    };

    if let Some(layout) = adaptation.layout.as_ref() {
        if layout.spacing_scale <= 0.0 {
            errors.push("Layout spacingScale must be greater than 0".to_string());
        }
    }
    if let Some(icons) = adaptation.icons.as_ref() {
        if icons.size_scale <= 0.0 {
            errors.push("Icon sizeScale must be greater than 0".to_string());
        }
    }
    for (index, component_override) in adaptation.component_overrides.iter().enumerate() {
        if component_override.selector.is_empty() {
            errors.push(format!(
                "Component override at index {index} is missing selector"
            ));
        }
    }
}

fn check_tokens(theme: &Theme, errors: &mut Vec<String>) {
    let Some(tokens) = theme.tokens.as_ref() else {
        return;
    };

    if let Some(density) = tokens.density.as_ref() {
        if density.scale <= 0.0 {
            errors.push("Density token scale must be greater than 0".to_string());
        }
    }
    if let Some(corners) = tokens.corners.as_ref() {
        if corners.values().iter().any(|value| *value < 0.0) {
            errors.push("Corner token values must be non-negative".to_string());
        }
    }
}

fn check_accessibility(theme: &Theme, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let Some(settings) = theme.accessibility.as_ref() else {
        return;
    };

    if let Some(ratio) = settings.minimum_contrast_ratio {
        if ratio < 3.0 {
            errors.push("Accessibility minimumContrastRatio must be at least 3".to_string());
        }
    }
    if let Some(scale) = settings.typography.as_ref().and_then(|t| t.font_scale) {
        if scale <= 0.0 {
            errors.push("Accessibility fontScale must be greater than 0".to_string());
        }
    }
    if let Some(size) = settings
        .interaction
        .as_ref()
        .and_then(|i| i.minimum_target_size)
    {
        if size < 24.0 {
            warnings.push(format!(
                "Minimum target size {size} is below the 24px floor (44px recommended)"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AccessibilityInteraction, AccessibilitySettings, AccessibilityTypography, StateLayers,
        ThemeMetadata,
    };

    fn minimal_theme() -> Theme {
        let hex = |value: &str| Some(Color::hex(value));
        Theme {
            metadata: ThemeMetadata {
                id: "test".into(),
                name: "Test".into(),
                version: "1.0.0".into(),
                ..Default::default()
            },
            dark_mode: false,
            color_scheme: Some(ColorScheme {
                primary: hex("#1A1A2E"),
                on_primary: hex("#FFFFFF"),
                background: hex("#FFFFFF"),
                on_background: hex("#111111"),
                surface: hex("#F5F5F5"),
                on_surface: hex("#111111"),
                error: hex("#7F1D1D"),
                on_error: hex("#FFFFFF"),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_theme_is_valid() {
        let result = validate_theme(&minimal_theme());
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn validation_is_deterministic() {
        let theme = minimal_theme();
        assert_eq!(validate_theme(&theme), validate_theme(&theme));
    }

    #[test]
    fn missing_required_color_is_an_error() {
        let mut theme = minimal_theme();
        theme.color_scheme.as_mut().unwrap().primary = None;

        let result = validate_theme(&theme);
        assert!(!result.valid);
        assert!(result
            .errors
            .contains(&"Missing required color: primary".to_string()));
    }

    #[test]
    fn missing_color_scheme_is_a_single_error() {
        let mut theme = minimal_theme();
        theme.color_scheme = None;

        let result = validate_theme(&theme);
        assert!(result
            .errors
            .contains(&"Color scheme is required".to_string()));
        assert!(!result.errors.iter().any(|e| e.contains("Missing required")));
    }

    #[test]
    fn empty_metadata_fields_are_errors() {
        let mut theme = minimal_theme();
        theme.metadata.id.clear();
        theme.metadata.version.clear();

        let result = validate_theme(&theme);
        assert!(result.errors.contains(&"Theme ID is required".to_string()));
        assert!(result
            .errors
            .contains(&"Theme version is required".to_string()));
    }

    #[test]
    fn low_contrast_pair_warns_with_rounded_ratio() {
        let mut theme = minimal_theme();
        let scheme = theme.color_scheme.as_mut().unwrap();
        scheme.primary = Some(Color::hex("#777777"));
        scheme.on_primary = Some(Color::hex("#7A7A7A"));

        let result = validate_theme(&theme);
        assert!(result.valid);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Low contrast for primary/onPrimary")));
        // ratio of two near-identical grays is ~1.0
        assert!(result.warnings.iter().any(|w| w.contains("1.0")));
    }

    #[test]
    fn malformed_color_demotes_to_validation_error() {
        let mut theme = minimal_theme();
        theme.color_scheme.as_mut().unwrap().primary = Some(Color::hex("#NOTHEX"));

        let result = validate_theme(&theme);
        assert!(!result.valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("primary/onPrimary") && e.contains("#NOTHEX")));
    }

    #[test]
    fn incomplete_semantic_pairs_are_named() {
        let mut theme = minimal_theme();
        theme.color_scheme.as_mut().unwrap().semantic_roles = Some(SemanticRoles {
            success: Some(Color::hex("#22AA22")),
            on_success: Some(Color::hex("#102010")),
            warning: Some(Color::hex("#CCAA00")),
            ..Default::default()
        });

        let result = validate_theme(&theme);
        assert!(result
            .errors
            .contains(&"Semantic role pair warning/onWarning is incomplete".to_string()));
        assert!(result
            .errors
            .contains(&"Semantic role pair info/onInfo is incomplete".to_string()));
        assert!(!result
            .errors
            .iter()
            .any(|e| e.contains("success/onSuccess")));
    }

    #[test]
    fn structured_state_layer_warns_for_portability() {
        let mut theme = minimal_theme();
        theme.color_scheme.as_mut().unwrap().state_layers = Some(StateLayers {
            hover: Some(Color::rgba(0.0, 0.0, 0.0, 0.08)),
            pressed: Some(Color::hex("#0000001f")),
            ..Default::default()
        });

        let result = validate_theme(&theme);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("State layer hover")));
        assert!(!result
            .warnings
            .iter()
            .any(|w| w.contains("State layer pressed")));
    }

    #[test]
    fn accessibility_guardrails() {
        let mut theme = minimal_theme();
        theme.accessibility = Some(AccessibilitySettings {
            minimum_contrast_ratio: Some(2.0),
            typography: Some(AccessibilityTypography {
                font_scale: Some(0.0),
                ..Default::default()
            }),
            interaction: Some(AccessibilityInteraction {
                minimum_target_size: Some(20.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        let result = validate_theme(&theme);
        assert!(!result.valid);
        assert!(result
            .errors
            .contains(&"Accessibility minimumContrastRatio must be at least 3".to_string()));
        assert!(result
            .errors
            .contains(&"Accessibility fontScale must be greater than 0".to_string()));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("below the 24px floor")));
    }
}
