//! Accessibility policy resolution
//!
//! A theme declares defaults and guardrails; the runtime supplies live
//! user/OS preferences. Resolution is three explicit merge passes so the
//! precedence stays auditable:
//!
//! 1. built-in defaults
//! 2. theme-declared values, where present
//! 3. live runtime preferences, where present
//!
//! The resolved `font_scale` is floored at 0.8 after all passes, even when
//! the user asks for less.

use crate::types::{
    AccessibilityRuntimePreferences, AccessibilitySettings, ResolvedAccessibilityControls,
    ResolvedAccessibilitySettings, Theme,
};

impl Default for ResolvedAccessibilityControls {
    fn default() -> Self {
        Self {
            allow_contrast_toggle: true,
            allow_motion_toggle: true,
            allow_font_scale_control: true,
            allow_focus_ring_toggle: true,
        }
    }
}

impl Default for ResolvedAccessibilitySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            high_contrast: false,
            reduced_motion: false,
            forced_colors: false,
            minimum_contrast_ratio: 4.5,
            font_scale: 1.0,
            line_height: 1.5,
            letter_spacing: 0.0,
            minimum_target_size: 44.0,
            focus_ring_width: 2.0,
            focus_ring_offset: 2.0,
            underline_links: true,
            disable_parallax: true,
            disable_shimmer: true,
            controls: ResolvedAccessibilityControls::default(),
        }
    }
}

fn apply_theme_settings(resolved: &mut ResolvedAccessibilitySettings, settings: &AccessibilitySettings) {
    if let Some(enabled) = settings.enabled {
        resolved.enabled = enabled;
    }
    if let Some(ratio) = settings.minimum_contrast_ratio {
        resolved.minimum_contrast_ratio = ratio;
    }
    if let Some(typography) = settings.typography.as_ref() {
        if let Some(scale) = typography.font_scale {
            resolved.font_scale = scale;
        }
        if let Some(line_height) = typography.line_height {
            resolved.line_height = line_height;
        }
        if let Some(letter_spacing) = typography.letter_spacing {
            resolved.letter_spacing = letter_spacing;
        }
    }
    if let Some(motion) = settings.motion.as_ref() {
        if let Some(reduce) = motion.reduce_motion_by_default {
            resolved.reduced_motion = reduce;
        }
        if let Some(disable) = motion.disable_parallax {
            resolved.disable_parallax = disable;
        }
        if let Some(disable) = motion.disable_shimmer {
            resolved.disable_shimmer = disable;
        }
    }
    if let Some(interaction) = settings.interaction.as_ref() {
        if let Some(size) = interaction.minimum_target_size {
            resolved.minimum_target_size = size;
        }
        if let Some(width) = interaction.focus_ring_width {
            resolved.focus_ring_width = width;
        }
        if let Some(offset) = interaction.focus_ring_offset {
            resolved.focus_ring_offset = offset;
        }
        if let Some(underline) = interaction.underline_links {
            resolved.underline_links = underline;
        }
    }
    if let Some(controls) = settings.controls.as_ref() {
        if let Some(allow) = controls.allow_contrast_toggle {
            resolved.controls.allow_contrast_toggle = allow;
        }
        if let Some(allow) = controls.allow_motion_toggle {
            resolved.controls.allow_motion_toggle = allow;
        }
        if let Some(allow) = controls.allow_font_scale_control {
            resolved.controls.allow_font_scale_control = allow;
        }
        if let Some(allow) = controls.allow_focus_ring_toggle {
            resolved.controls.allow_focus_ring_toggle = allow;
        }
    }
}

fn apply_runtime_preferences(
    resolved: &mut ResolvedAccessibilitySettings,
    preferences: &AccessibilityRuntimePreferences,
) {
    if let Some(reduced) = preferences.prefers_reduced_motion {
        resolved.reduced_motion = reduced;
    }
    if let Some(high_contrast) = preferences.prefers_high_contrast {
        resolved.high_contrast = high_contrast;
    }
    if let Some(forced) = preferences.prefers_forced_colors {
        resolved.forced_colors = forced;
    }
    if let Some(scale) = preferences.user_font_scale {
        resolved.font_scale = scale;
    }
}

/// Resolve a theme's accessibility policy against live preferences.
pub fn resolve_accessibility_settings(
    theme: &Theme,
    preferences: Option<&AccessibilityRuntimePreferences>,
) -> ResolvedAccessibilitySettings {
    let mut resolved = ResolvedAccessibilitySettings::default();
    if let Some(settings) = theme.accessibility.as_ref() {
        apply_theme_settings(&mut resolved, settings);
    }
    if let Some(preferences) = preferences {
        apply_runtime_preferences(&mut resolved, preferences);
    }
    resolved.font_scale = resolved.font_scale.max(0.8);
    resolved
}

/// Whether generated CSS should include the accessibility block.
pub fn should_auto_include_accessibility_css(theme: &Theme) -> bool {
    theme
        .accessibility
        .as_ref()
        .and_then(|settings| settings.auto_include_in_generated_css)
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccessibilityMotion, AccessibilityTypography};

    #[test]
    fn defaults_apply_when_theme_declares_nothing() {
        let resolved = resolve_accessibility_settings(&Theme::default(), None);
        assert_eq!(resolved.minimum_contrast_ratio, 4.5);
        assert_eq!(resolved.font_scale, 1.0);
        assert_eq!(resolved.minimum_target_size, 44.0);
        assert!(resolved.controls.allow_motion_toggle);
        assert!(!resolved.reduced_motion);
    }

    #[test]
    fn theme_defaults_override_built_ins() {
        let theme = Theme {
            accessibility: Some(AccessibilitySettings {
                minimum_contrast_ratio: Some(7.0),
                motion: Some(AccessibilityMotion {
                    reduce_motion_by_default: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let resolved = resolve_accessibility_settings(&theme, None);
        assert_eq!(resolved.minimum_contrast_ratio, 7.0);
        assert!(resolved.reduced_motion);
    }

    #[test]
    fn runtime_preferences_win_over_theme_defaults() {
        let theme = Theme {
            accessibility: Some(AccessibilitySettings {
                motion: Some(AccessibilityMotion {
                    reduce_motion_by_default: Some(true),
                    ..Default::default()
                }),
                typography: Some(AccessibilityTypography {
                    font_scale: Some(1.4),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let preferences = AccessibilityRuntimePreferences {
            prefers_reduced_motion: Some(false),
            prefers_high_contrast: Some(true),
            user_font_scale: Some(1.1),
            ..Default::default()
        };

        let resolved = resolve_accessibility_settings(&theme, Some(&preferences));
        assert!(!resolved.reduced_motion);
        assert!(resolved.high_contrast);
        assert_eq!(resolved.font_scale, 1.1);
    }

    #[test]
    fn font_scale_floor_holds_against_tiny_user_scale() {
        let preferences = AccessibilityRuntimePreferences {
            user_font_scale: Some(0.4),
            ..Default::default()
        };
        let resolved = resolve_accessibility_settings(&Theme::default(), Some(&preferences));
        assert_eq!(resolved.font_scale, 0.8);
    }

    #[test]
    fn auto_include_defaults_to_true() {
        assert!(should_auto_include_accessibility_css(&Theme::default()));

        let theme = Theme {
            accessibility: Some(AccessibilitySettings {
                auto_include_in_generated_css: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!should_auto_include_accessibility_css(&theme));
    }
}
