//! App-wide adaptation presets for layout and icon transformation.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::types::{
    ComponentOverride, CornerStyle, Density, IconAdaptation, IconCorner, IconFamily, IconStyle,
    LayoutAdaptation, NavigationStyle, PanelStyle, StyleValue, ThemeAdaptation,
};

/// Built-in adaptation preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdaptationPreset {
    /// Glassy, rounded, blur-heavy chrome.
    FrutigerAero,
    /// Flat, sharp, tile-first pivot layout.
    WindowsPhoneMetro,
    /// Pill-shaped rails and dense command panels.
    Lcars,
}

impl AdaptationPreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::FrutigerAero => "frutiger-aero",
            Self::WindowsPhoneMetro => "windows-phone-metro",
            Self::Lcars => "lcars",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FrutigerAero => "Frutiger Aero",
            Self::WindowsPhoneMetro => "Windows Phone Metro",
            Self::Lcars => "LCARS",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [AdaptationPreset] {
        const PRESETS: [AdaptationPreset; 3] = [
            AdaptationPreset::FrutigerAero,
            AdaptationPreset::WindowsPhoneMetro,
            AdaptationPreset::Lcars,
        ];
        &PRESETS
    }

    /// Build the adaptation profile for this preset.
    pub fn adaptation(self) -> ThemeAdaptation {
        match self {
            Self::FrutigerAero => frutiger_aero(),
            Self::WindowsPhoneMetro => windows_phone_metro(),
            Self::Lcars => lcars(),
        }
    }
}

impl Display for AdaptationPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn styles(entries: &[(&str, StyleValue)]) -> IndexMap<String, StyleValue> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn text(value: &str) -> StyleValue {
    StyleValue::Text(value.to_string())
}

fn number(value: f64) -> StyleValue {
    StyleValue::Number(value)
}

fn frutiger_aero() -> ThemeAdaptation {
    ThemeAdaptation {
        layout: Some(LayoutAdaptation {
            density: Density::Comfortable,
            corner_style: CornerStyle::Rounded,
            spacing_scale: 1.1,
            panel_style: Some(PanelStyle::Glass),
            navigation_style: Some(NavigationStyle::Tabs),
        }),
        icons: Some(IconAdaptation {
            family: IconFamily::Custom,
            style: IconStyle::Duotone,
            size_scale: 1.1,
            stroke_width: Some(1.4),
            corner_style: Some(IconCorner::Rounded),
        }),
        component_overrides: vec![
            ComponentOverride {
                selector: ".app-shell".to_string(),
                styles: styles(&[
                    ("backdrop-filter", text("blur(12px) saturate(140%)")),
                    ("border-radius", number(18.0)),
                    ("box-shadow", text("0 10px 28px rgba(0, 0, 0, 0.22)")),
                ]),
            },
            ComponentOverride {
                selector: ".app-toolbar".to_string(),
                styles: styles(&[("min-height", number(68.0)), ("padding-inline", number(20.0))]),
            },
        ],
        assets: None,
    }
}

fn windows_phone_metro() -> ThemeAdaptation {
    ThemeAdaptation {
        layout: Some(LayoutAdaptation {
            density: Density::Spacious,
            corner_style: CornerStyle::Sharp,
            spacing_scale: 1.25,
            panel_style: Some(PanelStyle::Flat),
            navigation_style: Some(NavigationStyle::Pivot),
        }),
        icons: Some(IconAdaptation {
            family: IconFamily::Fluent,
            style: IconStyle::Line,
            size_scale: 1.0,
            stroke_width: Some(1.6),
            corner_style: Some(IconCorner::Sharp),
        }),
        component_overrides: vec![
            ComponentOverride {
                selector: ".tile-grid".to_string(),
                styles: styles(&[("gap", number(14.0)), ("grid-auto-rows", number(92.0))]),
            },
            ComponentOverride {
                selector: ".tile".to_string(),
                styles: styles(&[
                    ("border-radius", number(0.0)),
                    ("text-transform", text("uppercase")),
                ]),
            },
        ],
        assets: None,
    }
}

fn lcars() -> ThemeAdaptation {
    ThemeAdaptation {
        layout: Some(LayoutAdaptation {
            density: Density::Compact,
            corner_style: CornerStyle::Pill,
            spacing_scale: 0.92,
            panel_style: Some(PanelStyle::Flat),
            navigation_style: Some(NavigationStyle::Rail),
        }),
        icons: Some(IconAdaptation {
            family: IconFamily::Custom,
            style: IconStyle::Filled,
            size_scale: 0.95,
            stroke_width: Some(2.0),
            corner_style: Some(IconCorner::Rounded),
        }),
        component_overrides: vec![
            ComponentOverride {
                selector: ".lcars-bar".to_string(),
                styles: styles(&[
                    ("border-top-left-radius", number(48.0)),
                    ("border-bottom-left-radius", number(48.0)),
                    ("padding-inline", number(16.0)),
                    ("letter-spacing", number(1.1)),
                ]),
            },
            ComponentOverride {
                selector: ".lcars-panel".to_string(),
                styles: styles(&[
                    ("display", text("grid")),
                    ("grid-template-columns", text("220px 1fr")),
                    ("gap", number(10.0)),
                ]),
            },
        ],
        assets: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_expected_presets() {
        let mut ids: Vec<&str> = AdaptationPreset::all().iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["frutiger-aero", "lcars", "windows-phone-metro"]);
    }

    #[test]
    fn every_preset_has_valid_scales_and_selectors() {
        for preset in AdaptationPreset::all() {
            let adaptation = preset.adaptation();
            let layout = adaptation.layout.expect("layout");
            assert!(layout.spacing_scale > 0.0, "preset {preset:?}");
            let icons = adaptation.icons.expect("icons");
            assert!(icons.size_scale > 0.0, "preset {preset:?}");
            for component_override in &adaptation.component_overrides {
                assert!(!component_override.selector.is_empty());
            }
        }
    }

    #[test]
    fn metro_preset_is_sharp_and_pivoting() {
        let adaptation = AdaptationPreset::WindowsPhoneMetro.adaptation();
        let layout = adaptation.layout.unwrap();
        assert_eq!(layout.corner_style, CornerStyle::Sharp);
        assert_eq!(layout.navigation_style, Some(NavigationStyle::Pivot));
    }
}
