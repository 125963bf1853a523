//! Curated theme sets for quick discovery and onboarding.

use crate::presets::{
    emerald_silver_theme, frutiger_aero_theme, navy_gold_theme, paper_ink_theme, rose_gold_theme,
    slate_cyan_theme,
};
use crate::types::Theme;

/// A named group of themes designed for a specific style or use-case.
#[derive(Clone, Debug)]
pub struct ThemeSet {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub themes: Vec<Theme>,
}

/// All available theme sets.
pub fn theme_sets() -> Vec<ThemeSet> {
    vec![
        ThemeSet {
            id: "starter",
            name: "Starter Collection",
            description: "Balanced themes for first-time adopters of Ktheme.",
            themes: vec![navy_gold_theme(), slate_cyan_theme(), paper_ink_theme()],
        },
        ThemeSet {
            id: "metallic-showcase",
            name: "Metallic Showcase",
            description: "Best themes for metallic gradients and premium UI accents.",
            themes: vec![navy_gold_theme(), emerald_silver_theme(), rose_gold_theme()],
        },
        ThemeSet {
            id: "readability",
            name: "Readability First",
            description: "Themes optimized for long-form reading and low-fatigue interfaces.",
            themes: vec![paper_ink_theme(), slate_cyan_theme()],
        },
        ThemeSet {
            id: "creative-studio",
            name: "Creative Studio",
            description: "Expressive palettes for branding, creative tooling, and media apps.",
            themes: vec![rose_gold_theme(), frutiger_aero_theme(), emerald_silver_theme()],
        },
    ]
}

/// Retrieve a theme set by id.
pub fn theme_set(id: &str) -> Option<ThemeSet> {
    theme_sets().into_iter().find(|set| set.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_theme;

    #[test]
    fn every_set_member_is_a_valid_theme() {
        for set in theme_sets() {
            assert!(!set.themes.is_empty(), "set {} is empty", set.id);
            for theme in &set.themes {
                let result = validate_theme(theme);
                assert!(
                    result.valid,
                    "set {} theme {} invalid: {:?}",
                    set.id, theme.metadata.id, result.errors
                );
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert!(theme_set("starter").is_some());
        assert!(theme_set("missing-set").is_none());
    }
}
