//! Theme registry and derivation operations
//!
//! `ThemeEngine` is an owned instance, not a process-wide singleton. Each
//! logical session owns its engine; callers needing concurrent access
//! serialize externally. The registry is insertion-ordered so listing,
//! search and bulk export stay deterministic.

use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;

use crate::accessibility::resolve_accessibility_settings;
use crate::error::ThemeError;
use crate::types::{
    AccessibilityRuntimePreferences, ReducedMotionPolicy, ResolvedAccessibilitySettings, Theme,
    ThemeAdaptation, ThemeValidationResult, VisualEffects,
};
use crate::validate::validate_theme;

/// Runtime conditions that reshape a theme's effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeEffectOptions {
    pub prefers_reduced_motion: bool,
}

/// Current time as an ISO-8601 string, the timestamp format of the shared
/// theme JSON schema.
pub(crate) fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Registry of themes keyed by `metadata.id`, plus an active-theme
/// reference.
#[derive(Debug, Default)]
pub struct ThemeEngine {
    themes: IndexMap<String, Theme>,
    active_theme: Option<String>,
}

impl ThemeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme, validating first. On validation failure nothing
    /// is applied and the full error list is returned. An already
    /// registered id is overwritten.
    pub fn register_theme(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let validation = self.validate_theme(&theme);
        if !validation.valid {
            return Err(ThemeError::InvalidTheme {
                errors: validation.errors,
            });
        }

        tracing::debug!(id = %theme.metadata.id, "registering theme");
        self.themes.insert(theme.metadata.id.clone(), theme);
        Ok(())
    }

    /// Validate a theme without registering it.
    pub fn validate_theme(&self, theme: &Theme) -> ThemeValidationResult {
        validate_theme(theme)
    }

    pub fn get_theme(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    /// All registered themes in registration order.
    pub fn get_all_themes(&self) -> Vec<&Theme> {
        self.themes.values().collect()
    }

    /// Make a registered theme active.
    pub fn set_active_theme(&mut self, id: &str) -> Result<(), ThemeError> {
        if !self.themes.contains_key(id) {
            return Err(ThemeError::ThemeNotFound(id.to_string()));
        }
        tracing::debug!(id, "activating theme");
        self.active_theme = Some(id.to_string());
        Ok(())
    }

    pub fn get_active_theme(&self) -> Option<&Theme> {
        self.active_theme
            .as_deref()
            .and_then(|id| self.themes.get(id))
    }

    /// Remove a theme; clears the active reference if it matches.
    /// Returns whether the id was registered.
    pub fn remove_theme(&mut self, id: &str) -> bool {
        if self.active_theme.as_deref() == Some(id) {
            self.active_theme = None;
        }
        self.themes.shift_remove(id).is_some()
    }

    /// Derive a theme from a registered base by replacing its adaptation
    /// profile. The derivative is validated and registered; the base theme
    /// is never mutated.
    pub fn create_adapted_theme(
        &mut self,
        base_theme_id: &str,
        adaptation: ThemeAdaptation,
        new_theme_id: Option<&str>,
    ) -> Result<Theme, ThemeError> {
        let base = self
            .themes
            .get(base_theme_id)
            .ok_or_else(|| ThemeError::ThemeNotFound(base_theme_id.to_string()))?;

        let mut derived = base.clone();
        derived.metadata.id = new_theme_id
            .map(str::to_string)
            .unwrap_or_else(|| format!("{base_theme_id}-adapted"));
        derived.metadata.name = format!("{} Adapted", base.metadata.name);
        derived.metadata.updated_at = iso_now();
        derived.adaptation = Some(adaptation);

        self.register_theme(derived.clone())?;
        Ok(derived)
    }

    /// Resolve effects for runtime conditions such as a reduced-motion
    /// preference. Returns `None` when the theme declares no effects.
    ///
    /// Under reduced motion: animations honor their `reducedMotionPolicy`
    /// (`disable` turns them off, `reduce`, the default, scales duration
    /// to `max(80, 0.35×)`), enabled transitions scale to `max(80, 0.4×)`,
    /// and shimmer is unconditionally disabled.
    pub fn resolve_effects_for_runtime(
        &self,
        theme: &Theme,
        options: RuntimeEffectOptions,
    ) -> Option<VisualEffects> {
        let mut resolved = theme.effects.clone()?;

        if options.prefers_reduced_motion {
            if let Some(animations) = resolved.animations.as_mut() {
                if animations.enabled {
                    let policy = animations
                        .reduced_motion_policy
                        .unwrap_or(ReducedMotionPolicy::Reduce);
                    match policy {
                        ReducedMotionPolicy::Disable => animations.enabled = false,
                        ReducedMotionPolicy::Reduce => {
                            animations.duration = (animations.duration * 0.35).round().max(80.0);
                        }
                        ReducedMotionPolicy::None => {}
                    }
                }
            }

            if let Some(transitions) = resolved.transitions.as_mut() {
                if transitions.enabled {
                    transitions.duration = (transitions.duration * 0.4).round().max(80.0);
                }
            }

            if let Some(shimmer) = resolved.shimmer.as_mut() {
                if shimmer.enabled {
                    shimmer.enabled = false;
                }
            }
        }

        Some(resolved)
    }

    /// Resolve a theme's accessibility policy against live preferences.
    pub fn resolve_accessibility_for_runtime(
        &self,
        theme: &Theme,
        preferences: Option<&AccessibilityRuntimePreferences>,
    ) -> ResolvedAccessibilitySettings {
        resolve_accessibility_settings(theme, preferences)
    }

    /// Export a registered theme as pretty-printed JSON.
    pub fn export_theme(&self, id: &str) -> Result<String, ThemeError> {
        let theme = self
            .themes
            .get(id)
            .ok_or_else(|| ThemeError::ThemeNotFound(id.to_string()))?;
        Ok(serde_json::to_string_pretty(theme)?)
    }

    /// Import a theme from JSON. Runs full registration, so corrupt or
    /// invalid JSON fails with a descriptive error and nothing is
    /// partially applied.
    pub fn import_theme(&mut self, json: &str) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(json)?;
        self.register_theme(theme.clone())?;
        Ok(theme)
    }

    /// Export every registered theme as a JSON array.
    pub fn export_all_themes(&self) -> Result<String, ThemeError> {
        let themes = self.get_all_themes();
        Ok(serde_json::to_string_pretty(&themes)?)
    }

    /// Themes whose tag set intersects the given tags.
    pub fn search_by_tags(&self, tags: &[&str]) -> Vec<&Theme> {
        self.themes
            .values()
            .filter(|theme| {
                theme
                    .metadata
                    .tags
                    .iter()
                    .any(|tag| tags.contains(&tag.as_str()))
            })
            .collect()
    }

    /// Case-insensitive substring match against name or description.
    pub fn search_by_name(&self, query: &str) -> Vec<&Theme> {
        let lower_query = query.to_lowercase();
        self.themes
            .values()
            .filter(|theme| {
                theme.metadata.name.to_lowercase().contains(&lower_query)
                    || theme
                        .metadata
                        .description
                        .to_lowercase()
                        .contains(&lower_query)
            })
            .collect()
    }
}

/// Build an engine, optionally preloaded with the preset catalog.
pub fn create_theme_engine(include_presets: bool) -> Result<ThemeEngine, ThemeError> {
    let mut engine = ThemeEngine::new();
    if include_presets {
        for theme in crate::presets::preset_themes() {
            engine.register_theme(theme)?;
        }
    }
    Ok(engine)
}
