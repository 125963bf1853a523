use ktheme_core::Color;
use ktheme_engine::{
    navy_gold_theme, AccessibilityRuntimePreferences, AdaptationPreset, AnimationEffect, Easing,
    PanelStyle, ReducedMotionPolicy, RuntimeEffectOptions, ShimmerEffect, ThemeEngine, ThemeError,
    TransitionEffect,
};

#[test]
fn registers_and_looks_up_presets() {
    let mut engine = ThemeEngine::new();
    engine.register_theme(navy_gold_theme()).unwrap();

    let theme = engine.get_theme("navy-gold").expect("registered");
    assert_eq!(theme.metadata.name, "Navy Gold");
    assert_eq!(engine.get_all_themes().len(), 1);
}

#[test]
fn registration_rejects_invalid_themes_with_full_error_list() {
    let mut engine = ThemeEngine::new();
    let mut broken = navy_gold_theme();
    broken.metadata.id.clear();
    broken.color_scheme.as_mut().unwrap().primary = None;

    let err = engine.register_theme(broken).unwrap_err();
    match err {
        ThemeError::InvalidTheme { errors } => {
            assert!(errors.contains(&"Theme ID is required".to_string()));
            assert!(errors.contains(&"Missing required color: primary".to_string()));
        }
        other => panic!("expected InvalidTheme, got {other:?}"),
    }
    assert!(engine.get_all_themes().is_empty());
}

#[test]
fn active_theme_follows_registration_and_removal() {
    let mut engine = ThemeEngine::new();
    engine.register_theme(navy_gold_theme()).unwrap();

    let err = engine.set_active_theme("missing").unwrap_err();
    assert_eq!(err.to_string(), "Theme not found: missing");

    engine.set_active_theme("navy-gold").unwrap();
    assert_eq!(
        engine.get_active_theme().unwrap().metadata.id,
        "navy-gold"
    );

    assert!(engine.remove_theme("navy-gold"));
    assert!(engine.get_active_theme().is_none());
    assert!(!engine.remove_theme("navy-gold"));
}

#[test]
fn creates_and_registers_adapted_themes_without_mutating_the_base() {
    let mut engine = ThemeEngine::new();
    engine.register_theme(navy_gold_theme()).unwrap();
    let before = engine.get_theme("navy-gold").unwrap().clone();

    let derived = engine
        .create_adapted_theme(
            "navy-gold",
            AdaptationPreset::FrutigerAero.adaptation(),
            Some("navy-gold-aero"),
        )
        .unwrap();

    assert_eq!(derived.metadata.id, "navy-gold-aero");
    assert_eq!(derived.metadata.name, "Navy Gold Adapted");
    assert_eq!(
        derived
            .adaptation
            .as_ref()
            .unwrap()
            .layout
            .as_ref()
            .unwrap()
            .panel_style,
        Some(PanelStyle::Glass)
    );
    assert!(engine.get_theme("navy-gold-aero").is_some());

    // base theme untouched
    assert_eq!(engine.get_theme("navy-gold").unwrap(), &before);
}

#[test]
fn adapted_theme_id_defaults_to_base_id_suffix() {
    let mut engine = ThemeEngine::new();
    engine.register_theme(navy_gold_theme()).unwrap();

    let derived = engine
        .create_adapted_theme("navy-gold", AdaptationPreset::Lcars.adaptation(), None)
        .unwrap();
    assert_eq!(derived.metadata.id, "navy-gold-adapted");
}

#[test]
fn adaptation_from_unregistered_base_fails() {
    let mut engine = ThemeEngine::new();
    let err = engine
        .create_adapted_theme("ghost", AdaptationPreset::Lcars.adaptation(), None)
        .unwrap_err();
    assert_eq!(err.to_string(), "Theme not found: ghost");
}

#[test]
fn resolves_effects_for_reduced_motion_users() {
    let engine = ThemeEngine::new();
    let mut theme = navy_gold_theme();
    let effects = theme.effects.as_mut().unwrap();
    effects.shimmer = Some(ShimmerEffect {
        enabled: true,
        speed: 3.0,
        intensity: 0.6,
        angle: 120.0,
    });
    effects.transitions = Some(TransitionEffect {
        enabled: true,
        duration: 300.0,
        properties: vec!["all".to_string()],
    });
    effects.animations = Some(AnimationEffect {
        enabled: true,
        duration: 400.0,
        easing: Easing::EaseInOut,
        reduced_motion_policy: Some(ReducedMotionPolicy::Disable),
    });

    let resolved = engine
        .resolve_effects_for_runtime(
            &theme,
            RuntimeEffectOptions {
                prefers_reduced_motion: true,
            },
        )
        .unwrap();

    assert!(!resolved.shimmer.as_ref().unwrap().enabled);
    assert!(!resolved.animations.as_ref().unwrap().enabled);
    assert!(resolved.transitions.as_ref().unwrap().duration < 300.0);

    // the theme's own effects are untouched
    assert!(theme.effects.as_ref().unwrap().shimmer.as_ref().unwrap().enabled);
}

#[test]
fn reduce_policy_scales_duration_with_a_floor() {
    let engine = ThemeEngine::new();
    let mut theme = navy_gold_theme();
    theme.effects.as_mut().unwrap().animations = Some(AnimationEffect {
        enabled: true,
        duration: 400.0,
        easing: Easing::Ease,
        reduced_motion_policy: Some(ReducedMotionPolicy::Reduce),
    });

    let resolved = engine
        .resolve_effects_for_runtime(
            &theme,
            RuntimeEffectOptions {
                prefers_reduced_motion: true,
            },
        )
        .unwrap();
    assert_eq!(resolved.animations.as_ref().unwrap().duration, 140.0);

    // short durations floor at 80ms
    theme.effects.as_mut().unwrap().animations.as_mut().unwrap().duration = 100.0;
    let resolved = engine
        .resolve_effects_for_runtime(
            &theme,
            RuntimeEffectOptions {
                prefers_reduced_motion: true,
            },
        )
        .unwrap();
    assert_eq!(resolved.animations.as_ref().unwrap().duration, 80.0);
}

#[test]
fn none_policy_leaves_animations_untouched() {
    let engine = ThemeEngine::new();
    let mut theme = navy_gold_theme();
    theme.effects.as_mut().unwrap().animations = Some(AnimationEffect {
        enabled: true,
        duration: 400.0,
        easing: Easing::Ease,
        reduced_motion_policy: Some(ReducedMotionPolicy::None),
    });

    let resolved = engine
        .resolve_effects_for_runtime(
            &theme,
            RuntimeEffectOptions {
                prefers_reduced_motion: true,
            },
        )
        .unwrap();
    let animations = resolved.animations.as_ref().unwrap();
    assert!(animations.enabled);
    assert_eq!(animations.duration, 400.0);
}

#[test]
fn themes_without_effects_resolve_to_none() {
    let engine = ThemeEngine::new();
    let mut theme = navy_gold_theme();
    theme.effects = None;
    assert!(engine
        .resolve_effects_for_runtime(&theme, RuntimeEffectOptions::default())
        .is_none());
}

#[test]
fn accessibility_resolution_merges_live_preferences() {
    let engine = ThemeEngine::new();
    let theme = navy_gold_theme();

    let resolved = engine.resolve_accessibility_for_runtime(
        &theme,
        Some(&AccessibilityRuntimePreferences {
            prefers_reduced_motion: Some(true),
            user_font_scale: Some(0.5),
            ..Default::default()
        }),
    );
    assert!(resolved.reduced_motion);
    assert_eq!(resolved.font_scale, 0.8);
}

#[test]
fn export_import_round_trip_preserves_the_theme() {
    let mut engine = ThemeEngine::new();
    engine.register_theme(navy_gold_theme()).unwrap();

    let json = engine.export_theme("navy-gold").unwrap();
    let mut second = ThemeEngine::new();
    let imported = second.import_theme(&json).unwrap();

    assert_eq!(&imported, engine.get_theme("navy-gold").unwrap());
    assert!(second.get_theme("navy-gold").is_some());
}

#[test]
fn import_rejects_corrupt_json_without_partial_registration() {
    let mut engine = ThemeEngine::new();
    let err = engine.import_theme("{not json").unwrap_err();
    assert!(err.to_string().starts_with("Failed to import theme:"));
    assert!(engine.get_all_themes().is_empty());
}

#[test]
fn import_rejects_invalid_themes() {
    let mut engine = ThemeEngine::new();
    let err = engine
        .import_theme(r#"{"metadata":{"id":"x","name":"x","version":"1"},"darkMode":true}"#)
        .unwrap_err();
    match err {
        ThemeError::InvalidTheme { errors } => {
            assert!(errors.contains(&"Color scheme is required".to_string()));
        }
        other => panic!("expected InvalidTheme, got {other:?}"),
    }
    assert!(engine.get_all_themes().is_empty());
}

#[test]
fn export_all_themes_is_a_json_array_in_registration_order() {
    let mut engine = ktheme_engine::create_theme_engine(true).unwrap();
    engine.set_active_theme("navy-gold").unwrap();

    let json = engine.export_all_themes().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let themes = parsed.as_array().unwrap();
    assert_eq!(themes.len(), engine.get_all_themes().len());
    assert_eq!(themes[0]["metadata"]["id"], "navy-gold");
}

#[test]
fn search_by_tags_is_any_match() {
    let engine = ktheme_engine::create_theme_engine(true).unwrap();

    let metallic = engine.search_by_tags(&["metallic"]);
    assert!(metallic.len() >= 3);

    let mixed = engine.search_by_tags(&["readability", "glass"]);
    let ids: Vec<&str> = mixed.iter().map(|t| t.metadata.id.as_str()).collect();
    assert!(ids.contains(&"paper-ink"));
    assert!(ids.contains(&"frutiger-aero"));

    assert!(engine.search_by_tags(&["no-such-tag"]).is_empty());
}

#[test]
fn search_by_name_matches_name_and_description_case_insensitively() {
    let engine = ktheme_engine::create_theme_engine(true).unwrap();

    let by_name = engine.search_by_name("NAVY");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].metadata.id, "navy-gold");

    let by_description = engine.search_by_name("legibility");
    assert!(by_description.iter().any(|t| t.metadata.id == "paper-ink"));
}

#[test]
fn registering_the_same_id_overwrites() {
    let mut engine = ThemeEngine::new();
    engine.register_theme(navy_gold_theme()).unwrap();

    let mut updated = navy_gold_theme();
    updated.metadata.description = "Updated".to_string();
    engine.register_theme(updated).unwrap();

    assert_eq!(engine.get_all_themes().len(), 1);
    assert_eq!(
        engine.get_theme("navy-gold").unwrap().metadata.description,
        "Updated"
    );
}

#[test]
fn malformed_scheme_color_makes_validation_fail_gracefully() {
    let engine = ThemeEngine::new();
    let mut theme = navy_gold_theme();
    theme.color_scheme.as_mut().unwrap().on_surface = Some(Color::hex("#ZZZZZZ"));

    let result = engine.validate_theme(&theme);
    assert!(!result.valid);
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("surface/onSurface")));
}
