use ktheme_engine::{
    apply_all_expansion_packs, apply_expansion_pack, expansion_packs, paper_ink_theme,
    validate_theme, EXPANSION_PACK_PLANS,
};

#[test]
fn implements_every_expansion_plan_from_strategy() {
    let mut plan_ids: Vec<&str> = EXPANSION_PACK_PLANS.iter().map(|plan| plan.id).collect();
    let mut implementation_ids: Vec<&str> =
        expansion_packs().iter().map(|pack| pack.id).collect();
    plan_ids.sort_unstable();
    implementation_ids.sort_unstable();

    assert_eq!(implementation_ids, plan_ids);
}

#[test]
fn applies_a_single_pack_without_mutating_the_source_theme() {
    let theme = paper_ink_theme();
    let snapshot = theme.clone();

    let expanded = apply_expansion_pack(&theme, "accessibility-pack").unwrap();

    assert!(expanded
        .metadata
        .tags
        .contains(&"expansion-pack".to_string()));
    assert!(expanded
        .metadata
        .tags
        .contains(&"accessibility-pack".to_string()));
    assert!(expanded.metadata.name.contains("A11y"));
    assert!(expanded
        .effects
        .as_ref()
        .unwrap()
        .focus_ring
        .as_ref()
        .unwrap()
        .enabled);

    assert_eq!(theme, snapshot);
}

#[test]
fn applies_all_packs_and_returns_a_keyed_map() {
    let theme = paper_ink_theme();
    let all = apply_all_expansion_packs(&theme).unwrap();

    assert_eq!(all.len(), EXPANSION_PACK_PLANS.len());
    assert_eq!(
        all["motion-pack"]
            .effects
            .as_ref()
            .unwrap()
            .animations
            .as_ref()
            .unwrap()
            .reduced_motion_policy,
        Some(ktheme_engine::ReducedMotionPolicy::Reduce)
    );
    assert!(all["platform-pack"]
        .adaptation
        .as_ref()
        .unwrap()
        .assets
        .as_ref()
        .unwrap()
        .font_family_override
        .as_ref()
        .unwrap()
        .contains("Roboto"));
}

#[test]
fn does_not_duplicate_pack_label_when_applied_repeatedly() {
    let theme = paper_ink_theme();
    let once = apply_expansion_pack(&theme, "motion-pack").unwrap();
    let twice = apply_expansion_pack(&once, "motion-pack").unwrap();

    assert!(once.metadata.name.ends_with(" · Motion"));
    assert_eq!(twice.metadata.name.matches(" · Motion").count(), 1);
    assert_eq!(once.metadata.name, twice.metadata.name);
}

#[test]
fn unknown_pack_fails_with_exact_message() {
    let err = apply_expansion_pack(&paper_ink_theme(), "missing-pack").unwrap_err();
    assert_eq!(err.to_string(), "Unknown expansion pack: missing-pack");
}

#[test]
fn expanded_themes_remain_valid() {
    let theme = paper_ink_theme();
    for (id, expanded) in apply_all_expansion_packs(&theme).unwrap() {
        let result = validate_theme(&expanded);
        assert!(result.valid, "pack {id} broke the theme: {:?}", result.errors);
    }
}

#[test]
fn domain_pack_completes_semantic_pairs() {
    let expanded = apply_expansion_pack(&paper_ink_theme(), "domain-packs").unwrap();
    let roles = expanded
        .color_scheme
        .as_ref()
        .unwrap()
        .semantic_roles
        .as_ref()
        .unwrap();

    assert!(roles.success.is_some() && roles.on_success.is_some());
    assert!(roles.warning.is_some() && roles.on_warning.is_some());
    assert!(roles.info.is_some() && roles.on_info.is_some());
    // info inherits the theme's primary pair
    assert_eq!(
        roles.info,
        expanded.color_scheme.as_ref().unwrap().primary
    );
}

#[test]
fn localization_pack_appends_direction_safe_overrides() {
    let expanded = apply_expansion_pack(&paper_ink_theme(), "localization-pack").unwrap();
    let overrides = &expanded.adaptation.as_ref().unwrap().component_overrides;

    assert!(overrides
        .iter()
        .any(|o| o.selector.contains("[dir=\"rtl\"]")));
    assert!(expanded
        .typography
        .as_ref()
        .unwrap()
        .font_family
        .contains("Noto Sans"));
}
