//! Ktheme Engine
//!
//! Theme management for the Ktheme design system:
//!
//! - **Data model**: the theme entity graph shared across processes as JSON
//! - **Validation**: structural completeness, contrast-ratio policy and
//!   numeric-range checks with categorized errors/warnings
//! - **Registry**: register/lookup/active-theme state with adaptation
//!   derivation and JSON import/export
//! - **Runtime resolution**: reduced-motion effect resolution and layered
//!   accessibility policy merging
//! - **Expansion packs**: composable, idempotent theme transformations
//! - **Presets**: a built-in catalog of complete themes, curated sets and
//!   adaptation profiles
//!
//! # Quick Start
//!
//! ```
//! use ktheme_engine::{create_theme_engine, navy_gold_theme};
//!
//! let mut engine = create_theme_engine(true).unwrap();
//! engine.set_active_theme("navy-gold").unwrap();
//! assert_eq!(
//!     engine.get_active_theme().unwrap().metadata.name,
//!     navy_gold_theme().metadata.name
//! );
//! ```

pub mod accessibility;
pub mod adaptation;
pub mod effects;
pub mod engine;
pub mod error;
pub mod expansion;
pub mod media;
pub mod presets;
pub mod sets;
pub mod strategy;
pub mod types;
pub mod validate;

pub use accessibility::{resolve_accessibility_settings, should_auto_include_accessibility_css};
pub use adaptation::AdaptationPreset;
pub use engine::{create_theme_engine, RuntimeEffectOptions, ThemeEngine};
pub use error::ThemeError;
pub use expansion::{
    apply_all_expansion_packs, apply_expansion_pack, expansion_packs, ExpansionPack,
};
pub use media::{
    media_type_color, quick_access_card_alphas, QuickAccessCardAlphaTokens,
    QuickAccessCardAlphaValues,
};
pub use presets::{
    emerald_silver_theme, frutiger_aero_theme, navy_gold_theme, paper_ink_theme, preset_themes,
    rose_gold_theme, slate_cyan_theme,
};
pub use sets::{theme_set, theme_sets, ThemeSet};
pub use strategy::{
    create_theme_from_family, BestPracticeStandard, ExpansionPackPlan, RecognizableUiDesign,
    ThemeFamilyPlan, UseCasePlan, BEST_PRACTICE_STANDARDS, EXPANSION_PACK_PLANS,
    RECOGNIZABLE_UI_DESIGNS, THEME_FAMILY_PLANS, USE_CASE_PLANS,
};
pub use types::*;
pub use validate::validate_theme;
