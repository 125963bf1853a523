//! Roadmap planning assets and family concept themes
//!
//! Strategic catalogs (theme families, expansion packs, use cases, best
//! practices, recognizable UI designs) plus a generator that maps a family
//! plan to an immediately usable concept theme. The expansion-pack plan
//! table is the source of truth for the pack coverage invariant.

use ktheme_core::{adjust_hue, adjust_saturation, generate_palette_from_seed, Color};

use crate::engine::iso_now;
use crate::error::ThemeError;
use crate::presets::paper_ink_theme;
use crate::types::{
    AnimationEffect, BlendMode, BlurEffect, ColorScheme, ComponentOverride, CornerStyle,
    CornerTokens, Density, DensityTokens, DesignTokens, Easing, GradientEffect, GradientStop,
    IconAdaptation, IconFamily, IconStyle, LayoutAdaptation, MetallicEffect, MetallicVariant,
    NavigationStyle, NoiseEffect, OverlayEffect, PanelStyle, ShadowEffect, ShimmerEffect,
    StyleValue, Theme, ThemeAdaptation, TransitionEffect, Typography,
};
use crate::validate::validate_theme;

/// A strategic theme family recommended for roadmap expansion.
#[derive(Clone, Copy, Debug)]
pub struct ThemeFamilyPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub signature_traits: &'static [&'static str],
}

/// A planned expansion pack.
#[derive(Clone, Copy, Debug)]
pub struct ExpansionPackPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub delivers: &'static [&'static str],
}

/// A common product use-case for adoption plans.
#[derive(Clone, Copy, Debug)]
pub struct UseCasePlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct BestPracticeStandard {
    pub id: &'static str,
    pub title: &'static str,
    pub standard: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct RecognizableUiDesign {
    pub id: &'static str,
    pub name: &'static str,
    pub signature_layout: &'static str,
    pub primary_use: &'static str,
}

/// Strategic theme families recommended for Ktheme roadmap expansion.
pub const THEME_FAMILY_PLANS: [ThemeFamilyPlan; 10] = [
    ThemeFamilyPlan {
        id: "neo-minimal",
        name: "Neo-Minimal",
        description: "High whitespace with soft neutral surfaces and subtle depth.",
        signature_traits: &["low-noise palettes", "quiet elevation", "editorial spacing"],
    },
    ThemeFamilyPlan {
        id: "brutalist-ui",
        name: "Brutalist UI",
        description: "Hard-edge typography and high-contrast visual framing.",
        signature_traits: &["hard borders", "bold contrast", "monospace accents"],
    },
    ThemeFamilyPlan {
        id: "glass-frost",
        name: "Glass & Frost",
        description: "Translucent layers with blur and strict readability guardrails.",
        signature_traits: &["frosted panels", "soft highlights", "edge glow"],
    },
    ThemeFamilyPlan {
        id: "retro-terminal",
        name: "Retro Terminal",
        description: "CRT-inspired interface cues and nostalgia-focused typography.",
        signature_traits: &["phosphor colors", "scanline texture", "pixel-driven details"],
    },
    ThemeFamilyPlan {
        id: "editorial-magazine",
        name: "Editorial / Magazine",
        description: "Type-led layout systems with strong hierarchy and rhythm.",
        signature_traits: &["serif display pairing", "modular grid", "pull-quote components"],
    },
    ThemeFamilyPlan {
        id: "material-plus",
        name: "Material-Plus",
        description: "Elevation-first design with richer motion primitives.",
        signature_traits: &["tokenized depth", "motion scales", "component state clarity"],
    },
    ThemeFamilyPlan {
        id: "enterprise-calm",
        name: "Enterprise Calm",
        description: "Muted, data-dense interface defaults for operations tooling.",
        signature_traits: &["low-saturation surfaces", "dense tables", "stable motion"],
    },
    ThemeFamilyPlan {
        id: "playful-consumer",
        name: "Playful Consumer",
        description: "Rounded, expressive visual language optimized for engagement.",
        signature_traits: &["gradient accents", "friendly radii", "playful iconography"],
    },
    ThemeFamilyPlan {
        id: "luxury-dark",
        name: "Luxury Dark",
        description: "Deep dark palettes with metallic premium accents.",
        signature_traits: &["rich blacks", "gold/silver accents", "hero-driven contrast"],
    },
    ThemeFamilyPlan {
        id: "nature-organic",
        name: "Nature / Organic",
        description: "Earth-tone palettes and softer, tactile UI components.",
        signature_traits: &["organic curves", "mineral palettes", "paper-like texture"],
    },
];

/// Planned expansion packs to accelerate practical adoption.
pub const EXPANSION_PACK_PLANS: [ExpansionPackPlan; 10] = [
    ExpansionPackPlan {
        id: "domain-packs",
        name: "Domain Packs",
        description: "Verticalized theme tuning for key industries.",
        delivers: &["fintech pack", "healthcare pack", "education pack", "gov pack"],
    },
    ExpansionPackPlan {
        id: "localization-pack",
        name: "Localization Pack",
        description: "Locale and writing-system aware defaults.",
        delivers: &["RTL fallbacks", "CJK type ramps", "script-aware spacing"],
    },
    ExpansionPackPlan {
        id: "accessibility-pack",
        name: "Accessibility Pack",
        description: "AA/AAA-certified color and focus recipes.",
        delivers: &[
            "contrast-safe palettes",
            "focus ring presets",
            "high-legibility density",
        ],
    },
    ExpansionPackPlan {
        id: "motion-pack",
        name: "Motion Pack",
        description: "Intent-led motion primitives with reduced-motion variants.",
        delivers: &["microinteraction tokens", "easing maps", "reduced motion overrides"],
    },
    ExpansionPackPlan {
        id: "data-viz-pack",
        name: "Data Viz Pack",
        description: "Visualization-ready color semantics and chart defaults.",
        delivers: &["chart palettes", "series state tokens", "annotation emphasis rules"],
    },
    ExpansionPackPlan {
        id: "email-docs-pack",
        name: "Email + Docs Pack",
        description: "Consistent theming across product and generated communications.",
        delivers: &["email-safe tokens", "docs styling map", "print-friendly presets"],
    },
    ExpansionPackPlan {
        id: "seasonal-pack",
        name: "Seasonal / Campaign Pack",
        description: "Time-boxed visual overlays that do not mutate base tokens.",
        delivers: &["holiday overlays", "campaign accents", "rollback-safe deltas"],
    },
    ExpansionPackPlan {
        id: "widget-skin-pack",
        name: "Widget Skin Pack",
        description: "Theming profiles for embedded and white-label widgets.",
        delivers: &[
            "host-safe CSS vars",
            "iframe-friendly styles",
            "compact density defaults",
        ],
    },
    ExpansionPackPlan {
        id: "platform-pack",
        name: "Platform Pack",
        description: "Token adapters for web, mobile, and desktop runtimes.",
        delivers: &[
            "native mapping tables",
            "platform defaults",
            "cross-surface parity checks",
        ],
    },
    ExpansionPackPlan {
        id: "ai-ui-pack",
        name: "AI UI Pack",
        description: "Conversation, assistant, and automation-oriented visual tokens.",
        delivers: &[
            "chat surfaces",
            "assistant card styles",
            "confidence/status semantics",
        ],
    },
];

/// Common product use-cases for Ktheme adoption plans.
pub const USE_CASE_PLANS: [UseCasePlan; 5] = [
    UseCasePlan {
        id: "white-label-saas",
        name: "White-label SaaS",
        description: "Tenant-scoped branding with governed semantic token contracts.",
    },
    UseCasePlan {
        id: "post-merger-rebrand",
        name: "Rapid rebrand after M&A",
        description: "Token-level brand migration without full component rewrites.",
    },
    UseCasePlan {
        id: "public-sector-a11y",
        name: "Accessibility-first public sector apps",
        description: "Compliance-led defaults for procurement and citizen services.",
    },
    UseCasePlan {
        id: "multi-product-system",
        name: "Multi-product design system alignment",
        description: "Shared semantics across dashboard, docs, and admin surfaces.",
    },
    UseCasePlan {
        id: "low-code-theme-config",
        name: "Theme-as-configuration for low-code builders",
        description: "Runtime skinning for generated apps and embedded experiences.",
    },
];

pub const BEST_PRACTICE_STANDARDS: [BestPracticeStandard; 20] = [
    BestPracticeStandard {
        id: "semantic-first",
        title: "Use semantic tokens first",
        standard: "Prioritize semantic aliases over raw palette values.",
    },
    BestPracticeStandard {
        id: "token-layering",
        title: "Separate core and component tokens",
        standard: "Keep primitive palettes independent from component-level tokens.",
    },
    BestPracticeStandard {
        id: "contrast-budget",
        title: "Lock contrast budgets",
        standard: "Require AA baseline and AAA for critical workflows.",
    },
    BestPracticeStandard {
        id: "dark-mode-native",
        title: "Design dark mode natively",
        standard: "Ship light and dark themes with equal first-class support.",
    },
    BestPracticeStandard {
        id: "type-ramp",
        title: "Define typography ramps by role",
        standard: "Maintain display, heading, body, and caption scale consistency.",
    },
    BestPracticeStandard {
        id: "spacing-scale",
        title: "Adopt 4/8 spacing scale",
        standard: "Enforce spacing through linting and snapshot reviews.",
    },
    BestPracticeStandard {
        id: "motion-standard",
        title: "Standardize motion intent",
        standard: "Define duration and easing by intent class.",
    },
    BestPracticeStandard {
        id: "reduced-motion",
        title: "Ship reduced-motion variants",
        standard: "Every animated pattern must have an accessible fallback.",
    },
    BestPracticeStandard {
        id: "density-modes",
        title: "Support density modes",
        standard: "Expose comfortable, compact, and dense modes as tokens.",
    },
    BestPracticeStandard {
        id: "state-consistency",
        title: "Normalize state tokens",
        standard: "Maintain explicit hover, focus, pressed, and disabled semantics.",
    },
    BestPracticeStandard {
        id: "elevation-map",
        title: "Use elevation maps",
        standard: "Document depth hierarchy for every surface tier.",
    },
    BestPracticeStandard {
        id: "focus-visibility",
        title: "Guarantee focus visibility",
        standard: "Never rely on color alone for focus indicators.",
    },
    BestPracticeStandard {
        id: "versioning",
        title: "Version tokens semantically",
        standard: "Publish major/minor/patch changes with migrations.",
    },
    BestPracticeStandard {
        id: "runtime-fallback",
        title: "Enable runtime fallback cascade",
        standard: "Ensure unresolved tokens degrade predictably.",
    },
    BestPracticeStandard {
        id: "extreme-content",
        title: "Test content extremes",
        standard: "Validate with long strings, empty states, and error-heavy data.",
    },
    BestPracticeStandard {
        id: "contract-tests",
        title: "Add theme contract tests",
        standard: "Protect required token coverage with automated checks.",
    },
    BestPracticeStandard {
        id: "status-vs-brand",
        title: "Decouple status and brand colors",
        standard: "Keep success/warning/error independent from brand accents.",
    },
    BestPracticeStandard {
        id: "usage-guides",
        title: "Document do/don't usage",
        standard: "Provide intent guidance for each token cluster.",
    },
    BestPracticeStandard {
        id: "visual-regression",
        title: "Run screenshot diffs in CI",
        standard: "Track cross-theme visual regressions continuously.",
    },
    BestPracticeStandard {
        id: "governance",
        title: "Publish governance rules",
        standard: "Define ownership, review gates, and deprecation policy.",
    },
];

pub const RECOGNIZABLE_UI_DESIGNS: [RecognizableUiDesign; 20] = [
    RecognizableUiDesign {
        id: "dashboard-saas",
        name: "Dashboard SaaS",
        signature_layout: "KPI cards + left nav + filter toolbar",
        primary_use: "Operations and analytics products",
    },
    RecognizableUiDesign {
        id: "kanban",
        name: "Kanban Board",
        signature_layout: "Swimlanes with draggable cards and WIP limits",
        primary_use: "Task and project workflows",
    },
    RecognizableUiDesign {
        id: "inbox-client",
        name: "Inbox / Mail Client",
        signature_layout: "Thread list + message pane split view",
        primary_use: "Communication-heavy tools",
    },
    RecognizableUiDesign {
        id: "chat-assistant",
        name: "Chat Assistant",
        signature_layout: "Conversation stream + composer + tool result cards",
        primary_use: "AI copilots and support bots",
    },
    RecognizableUiDesign {
        id: "ecommerce-storefront",
        name: "E-commerce Storefront",
        signature_layout: "Hero banner + product grid + sticky cart",
        primary_use: "Direct-to-consumer shopping",
    },
    RecognizableUiDesign {
        id: "checkout-flow",
        name: "Checkout Flow",
        signature_layout: "Stepper + form sections + order summary rail",
        primary_use: "Payments and purchasing funnels",
    },
    RecognizableUiDesign {
        id: "music-player",
        name: "Music Player",
        signature_layout: "Now-playing panel + queue + transport controls",
        primary_use: "Media playback interfaces",
    },
    RecognizableUiDesign {
        id: "video-streaming",
        name: "Video Streaming UI",
        signature_layout: "Poster rails + detail modal + playback controls",
        primary_use: "Content discovery and playback",
    },
    RecognizableUiDesign {
        id: "social-feed",
        name: "Social Feed",
        signature_layout: "Composer + card feed + interaction drawer",
        primary_use: "Community and social apps",
    },
    RecognizableUiDesign {
        id: "calendar-planner",
        name: "Calendar Planner",
        signature_layout: "Month/week/day switch with event overlays",
        primary_use: "Scheduling and productivity",
    },
    RecognizableUiDesign {
        id: "gantt-timeline",
        name: "Project Timeline / Gantt",
        signature_layout: "Dependency bars + milestones + zoom axis",
        primary_use: "Program planning",
    },
    RecognizableUiDesign {
        id: "crm-pipeline",
        name: "CRM Pipeline",
        signature_layout: "Stage columns + deal cards + forecast widgets",
        primary_use: "Sales tracking",
    },
    RecognizableUiDesign {
        id: "pos-terminal",
        name: "POS Terminal",
        signature_layout: "Item keypad + cart panel + payment controls",
        primary_use: "Retail and in-person checkout",
    },
    RecognizableUiDesign {
        id: "admin-console",
        name: "Admin Settings Console",
        signature_layout: "Nested settings tabs + policy tables + audit logs",
        primary_use: "Configuration-heavy platforms",
    },
    RecognizableUiDesign {
        id: "data-workbench",
        name: "Data Table Workbench",
        signature_layout: "Pinned columns + bulk action toolbar + query strip",
        primary_use: "Analyst and back-office tooling",
    },
    RecognizableUiDesign {
        id: "docs-portal",
        name: "Knowledge Base / Docs Portal",
        signature_layout: "Sidebar TOC + article body + search header",
        primary_use: "Documentation products",
    },
    RecognizableUiDesign {
        id: "learning-platform",
        name: "Learning Platform",
        signature_layout: "Course rail + progress widgets + quiz modules",
        primary_use: "Training and LMS products",
    },
    RecognizableUiDesign {
        id: "logistics-map",
        name: "Logistics Map + Dispatch Panel",
        signature_layout: "Map canvas + route list + status chips",
        primary_use: "Delivery and fleet coordination",
    },
    RecognizableUiDesign {
        id: "banking-shell",
        name: "Banking App Shell",
        signature_layout: "Account cards + ledger list + transfer wizard",
        primary_use: "Consumer and business banking",
    },
    RecognizableUiDesign {
        id: "health-portal",
        name: "Health Portal",
        signature_layout: "Appointments + records cards + secure messaging",
        primary_use: "Patient and care coordination tools",
    },
];

/// Build a full color scheme from a seed color: the derived palette plus
/// fixed error/scrim/inverse roles.
fn scheme_from_seed(seed: &Color) -> Result<ColorScheme, ThemeError> {
    let palette = generate_palette_from_seed(seed)?;
    Ok(ColorScheme {
        primary: Some(palette.primary),
        on_primary: Some(palette.on_primary),
        primary_container: Some(palette.primary_container),
        on_primary_container: Some(palette.on_primary_container),
        secondary: Some(palette.secondary),
        on_secondary: Some(palette.on_secondary),
        secondary_container: Some(palette.secondary_container),
        on_secondary_container: Some(palette.on_secondary_container),
        tertiary: Some(palette.tertiary),
        on_tertiary: Some(palette.on_tertiary),
        tertiary_container: Some(palette.tertiary_container),
        on_tertiary_container: Some(palette.on_tertiary_container),
        error: Some(Color::hex("#B3261E")),
        on_error: Some(Color::hex("#FFFFFF")),
        error_container: Some(Color::hex("#F9DEDC")),
        on_error_container: Some(Color::hex("#410E0B")),
        background: Some(palette.background),
        on_background: Some(palette.on_background),
        surface: Some(palette.surface),
        on_surface: Some(palette.on_surface),
        surface_variant: Some(palette.surface_variant),
        on_surface_variant: Some(palette.on_surface_variant),
        outline: Some(palette.outline),
        outline_variant: Some(palette.outline_variant),
        scrim: Some(Color::hex("#000000")),
        inverse_surface: Some(Color::hex("#313033")),
        inverse_on_surface: Some(Color::hex("#F4EFF4")),
        inverse_primary: Some(Color::hex(adjust_hue(seed, 180.0)?)),
        state_layers: None,
        semantic_roles: None,
    })
}

fn disabled_metallic() -> MetallicEffect {
    MetallicEffect {
        enabled: false,
        variant: MetallicVariant::Silver,
        gradient: MetallicVariant::Silver.gradient(),
        intensity: 0.0,
    }
}

fn base_typography(base: &Theme) -> Typography {
    base.typography.clone().unwrap_or_default()
}

/// Map a strategic family to an immediately usable concept theme.
pub fn create_theme_from_family(family_id: &str) -> Result<Theme, ThemeError> {
    let family = THEME_FAMILY_PLANS
        .iter()
        .find(|item| item.id == family_id)
        .ok_or_else(|| ThemeError::UnknownThemeFamily(family_id.to_string()))?;

    let base = paper_ink_theme();
    let mut theme = base.clone();
    let mut effects = base.effects.clone().unwrap_or_default();

    match family.id {
        "neo-minimal" => {
            let seed = Color::hex("#8A98A5");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.background = Some(Color::hex("#FAFAF9"));
            scheme.surface = Some(Color::hex("#FAFAF9"));
            scheme.surface_variant = Some(Color::hex("#F1F3F5"));
            scheme.on_background = Some(Color::hex("#3A4652"));
            scheme.on_surface = Some(Color::hex("#3A4652"));
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme);
            effects.metallic = Some(disabled_metallic());
            effects.noise = Some(NoiseEffect {
                enabled: true,
                opacity: 0.04,
                scale: 1.1,
            });
            theme.typography = Some(Typography {
                font_family: "Inter, \"Helvetica Neue\", sans-serif".to_string(),
                line_height: 1.65,
                ..base_typography(&base)
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Spacious,
                    corner_style: CornerStyle::Rounded,
                    spacing_scale: 1.2,
                    panel_style: None,
                    navigation_style: None,
                }),
                ..Default::default()
            });
            theme.tokens = Some(DesignTokens {
                corners: Some(CornerTokens {
                    small: 12.0,
                    medium: 18.0,
                    large: 24.0,
                    xlarge: Some(28.0),
                }),
                density: Some(DensityTokens {
                    scale: 1.15,
                    base_spacing: 10.0,
                }),
            });
        }
        "brutalist-ui" => {
            let seed = Color::hex("#000000");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.primary = Some(Color::hex("#000000"));
            scheme.on_primary = Some(Color::hex("#FFFFFF"));
            scheme.secondary = Some(Color::hex("#FFFFFF"));
            scheme.on_secondary = Some(Color::hex("#000000"));
            scheme.tertiary = Some(Color::hex("#000000"));
            scheme.on_tertiary = Some(Color::hex("#FFFFFF"));
            scheme.background = Some(Color::hex("#FFFFFF"));
            scheme.on_background = Some(Color::hex("#000000"));
            scheme.surface = Some(Color::hex("#FFFFFF"));
            scheme.on_surface = Some(Color::hex("#000000"));
            scheme.outline = Some(Color::hex("#000000"));
            scheme.outline_variant = Some(Color::hex("#000000"));
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme);
            effects.blur = Some(BlurEffect {
                enabled: false,
                radius: 0.0,
            });
            effects.shimmer = Some(ShimmerEffect {
                enabled: false,
                speed: 0.0,
                intensity: 0.0,
                angle: 0.0,
            });
            effects.metallic = Some(disabled_metallic());
            theme.typography = Some(Typography {
                font_family: "\"IBM Plex Mono\", \"Courier New\", monospace".to_string(),
                line_height: 1.4,
                ..base_typography(&base)
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Compact,
                    corner_style: CornerStyle::Sharp,
                    spacing_scale: 0.9,
                    panel_style: None,
                    navigation_style: None,
                }),
                component_overrides: vec![ComponentOverride {
                    selector: ".kt-surface".to_string(),
                    styles: [
                        (
                            "border".to_string(),
                            StyleValue::Text("3px solid currentColor".to_string()),
                        ),
                        (
                            "box-shadow".to_string(),
                            StyleValue::Text("none".to_string()),
                        ),
                    ]
                    .into_iter()
                    .collect(),
                }],
                ..Default::default()
            });
        }
        "glass-frost" => {
            let seed = Color::hex("#6B93B3");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.background = Some(Color::hex("#EAF3FA"));
            scheme.surface = Some(Color::from(ktheme_core::opacity(
                &Color::hex("#D2E5F5"),
                0.72,
            )?));
            scheme.surface_variant = Some(Color::from(ktheme_core::opacity(
                &Color::hex("#B9D5EB"),
                0.66,
            )?));
            scheme.on_background = Some(Color::hex("#1A354A"));
            scheme.on_surface = Some(Color::hex("#10283A"));
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme);
            effects.blur = Some(BlurEffect {
                enabled: true,
                radius: 14.0,
            });
            effects.overlays = Some(OverlayEffect {
                enabled: true,
                color: Color::hex("#BBDDF5"),
                opacity: 0.2,
                blend_mode: Some(BlendMode::Screen),
            });
            effects.shimmer = Some(ShimmerEffect {
                enabled: true,
                speed: 5.0,
                intensity: 0.25,
                angle: 120.0,
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Comfortable,
                    corner_style: CornerStyle::Rounded,
                    spacing_scale: 1.05,
                    panel_style: Some(PanelStyle::Glass),
                    navigation_style: None,
                }),
                ..Default::default()
            });
        }
        "retro-terminal" => {
            let seed = Color::hex("#33FF33");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.primary = Some(Color::hex("#33FF33"));
            scheme.on_primary = Some(Color::hex("#061406"));
            scheme.secondary = Some(Color::hex("#8CFF8C"));
            scheme.on_secondary = Some(Color::hex("#061406"));
            scheme.tertiary = Some(Color::hex("#00CC66"));
            scheme.on_tertiary = Some(Color::hex("#051005"));
            scheme.background = Some(Color::hex("#0A0A0A"));
            scheme.on_background = Some(Color::hex("#A8FFA8"));
            scheme.surface = Some(Color::hex("#121212"));
            scheme.on_surface = Some(Color::hex("#7DFF7D"));
            scheme.outline = Some(Color::hex("#2CA32C"));
            theme.dark_mode = true;
            theme.color_scheme = Some(scheme);
            effects.noise = Some(NoiseEffect {
                enabled: true,
                opacity: 0.12,
                scale: 1.4,
            });
            effects.metallic = Some(disabled_metallic());
            theme.typography = Some(Typography {
                font_family: "\"JetBrains Mono\", \"Courier New\", monospace".to_string(),
                ..base_typography(&base)
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Compact,
                    corner_style: CornerStyle::Sharp,
                    spacing_scale: 0.95,
                    panel_style: None,
                    navigation_style: None,
                }),
                ..Default::default()
            });
        }
        "editorial-magazine" => {
            let seed = Color::hex("#8B5E3C");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.background = Some(Color::hex("#F7F2EA"));
            scheme.surface = Some(Color::hex("#FFFDF9"));
            scheme.on_background = Some(Color::hex("#2E2018"));
            scheme.on_surface = Some(Color::hex("#2E2018"));
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme);
            effects.overlays = Some(OverlayEffect {
                enabled: true,
                color: Color::hex("#D7C7B7"),
                opacity: 0.08,
                blend_mode: Some(BlendMode::SoftLight),
            });
            effects.metallic = Some(disabled_metallic());
            theme.typography = Some(Typography {
                font_family: "\"Playfair Display\", Georgia, serif".to_string(),
                line_height: 1.75,
                letter_spacing: 0.02,
                ..base_typography(&base)
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Spacious,
                    corner_style: CornerStyle::Rounded,
                    spacing_scale: 1.25,
                    panel_style: None,
                    navigation_style: None,
                }),
                ..Default::default()
            });
        }
        "material-plus" => {
            let seed = Color::hex("#6750A4");
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme_from_seed(&seed)?);
            effects.shadows = Some(ShadowEffect {
                enabled: true,
                elevation: 5.0,
                blur: 14.0,
                color: Color::hex("#00000033"),
            });
            effects.transitions = Some(TransitionEffect {
                enabled: true,
                duration: 200.0,
                properties: vec![
                    "background-color".to_string(),
                    "color".to_string(),
                    "box-shadow".to_string(),
                    "transform".to_string(),
                ],
            });
            effects.animations = Some(AnimationEffect {
                enabled: true,
                duration: 200.0,
                easing: Easing::EaseInOut,
                reduced_motion_policy: None,
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Comfortable,
                    corner_style: CornerStyle::Rounded,
                    spacing_scale: 1.0,
                    panel_style: Some(PanelStyle::Elevated),
                    navigation_style: None,
                }),
                ..Default::default()
            });
            theme.tokens = Some(DesignTokens {
                corners: Some(CornerTokens {
                    small: 4.0,
                    medium: 8.0,
                    large: 12.0,
                    xlarge: Some(16.0),
                }),
                density: Some(DensityTokens {
                    scale: 1.0,
                    base_spacing: 8.0,
                }),
            });
        }
        "enterprise-calm" => {
            let seed = Color::hex("#5E748C");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.primary = Some(Color::hex("#4F6982"));
            scheme.secondary = Some(Color::hex(adjust_saturation(&seed, -18.0)?));
            scheme.tertiary = Some(Color::hex("#6D7D8D"));
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme);
            effects.shimmer = Some(ShimmerEffect {
                enabled: false,
                speed: 0.0,
                intensity: 0.0,
                angle: 0.0,
            });
            effects.metallic = Some(disabled_metallic());
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Compact,
                    corner_style: CornerStyle::Rounded,
                    spacing_scale: 0.95,
                    panel_style: Some(PanelStyle::Flat),
                    navigation_style: Some(NavigationStyle::Rail),
                }),
                icons: Some(IconAdaptation {
                    family: IconFamily::Material,
                    style: IconStyle::Outlined,
                    size_scale: 0.95,
                    stroke_width: Some(1.8),
                    corner_style: None,
                }),
                ..Default::default()
            });
        }
        "playful-consumer" => {
            let seed = Color::hex("#FF5AA5");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.secondary = Some(Color::hex("#6F5CFF"));
            scheme.tertiary = Some(Color::hex("#FF9B42"));
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme);
            effects.gradients = Some(GradientEffect {
                enabled: true,
                angle: 45.0,
                stops: vec![
                    GradientStop {
                        offset: 0.0,
                        color: Color::hex("#FF5AA5"),
                    },
                    GradientStop {
                        offset: 0.5,
                        color: Color::hex("#6F5CFF"),
                    },
                    GradientStop {
                        offset: 1.0,
                        color: Color::hex("#42D9FF"),
                    },
                ],
            });
            effects.shimmer = Some(ShimmerEffect {
                enabled: true,
                speed: 3.0,
                intensity: 0.45,
                angle: 135.0,
            });
            effects.animations = Some(AnimationEffect {
                enabled: true,
                duration: 260.0,
                easing: Easing::EaseOut,
                reduced_motion_policy: None,
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Comfortable,
                    corner_style: CornerStyle::Pill,
                    spacing_scale: 1.1,
                    panel_style: None,
                    navigation_style: None,
                }),
                icons: Some(IconAdaptation {
                    family: IconFamily::Material,
                    style: IconStyle::Filled,
                    size_scale: 1.05,
                    stroke_width: None,
                    corner_style: None,
                }),
                ..Default::default()
            });
        }
        "luxury-dark" => {
            let seed = Color::hex("#D4AF37");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.background = Some(Color::hex("#080808"));
            scheme.surface = Some(Color::hex("#111111"));
            scheme.on_background = Some(Color::hex("#F6F0DE"));
            scheme.on_surface = Some(Color::hex("#F6F0DE"));
            theme.dark_mode = true;
            theme.color_scheme = Some(scheme);
            effects.metallic = Some(MetallicEffect {
                enabled: true,
                variant: MetallicVariant::Gold,
                gradient: MetallicVariant::Gold.gradient(),
                intensity: 0.85,
            });
            effects.shadows = Some(ShadowEffect {
                enabled: true,
                elevation: 6.0,
                blur: 18.0,
                color: Color::hex("#7A5A1A55"),
            });
            theme.typography = Some(Typography {
                font_family: "\"Cormorant Garamond\", Georgia, serif".to_string(),
                ..base_typography(&base)
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Comfortable,
                    corner_style: CornerStyle::Rounded,
                    spacing_scale: 1.0,
                    panel_style: Some(PanelStyle::Elevated),
                    navigation_style: None,
                }),
                ..Default::default()
            });
        }
        "nature-organic" => {
            let seed = Color::hex("#7D8F69");
            let mut scheme = scheme_from_seed(&seed)?;
            scheme.secondary = Some(Color::hex("#B4684D"));
            scheme.tertiary = Some(Color::hex("#D8C3A5"));
            scheme.background = Some(Color::hex("#F3EEE3"));
            scheme.surface = Some(Color::hex("#EFE5D5"));
            theme.dark_mode = false;
            theme.color_scheme = Some(scheme);
            effects.metallic = Some(MetallicEffect {
                enabled: true,
                variant: MetallicVariant::Copper,
                gradient: MetallicVariant::Copper.gradient(),
                intensity: 0.35,
            });
            effects.noise = Some(NoiseEffect {
                enabled: true,
                opacity: 0.08,
                scale: 1.2,
            });
            theme.typography = Some(Typography {
                font_family: "\"Lora\", \"Inter\", serif".to_string(),
                line_height: 1.6,
                ..base_typography(&base)
            });
            theme.adaptation = Some(ThemeAdaptation {
                layout: Some(LayoutAdaptation {
                    density: Density::Comfortable,
                    corner_style: CornerStyle::Rounded,
                    spacing_scale: 1.08,
                    panel_style: None,
                    navigation_style: None,
                }),
                ..Default::default()
            });
        }
        _ => return Err(ThemeError::UnknownThemeFamily(family_id.to_string())),
    }

    theme.effects = Some(effects);

    // Re-derive the secondary contrast partner after family overrides.
    if let Some(scheme) = theme.color_scheme.as_mut() {
        if let Some(secondary) = scheme.secondary.clone() {
            scheme.on_secondary = Some(ktheme_core::contrast_color(&secondary)?);
        }
    }

    let now = iso_now();
    let mut tags = base.metadata.tags.clone();
    for tag in ["concept", "roadmap", family.id] {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    theme.metadata.id = format!("concept-{}", family.id);
    theme.metadata.name = format!("{} Concept", family.name);
    theme.metadata.description = format!(
        "Roadmap concept theme for {}. {}",
        family.name, family.description
    );
    theme.metadata.tags = tags;
    theme.metadata.created_at = now.clone();
    theme.metadata.updated_at = now;

    let validation = validate_theme(&theme);
    if !validation.valid {
        return Err(ThemeError::InvalidTheme {
            errors: validation.errors,
        });
    }

    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_complete() {
        assert_eq!(BEST_PRACTICE_STANDARDS.len(), 20);
        assert_eq!(RECOGNIZABLE_UI_DESIGNS.len(), 20);
        assert_eq!(THEME_FAMILY_PLANS.len(), 10);
        assert_eq!(EXPANSION_PACK_PLANS.len(), 10);
        assert!(USE_CASE_PLANS.len() >= 5);
    }

    #[test]
    fn generates_a_concept_theme_from_a_family_id() {
        let theme = create_theme_from_family("neo-minimal").unwrap();

        assert_eq!(theme.metadata.id, "concept-neo-minimal");
        assert!(theme.metadata.tags.contains(&"concept".to_string()));
        assert!(theme.metadata.description.contains("Neo-Minimal"));
        assert_eq!(
            theme.color_scheme.as_ref().unwrap().background,
            Some(Color::hex("#FAFAF9"))
        );
        assert!(theme.effects.as_ref().unwrap().noise.as_ref().unwrap().enabled);
        assert_eq!(
            theme
                .adaptation
                .as_ref()
                .unwrap()
                .layout
                .as_ref()
                .unwrap()
                .density,
            Density::Spacious
        );
    }

    #[test]
    fn families_have_distinct_traits() {
        let brutalist = create_theme_from_family("brutalist-ui").unwrap();
        let glass = create_theme_from_family("glass-frost").unwrap();
        let luxury = create_theme_from_family("luxury-dark").unwrap();

        assert_eq!(
            brutalist
                .adaptation
                .as_ref()
                .unwrap()
                .layout
                .as_ref()
                .unwrap()
                .corner_style,
            CornerStyle::Sharp
        );
        assert!(brutalist
            .typography
            .as_ref()
            .unwrap()
            .font_family
            .to_lowercase()
            .contains("mono"));

        assert_eq!(
            glass
                .adaptation
                .as_ref()
                .unwrap()
                .layout
                .as_ref()
                .unwrap()
                .panel_style,
            Some(PanelStyle::Glass)
        );
        assert!(glass.effects.as_ref().unwrap().blur.as_ref().unwrap().enabled);

        assert!(luxury.dark_mode);
        assert!(luxury
            .effects
            .as_ref()
            .unwrap()
            .metallic
            .as_ref()
            .unwrap()
            .enabled);
        assert_eq!(
            luxury.color_scheme.as_ref().unwrap().background,
            Some(Color::hex("#080808"))
        );
    }

    #[test]
    fn every_family_generates_a_valid_theme() {
        for family in THEME_FAMILY_PLANS {
            let theme = create_theme_from_family(family.id)
                .unwrap_or_else(|err| panic!("family {}: {err}", family.id));
            assert_eq!(theme.metadata.id, format!("concept-{}", family.id));
        }
    }

    #[test]
    fn unknown_family_fails_with_named_id() {
        let err = create_theme_from_family("missing-family").unwrap_err();
        assert_eq!(err.to_string(), "Unknown theme family: missing-family");
    }
}
