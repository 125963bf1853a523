//! Ktheme CSS emission
//!
//! Consumes the validated theme model and produces CSS output:
//!
//! - **Custom properties** under the `--kt-` prefix: color roles in
//!   kebab-case, layout/icon/density/corner tokens in their own
//!   namespaces, state layers as `--kt-state-*`, accessibility policy as
//!   `--kt-a11y-*`
//! - **Component override blocks** from adaptation profiles
//! - **Effect CSS helpers**: metallic gradients, shimmer, blur,
//!   transitions, keyframes, elevation, glassmorphism, glow
//!
//! The variable naming here is a boundary contract shared with every
//! consumer of generated CSS; renaming a property is a breaking change.

pub mod effects;
pub mod vars;

pub use effects::{
    generate_animation_css, generate_blur_css, generate_elevation_css, generate_fade_in_keyframes,
    generate_glassmorphism_css, generate_glow_css, generate_gradient_border_css,
    generate_metallic_gradient_css, generate_pulse_keyframes, generate_ripple_keyframes,
    generate_shimmer_css, generate_slide_in_keyframes, generate_transition_css, SlideDirection,
};
pub use vars::{
    generate_accessibility_css, generate_accessibility_utility_css,
    generate_color_scheme_css_variables, generate_component_override_css,
    generate_design_token_css_variables, generate_icon_css_variables,
    generate_layout_css_variables, generate_theme_adaptation_css,
};
