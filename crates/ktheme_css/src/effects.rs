//! Effect CSS generators
//!
//! String templating over validated effect parameters: gradients, shimmer
//! keyframes, blur, transitions, elevation and the other visual effect
//! blocks a theme can enable.

use ktheme_core::Color;
use ktheme_engine::MetallicGradient;

/// CSS for a metallic linear gradient.
pub fn generate_metallic_gradient_css(gradient: &MetallicGradient, angle: f64) -> String {
    format!(
        "linear-gradient({angle}deg, {} 0%, {} 25%, {} 50%, {} 75%, {} 100%)",
        gradient.shadow.to_css(),
        gradient.base.to_css(),
        gradient.highlight.to_css(),
        gradient.base.to_css(),
        gradient.shadow.to_css()
    )
}

/// Keyframes + background setup for a shimmer animation.
pub fn generate_shimmer_css(gradient: &MetallicGradient, speed: f64) -> String {
    format!(
        r#"@keyframes shimmer {{
  0% {{ background-position: -200% center; }}
  100% {{ background-position: 200% center; }}
}}

background: linear-gradient(90deg, {} 0%, {} 50%, {} 100%);
background-size: 200% 100%;
animation: shimmer {speed}s linear infinite;"#,
        gradient.base.to_css(),
        gradient.shimmer.to_css(),
        gradient.base.to_css()
    )
}

/// Backdrop blur declarations.
pub fn generate_blur_css(radius: f64) -> String {
    format!(
        "backdrop-filter: blur({radius}px);\n-webkit-backdrop-filter: blur({radius}px);"
    )
}

/// Transition declarations over the given properties.
pub fn generate_transition_css(duration: f64, properties: &[String], easing: &str) -> String {
    let props = if properties.is_empty() {
        "all".to_string()
    } else {
        properties.join(", ")
    };
    format!(
        "transition: {props} {duration}ms {easing};\n-webkit-transition: {props} {duration}ms {easing};"
    )
}

/// Animation shorthand declarations.
pub fn generate_animation_css(
    name: &str,
    duration: f64,
    easing: &str,
    iteration_count: &str,
) -> String {
    format!(
        "animation: {name} {duration}ms {easing} {iteration_count};\n-webkit-animation: {name} {duration}ms {easing} {iteration_count};"
    )
}

/// Fade-in keyframes.
pub fn generate_fade_in_keyframes(name: &str) -> String {
    format!(
        r#"@keyframes {name} {{
  from {{ opacity: 0; }}
  to {{ opacity: 1; }}
}}"#
    )
}

/// Edge a slide-in animation starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Top,
    Right,
    Bottom,
    Left,
}

impl SlideDirection {
    fn transform(self) -> &'static str {
        match self {
            Self::Top => "translateY(-100%)",
            Self::Right => "translateX(100%)",
            Self::Bottom => "translateY(100%)",
            Self::Left => "translateX(-100%)",
        }
    }
}

/// Slide-in keyframes from the given edge.
pub fn generate_slide_in_keyframes(name: &str, from: SlideDirection) -> String {
    format!(
        r#"@keyframes {name} {{
  from {{ transform: {}; }}
  to {{ transform: translateX(0); }}
}}"#,
        from.transform()
    )
}

/// Layered box shadows for an elevation level.
pub fn generate_elevation_css(elevation: f64, color: &Color) -> String {
    let base_blur = elevation * 2.0;
    let css_color = color.to_css();

    format!(
        "box-shadow: 0 {elevation}px {base_blur}px rgba(0,0,0,0.12), 0 {}px {}px {css_color};",
        elevation * 0.5,
        base_blur * 1.5
    )
}

/// Glass morphism declarations.
pub fn generate_glassmorphism_css(background: &Color, blur: f64, opacity: f64) -> String {
    format!(
        "background: {};\nopacity: {opacity};\nbackdrop-filter: blur({blur}px) saturate(180%);\n-webkit-backdrop-filter: blur({blur}px) saturate(180%);",
        background.to_css()
    )
}

/// Glow declarations scaled by intensity.
pub fn generate_glow_css(color: &Color, intensity: f64) -> String {
    let css_color = color.to_css();
    let blur = 10.0 * intensity;
    let spread = 5.0 * intensity;

    format!(
        "box-shadow: 0 0 {blur}px {spread}px {css_color}, 0 0 {}px {css_color} inset;",
        blur * 1.5
    )
}

/// Pulse keyframes around the given color.
pub fn generate_pulse_keyframes(name: &str, color: &Color) -> String {
    format!(
        r#"@keyframes {name} {{
  0% {{ box-shadow: 0 0 0 0 {}; }}
  70% {{ box-shadow: 0 0 0 10px rgba(0,0,0,0); }}
  100% {{ box-shadow: 0 0 0 0 rgba(0,0,0,0); }}
}}"#,
        color.to_css()
    )
}

/// Gradient border declarations using mask compositing.
pub fn generate_gradient_border_css(colors: &[Color], angle: f64, border_width: f64) -> String {
    let css_colors = colors
        .iter()
        .map(Color::to_css)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "border: {border_width}px solid transparent;\nbackground: linear-gradient({angle}deg, {css_colors}) border-box;\n-webkit-mask: linear-gradient(#fff 0 0) padding-box, linear-gradient(#fff 0 0);\n-webkit-mask-composite: xor;\nmask-composite: exclude;"
    )
}

/// Ripple keyframes.
pub fn generate_ripple_keyframes(name: &str) -> String {
    format!(
        r#"@keyframes {name} {{
  0% {{
    transform: scale(0);
    opacity: 1;
  }}
  100% {{
    transform: scale(4);
    opacity: 0;
  }}
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ktheme_engine::MetallicVariant;

    #[test]
    fn metallic_gradient_orders_stops_symmetrically() {
        let gradient = MetallicVariant::Gold.gradient();
        let css = generate_metallic_gradient_css(&gradient, 135.0);

        assert!(css.starts_with("linear-gradient(135deg,"));
        assert!(css.contains("#856D34 0%"));
        assert!(css.contains("#D4AF37 25%"));
        assert!(css.contains("#FFD700 50%"));
        assert!(css.contains("#856D34 100%"));
    }

    #[test]
    fn shimmer_css_declares_keyframes_and_animation() {
        let gradient = MetallicVariant::Silver.gradient();
        let css = generate_shimmer_css(&gradient, 2.0);
        assert!(css.contains("@keyframes shimmer"));
        assert!(css.contains("animation: shimmer 2s linear infinite;"));
        assert!(css.contains("background-size: 200% 100%;"));
    }

    #[test]
    fn transition_css_joins_properties() {
        let css = generate_transition_css(
            300.0,
            &["background-color".to_string(), "color".to_string()],
            "ease-in-out",
        );
        assert!(css.contains("transition: background-color, color 300ms ease-in-out;"));

        let fallback = generate_transition_css(200.0, &[], "ease");
        assert!(fallback.contains("transition: all 200ms ease;"));
    }

    #[test]
    fn elevation_css_scales_with_level() {
        let css = generate_elevation_css(4.0, &Color::hex("#00000066"));
        assert!(css.contains("0 4px 8px rgba(0,0,0,0.12)"));
        assert!(css.contains("0 2px 12px #00000066"));
    }

    #[test]
    fn slide_in_directions_differ() {
        let bottom = generate_slide_in_keyframes("slideIn", SlideDirection::Bottom);
        let left = generate_slide_in_keyframes("slideIn", SlideDirection::Left);
        assert!(bottom.contains("translateY(100%)"));
        assert!(left.contains("translateX(-100%)"));
    }

    #[test]
    fn glow_scales_blur_and_spread() {
        let css = generate_glow_css(&Color::hex("#33FF33"), 2.0);
        assert!(css.contains("0 0 20px 10px #33FF33"));
        assert!(css.contains("30px #33FF33 inset"));
    }

    #[test]
    fn gradient_border_lists_all_colors() {
        let css = generate_gradient_border_css(
            &[Color::hex("#FF5AA5"), Color::hex("#6F5CFF")],
            45.0,
            2.0,
        );
        assert!(css.contains("linear-gradient(45deg, #FF5AA5, #6F5CFF)"));
        assert!(css.contains("border: 2px solid transparent;"));
    }
}
