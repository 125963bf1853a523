//! Metallic effect tables
//!
//! Predefined metallic base/highlight/shadow/shimmer quads per variant.
//! The values are part of preset themes' observable output; changing a
//! constant changes every theme built on it.

use ktheme_core::Color;

use crate::types::{MetallicGradient, MetallicVariant};

/// Base metallic colors.
pub mod metallic_colors {
    pub const SILVER: &str = "#C0C0C0";
    pub const GOLD: &str = "#D4AF37";
    pub const GOLD_ROYAL_BLUE: &str = "#0A1630";
    pub const BRONZE: &str = "#CD7F32";
    pub const COPPER: &str = "#B87333";
    pub const PLATINUM: &str = "#E5E4E2";
    pub const ROSE_GOLD: &str = "#B76E79";
    pub const TITANIUM: &str = "#878681";
    pub const CHROME: &str = "#E8E8E8";
    pub const COBALT: &str = "#0047AB";

    pub const SILVER_HIGHLIGHT: &str = "#F5F5F5";
    pub const GOLD_HIGHLIGHT: &str = "#FFD700";
    pub const BRONZE_HIGHLIGHT: &str = "#D99952";
    pub const COPPER_HIGHLIGHT: &str = "#E8B4A0";
    pub const PLATINUM_HIGHLIGHT: &str = "#F5F5F5";
    pub const ROSE_GOLD_HIGHLIGHT: &str = "#E5BE8A";
    pub const TITANIUM_HIGHLIGHT: &str = "#BDBBB8";
    pub const CHROME_HIGHLIGHT: &str = "#FFFFFF";
    pub const COBALT_HIGHLIGHT: &str = "#0066CC";
}

impl MetallicVariant {
    /// Stable variant id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::GoldRoyalBlue => "GOLD_ROYAL_BLUE",
            Self::Bronze => "BRONZE",
            Self::Copper => "COPPER",
            Self::Platinum => "PLATINUM",
            Self::RoseGold => "ROSE_GOLD",
            Self::Titanium => "TITANIUM",
            Self::Chrome => "CHROME",
            Self::Cobalt => "COBALT",
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [MetallicVariant] {
        const VARIANTS: [MetallicVariant; 10] = [
            MetallicVariant::Silver,
            MetallicVariant::Gold,
            MetallicVariant::GoldRoyalBlue,
            MetallicVariant::Bronze,
            MetallicVariant::Copper,
            MetallicVariant::Platinum,
            MetallicVariant::RoseGold,
            MetallicVariant::Titanium,
            MetallicVariant::Chrome,
            MetallicVariant::Cobalt,
        ];
        &VARIANTS
    }

    /// The metallic gradient quad for this variant.
    pub fn gradient(self) -> MetallicGradient {
        use metallic_colors::*;

        let (base, highlight, shadow, shimmer) = match self {
            Self::Silver => (SILVER, SILVER_HIGHLIGHT, "#505050", PLATINUM),
            Self::Gold => (GOLD, GOLD_HIGHLIGHT, "#856D34", "#FFF8DC"),
            Self::GoldRoyalBlue => (GOLD, GOLD_HIGHLIGHT, GOLD_ROYAL_BLUE, "#FFF8DC"),
            Self::Bronze => (BRONZE, BRONZE_HIGHLIGHT, "#6B4423", "#F0D9C0"),
            Self::Copper => (COPPER, COPPER_HIGHLIGHT, "#6B3410", "#F2D2B0"),
            Self::Platinum => (PLATINUM, PLATINUM_HIGHLIGHT, "#9E9E9E", "#FFFFFF"),
            Self::RoseGold => (ROSE_GOLD, ROSE_GOLD_HIGHLIGHT, "#7D4A52", "#F5D5D8"),
            Self::Titanium => (TITANIUM, TITANIUM_HIGHLIGHT, "#4A4A48", "#D0CFCC"),
            Self::Chrome => (CHROME, CHROME_HIGHLIGHT, "#9E9E9E", "#FFFFFF"),
            Self::Cobalt => (COBALT, COBALT_HIGHLIGHT, "#002A66", "#66A3D2"),
        };

        MetallicGradient {
            base: Color::hex(base),
            highlight: Color::hex(highlight),
            shadow: Color::hex(shadow),
            shimmer: Color::hex(shimmer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_gradient_with_parseable_colors() {
        for variant in MetallicVariant::all() {
            let gradient = variant.gradient();
            for color in [
                &gradient.base,
                &gradient.highlight,
                &gradient.shadow,
                &gradient.shimmer,
            ] {
                assert!(color.normalize().is_ok(), "variant {:?}", variant);
            }
        }
    }

    #[test]
    fn variant_ids_match_wire_form() {
        let json = serde_json::to_string(&MetallicVariant::GoldRoyalBlue).unwrap();
        assert_eq!(json, "\"GOLD_ROYAL_BLUE\"");
        assert_eq!(MetallicVariant::GoldRoyalBlue.id(), "GOLD_ROYAL_BLUE");
    }
}
