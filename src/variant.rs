//! Variants decide which advanced option groups are offered.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;

/// The advanced option groups a variant can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionGroup {
    /// Art style
    Style,
    /// Colour palette
    ColorPalette,
    /// Composition
    Composition,
    /// Lighting
    Lighting,
}

/// Flavour of the generator; all variants share the same core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Every advanced option group
    #[default]
    Full,
    /// Style only
    Basic,
    /// No advanced options
    Minimal,
}

impl Variant {
    /// Groups shown for this variant.
    pub fn exposed_groups(self) -> &'static [OptionGroup] {
        match self {
            Variant::Full => &[
                OptionGroup::Style,
                OptionGroup::ColorPalette,
                OptionGroup::Composition,
                OptionGroup::Lighting,
            ],
            Variant::Basic => &[OptionGroup::Style],
            Variant::Minimal => &[],
        }
    }

    /// Whether `group` is offered by this variant.
    pub fn exposes(self, group: OptionGroup) -> bool {
        self.exposed_groups().contains(&group)
    }

    /// Resets every group this variant hides back to its sentinel.
    pub fn restrict(self, mut config: Configuration) -> Configuration {
        if !self.exposes(OptionGroup::Style) {
            config.style = Default::default();
        }
        if !self.exposes(OptionGroup::ColorPalette) {
            config.color_palette = Default::default();
        }
        if !self.exposes(OptionGroup::Composition) {
            config.composition = Default::default();
        }
        if !self.exposes(OptionGroup::Lighting) {
            config.lighting = Default::default();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ColorPalette, Composition, Lighting, Style};

    fn styled() -> Configuration {
        Configuration {
            style: Style::Anime,
            color_palette: ColorPalette::Pastel,
            composition: Composition::Aerial,
            lighting: Lighting::NeonGlow,
            ..Configuration::new("a lighthouse")
        }
    }

    #[test]
    fn full_keeps_everything() {
        assert_eq!(Variant::Full.restrict(styled()), styled());
    }

    #[test]
    fn basic_keeps_only_style() {
        let restricted = Variant::Basic.restrict(styled());
        assert_eq!(restricted.style, Style::Anime);
        assert!(restricted.color_palette.is_default());
        assert!(restricted.composition.is_default());
        assert!(restricted.lighting.is_default());
    }

    #[test]
    fn minimal_hides_all_groups() {
        assert!(Variant::Minimal.exposed_groups().is_empty());
        let restricted = Variant::Minimal.restrict(styled());
        assert!(restricted.style.is_default());
        assert_eq!(restricted.prompt, "a lighthouse");
    }
}
