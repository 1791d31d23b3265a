//! The fixed option sets a configuration is built from.
//!
//! Every set is a plain `Copy` enum that knows its wire name, so the same
//! value is used by the command line, the JSON export and the request URL.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PromptpixError;

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal), default = $default:ident {
            $( $(#[doc = $doc:literal])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire)]
                #[value(name = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in the order they are offered.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human readable name of the option group.
            pub const LABEL: &'static str = $label;

            /// Name used on the wire and on the command line.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// True for the default value; for advanced groups this is the
            /// sentinel that keeps the parameter out of the request.
            pub fn is_default(self) -> bool {
                self == Self::default()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = PromptpixError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == value)
                    .ok_or_else(|| {
                        PromptpixError::InvalidOption(format!("unknown {} `{value}`", $label))
                    })
            }
        }
    };
}

option_set! {
    /// Backend model the endpoint renders with.
    Model("model"), default = GptImage {
        /// Whatever the endpoint picks
        Default => "default",
        /// GPT image
        GptImage => "gpt-image",
        /// Flux
        Flux => "flux",
        /// DALL·E 3
        DallE3 => "dall-e-3",
        /// Midjourney
        Midjourney => "midjourney",
        /// Stable Diffusion
        StableDiffusion => "stable-diffusion",
    }
}

option_set! {
    /// Overall art style.
    Style("style"), default = Default {
        /// Leave the style to the model
        Default => "default",
        /// Realistic
        Realistic => "realistic",
        /// Surrealism
        Surrealism => "surrealism",
        /// Psychedelic, spelled the way the endpoint expects
        Psicadelic => "psicadelic",
        /// Macabre
        Macabre => "macabre",
        /// Chaotic
        Chaotic => "chaotic",
        /// Fractal
        Fractal => "fractal",
        /// Cartoon
        Cartoon => "cartoon",
        /// Anime
        Anime => "anime",
        /// Disney-like 3D
        Disney3d => "disney_3d",
        /// Dark fantasy
        DarkFantasy => "dark_fantasy",
    }
}

option_set! {
    /// Output quality hint.
    Quality("quality"), default = Hd {
        /// HD
        Hd => "hd",
        /// High resolution
        HighResolution => "high_resolution",
        /// Ultra detail
        UltraDetail => "ultra_detail",
    }
}

option_set! {
    /// Colour palette hint.
    ColorPalette("color palette"), default = Default {
        /// No palette hint
        Default => "default",
        /// Vibrant
        Vibrant => "vibrant",
        /// Pastel
        Pastel => "pastel",
        /// Monochrome
        Monochrome => "monochrome",
        /// Warm tones
        WarmTones => "warm_tones",
        /// Cool tones
        CoolTones => "cool_tones",
        /// RGB
        Rgb => "rgb",
    }
}

option_set! {
    /// Framing of the shot.
    Composition("composition"), default = Default {
        /// No composition hint
        Default => "default",
        /// Close-up
        CloseUp => "close-up",
        /// Wide shot
        WideShot => "wide_shot",
        /// Askew view
        AskewView => "askew_view",
        /// Macro photography
        MacroPhotography => "macro_photography",
        /// Aerial
        Aerial => "aerial",
        /// Low view angle
        LowViewAngle => "low_view_angle",
        /// Drone wide angle shot
        DroneWideAngleViewShot => "drone_wide_angle_view_shot",
    }
}

option_set! {
    /// Lighting hint.
    Lighting("lighting"), default = Default {
        /// No lighting hint
        Default => "default",
        /// HDR
        Hdr => "hdr",
        /// Ultra detail
        UltraDetail => "ultra_detail",
        /// Cinematic lighting
        CinematicLighting => "cinematic_lighting",
        /// Neon glow
        NeonGlow => "neon_glow",
        /// Photorealistic
        Photorealistic => "photorealistic",
        /// Dramatic light
        DramaLight => "drama_light",
        /// Night mode
        NightMode => "night_mode",
    }
}

option_set! {
    /// Shape of the generated image.
    AspectRatio("aspect ratio"), default = Square {
        /// Square (1:1)
        Square => "1:1",
        /// Portrait (9:16)
        Portrait => "9:16",
        /// Landscape (16:9)
        Landscape => "16:9",
    }
}

impl AspectRatio {
    /// Pixel `(width, height)` requested for this ratio.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1024, 1024),
            AspectRatio::Portrait => (576, 1024),
            AspectRatio::Landscape => (1024, 576),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_dimensions_are_exact() {
        assert_eq!(AspectRatio::Square.dimensions(), (1024, 1024));
        assert_eq!(AspectRatio::Portrait.dimensions(), (576, 1024));
        assert_eq!(AspectRatio::Landscape.dimensions(), (1024, 576));
        assert_eq!(AspectRatio::ALL.len(), 3);
    }

    #[test]
    fn unknown_aspect_ratio_is_rejected() {
        assert!("4:3".parse::<AspectRatio>().is_err());
        assert!("16:10".parse::<AspectRatio>().is_err());
        assert_eq!(
            "9:16".parse::<AspectRatio>().expect("known ratio"),
            AspectRatio::Portrait
        );
    }

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for model in Model::ALL {
            assert_eq!(model.as_str().parse::<Model>().ok(), Some(*model));
        }
        assert_eq!(Model::DallE3.as_str(), "dall-e-3");
        assert_eq!(Composition::CloseUp.to_string(), "close-up");
    }

    #[test]
    fn defaults_match_the_form() {
        assert_eq!(Model::default(), Model::GptImage);
        assert_eq!(Quality::default(), Quality::Hd);
        assert_eq!(AspectRatio::default(), AspectRatio::Square);
        assert!(Style::default().is_default());
        assert!(ColorPalette::default().is_default());
        assert!(Composition::default().is_default());
        assert!(Lighting::default().is_default());
        assert!(!Lighting::Hdr.is_default());
    }

    #[test]
    fn serde_uses_wire_names() {
        let encoded = serde_json::to_string(&Style::DarkFantasy).expect("encode");
        assert_eq!(encoded, "\"dark_fantasy\"");
        let decoded: AspectRatio = serde_json::from_str("\"16:9\"").expect("decode");
        assert_eq!(decoded, AspectRatio::Landscape);
    }
}
