//! The set of user-chosen generation parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{SAMPLE_PROMPTS, SEED_UPPER_BOUND};
use crate::error::{PromptpixError, Result};
use crate::options::{AspectRatio, ColorPalette, Composition, Lighting, Model, Quality, Style};

/// Everything needed to build one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Text to render, required
    pub prompt: String,
    /// Backend model
    pub model: Model,
    /// Art style, `default` leaves it out of the request
    pub style: Style,
    /// Shape of the image
    pub aspect_ratio: AspectRatio,
    /// Quality hint
    pub quality: Quality,
    /// Fixed seed, if any
    pub seed: Option<u32>,
    /// Ask the endpoint to enhance the prompt
    pub enhance: bool,
    /// Colour palette, `default` leaves it out of the request
    pub color_palette: ColorPalette,
    /// Composition, `default` leaves it out of the request
    pub composition: Composition,
    /// Lighting, `default` leaves it out of the request
    pub lighting: Lighting,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: Model::default(),
            style: Style::default(),
            aspect_ratio: AspectRatio::default(),
            quality: Quality::default(),
            seed: None,
            enhance: true,
            color_palette: ColorPalette::default(),
            composition: Composition::default(),
            lighting: Lighting::default(),
        }
    }
}

/// Export shape: the configuration plus the always-on `nologo` flag.
#[derive(Serialize)]
struct Exported<'a> {
    #[serde(flatten)]
    config: &'a Configuration,
    nologo: bool,
}

impl Configuration {
    /// Default configuration for `prompt`.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Rejects configurations that can't be submitted.
    ///
    /// `.` and `..` are refused too: URL paths collapse them, so the request
    /// would go out without a prompt.
    pub fn validate(&self) -> Result<()> {
        match self.prompt.trim() {
            "" => Err(PromptpixError::EmptyPrompt),
            "." | ".." => Err(PromptpixError::InvalidPrompt(self.prompt.clone())),
            _ => Ok(()),
        }
    }

    /// Replaces the seed with a freshly drawn one.
    pub fn with_random_seed(mut self) -> Self {
        self.seed = Some(random_seed());
        self
    }

    /// Flat JSON object of the configuration with `nologo: true` injected.
    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(Exported {
            config: self,
            nologo: true,
        })?)
    }

    /// Pretty-printed form of [`Configuration::to_json_value`].
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value()?)?)
    }
}

/// A seed in `0..SEED_UPPER_BOUND`.
pub fn random_seed() -> u32 {
    rand::random_range(0..SEED_UPPER_BOUND)
}

/// One of the built-in sample prompts.
pub fn random_prompt() -> &'static str {
    SAMPLE_PROMPTS[rand::random_range(0..SAMPLE_PROMPTS.len())]
}
