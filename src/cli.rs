//! CLI parser
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::config::Settings;
use crate::configuration::{Configuration, random_prompt};
use crate::constants::{DEFAULT_APP_NAME, DEFAULT_DATA_DIR, DEFAULT_ENDPOINT};
use crate::error::Result;
use crate::options::{AspectRatio, ColorPalette, Composition, Lighting, Model, Quality, Style};
use crate::variant::Variant;

#[derive(Parser, Debug)]
#[command(name = "promptpix", version)]
/// Build, probe and download images from a hosted image-generation endpoint
pub struct CliOptions {
    #[clap(long, global = true, help = "Enable debug logging", env = "PROMPTPIX_DEBUG")]
    /// Enable debug logging. Env: PROMPTPIX_DEBUG
    pub debug: bool,
    #[clap(long, global = true, default_value = DEFAULT_ENDPOINT, env = "PROMPTPIX_ENDPOINT")]
    /// Image endpoint, defaults to the hosted Pollinations API.
    /// Env: PROMPTPIX_ENDPOINT
    pub endpoint: String,
    #[clap(long, global = true, default_value = DEFAULT_DATA_DIR, env = "PROMPTPIX_DATA_DIR")]
    /// Where history is kept, eg `/var/lib/promptpix`.
    /// Env: PROMPTPIX_DATA_DIR
    pub data_dir: PathBuf,
    #[clap(long, global = true, default_value = DEFAULT_APP_NAME, env = "PROMPTPIX_APP_NAME")]
    /// Prefix for downloaded file names.
    /// Env: PROMPTPIX_APP_NAME
    pub app_name: String,
    #[clap(long, global = true, value_enum, default_value_t, env = "PROMPTPIX_VARIANT")]
    /// Which advanced option groups are offered.
    /// Env: PROMPTPIX_VARIANT
    pub variant: Variant,

    #[command(subcommand)]
    /// What to do
    pub command: Command,
}

impl CliOptions {
    /// Settings for the components, built from the global flags.
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings::new()
            .with_endpoint(&self.endpoint)?
            .with_app_name(self.app_name.clone())
            .with_data_dir(self.data_dir.clone())
            .with_variant(self.variant))
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an image, print its URL and record it in the history
    Generate(GenerateArgs),
    /// Print the request URL without fetching anything
    Url(ConfigArgs),
    /// Print the configuration as JSON, or save it with --output
    Json {
        #[command(flatten)]
        /// Generation parameters
        config: ConfigArgs,
        #[arg(long)]
        /// Directory to save the JSON file in
        output: Option<PathBuf>,
    },
    /// Show or clear the history
    History {
        #[command(subcommand)]
        /// History action
        action: HistoryAction,
    },
    /// Download an image as PNG, by default the newest one in the history
    Download {
        /// Image URL
        url: Option<Url>,
        #[arg(long, default_value = ".")]
        /// Directory to save the image in
        output: PathBuf,
    },
    /// List the options the selected variant offers
    Options,
}

/// History subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// Print the history, newest first
    List,
    /// Forget every entry
    Clear,
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    /// Generation parameters
    pub config: ConfigArgs,
    #[arg(long)]
    /// Also download the image into this directory
    pub download: Option<PathBuf>,
}

/// Generation parameters shared by the subcommands that build a request
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    #[arg(long, short)]
    /// Text to render
    pub prompt: Option<String>,
    #[arg(long, conflicts_with = "prompt")]
    /// Use one of the built-in sample prompts
    pub random_prompt: bool,
    #[arg(long, value_enum, default_value_t)]
    /// Backend model
    pub model: Model,
    #[arg(long, value_enum, default_value_t)]
    /// Art style
    pub style: Style,
    #[arg(long, value_enum, default_value_t)]
    /// Aspect ratio
    pub aspect_ratio: AspectRatio,
    #[arg(long, value_enum, default_value_t)]
    /// Quality hint
    pub quality: Quality,
    #[arg(long)]
    /// Fixed seed
    pub seed: Option<u32>,
    #[arg(long, conflicts_with = "seed")]
    /// Draw a random seed
    pub random_seed: bool,
    #[arg(long)]
    /// Don't ask the endpoint to enhance the prompt
    pub no_enhance: bool,
    #[arg(long, value_enum, default_value_t)]
    /// Colour palette
    pub color_palette: ColorPalette,
    #[arg(long, value_enum, default_value_t)]
    /// Composition
    pub composition: Composition,
    #[arg(long, value_enum, default_value_t)]
    /// Lighting
    pub lighting: Lighting,
}

impl ConfigArgs {
    /// The configuration these arguments describe.
    pub fn to_configuration(&self) -> Configuration {
        let prompt = if self.random_prompt {
            random_prompt().to_string()
        } else {
            self.prompt.clone().unwrap_or_default()
        };
        let config = Configuration {
            prompt,
            model: self.model,
            style: self.style,
            aspect_ratio: self.aspect_ratio,
            quality: self.quality,
            seed: self.seed,
            enhance: !self.no_enhance,
            color_palette: self.color_palette,
            composition: self.composition,
            lighting: self.lighting,
        };
        if self.random_seed {
            config.with_random_seed()
        } else {
            config
        }
    }
}
