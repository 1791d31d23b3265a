use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use promptpix::cli::{CliOptions, Command, ConfigArgs, HistoryAction};
use promptpix::config::{Settings, setup_logging};
use promptpix::download::{download_image, save_config_export};
use promptpix::fetch::HttpFetcher;
use promptpix::history::HistoryStore;
use promptpix::options::{AspectRatio, ColorPalette, Composition, Lighting, Model, Quality, Style};
use promptpix::store::FileStore;
use promptpix::url_builder::build_request_url;
use promptpix::variant::OptionGroup;
use promptpix::workflow::Generator;
use tracing::info;
use url::Url;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliOptions::parse();

    setup_logging(cli.debug).context("Failed to initialize logging")?;

    let settings = cli.settings()?;

    match cli.command {
        Command::Generate(args) => {
            let config = args.config.to_configuration();
            let fetcher = HttpFetcher::new(&settings)?;
            let store = FileStore::new(&settings.data_dir);
            let mut generator = Generator::new(settings, fetcher, store);

            let url = generator.submit(&config).await.context(
                "Failed to generate image. Please check your prompt and try again.",
            )?;
            println!("{url}");

            if let Some(dir) = args.download {
                let path = generator
                    .download_current(&dir)
                    .await
                    .context("Failed to download image. Please try again.")?;
                println!("{}", path.display());
            }
        }
        Command::Url(args) => {
            let config = args.to_configuration();
            config.validate()?;
            println!("{}", build_request_url(&settings, &config)?);
        }
        Command::Json { config, output } => export_json(&settings, &config, output.as_deref())?,
        Command::History { action } => history(&settings, action)?,
        Command::Download { url, output } => {
            let url = match url {
                Some(url) => url,
                None => latest_image(&settings)?,
            };
            let fetcher = HttpFetcher::new(&settings)?;
            let path = download_image(&fetcher, &settings, &url, &output)
                .await
                .context("Failed to download image. Please try again.")?;
            println!("{}", path.display());
        }
        Command::Options => list_options(&settings),
    }

    Ok(())
}

fn export_json(settings: &Settings, args: &ConfigArgs, output: Option<&Path>) -> Result<()> {
    let config = settings.variant.restrict(args.to_configuration());
    match output {
        Some(dir) => {
            let path = save_config_export(settings, &config, dir)?;
            println!("{}", path.display());
        }
        None => println!("{}", config.to_pretty_json()?),
    }
    Ok(())
}

fn history(settings: &Settings, action: HistoryAction) -> Result<()> {
    let mut history = HistoryStore::open(FileStore::new(&settings.data_dir), settings);
    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No history yet.");
            }
            for entry in history.entries() {
                println!("{}  {}\n    {}", entry.time, entry.prompt, entry.image_url);
            }
        }
        HistoryAction::Clear => {
            history.clear()?;
            info!("History cleared");
        }
    }
    Ok(())
}

fn latest_image(settings: &Settings) -> Result<Url> {
    HistoryStore::open(FileStore::new(&settings.data_dir), settings)
        .latest_image_url()
        .context("No URL given and no usable image in the history")
}

fn print_group<T: std::fmt::Display>(label: &str, values: &[T]) {
    let values: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("{label}: {}", values.join(", "));
}

fn list_options(settings: &Settings) {
    print_group(Model::LABEL, Model::ALL);
    print_group(AspectRatio::LABEL, AspectRatio::ALL);
    print_group(Quality::LABEL, Quality::ALL);
    for group in settings.variant.exposed_groups() {
        match group {
            OptionGroup::Style => print_group(Style::LABEL, Style::ALL),
            OptionGroup::ColorPalette => print_group(ColorPalette::LABEL, ColorPalette::ALL),
            OptionGroup::Composition => print_group(Composition::LABEL, Composition::ALL),
            OptionGroup::Lighting => print_group(Lighting::LABEL, Lighting::ALL),
        }
    }
}
