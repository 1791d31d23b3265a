//! The generate workflow: validate, build, probe, record.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::Settings;
use crate::configuration::Configuration;
use crate::download::download_image;
use crate::error::{PromptpixError, Result};
use crate::fetch::ImageFetcher;
use crate::history::{HistoryEntry, HistoryStore};
use crate::store::KeyValueStore;
use crate::url_builder::build_request_url;

/// Where the workflow is; always back at `Idle` once a submit returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationState {
    /// Ready for a submit
    Idle,
    /// A probe is in flight
    Generating,
    /// The last probe came back OK
    Success,
    /// The last probe failed
    Failed,
}

/// Holds the displayed image, the JSON preview and the history, and runs
/// submits one at a time.
#[derive(Debug)]
pub struct Generator<F, S> {
    settings: Settings,
    fetcher: F,
    history: HistoryStore<S>,
    state: GenerationState,
    current_image: Option<Url>,
    preview_json: Option<Value>,
}

impl<F: ImageFetcher, S: KeyValueStore> Generator<F, S> {
    /// Creates the generator and loads the persisted history from `store`.
    pub fn new(settings: Settings, fetcher: F, store: S) -> Self {
        let history = HistoryStore::open(store, &settings);
        Self {
            settings,
            fetcher,
            history,
            state: GenerationState::Idle,
            current_image: None,
            preview_json: None,
        }
    }

    /// Runs one generation and returns the URL of the image.
    ///
    /// An empty prompt is rejected before anything is fetched. A failed
    /// probe is returned as an error and nothing is recorded.
    pub async fn submit(&mut self, config: &Configuration) -> Result<Url> {
        if self.state == GenerationState::Generating {
            return Err(PromptpixError::Busy);
        }
        config.validate()?;

        self.transition(GenerationState::Generating);
        self.current_image = None;
        self.preview_json = None;

        match self.build_and_probe(config).await {
            Ok(url) => {
                self.transition(GenerationState::Success);
                self.current_image = Some(url.clone());
                if let Err(err) = self
                    .history
                    .record(HistoryEntry::now(config.prompt.clone(), url.as_str()))
                {
                    warn!("Generated image but couldn't save history: {}", err);
                }
                info!("Generated {}", url);
                self.transition(GenerationState::Idle);
                Ok(url)
            }
            Err(err) => {
                self.transition(GenerationState::Failed);
                error!("Failed to generate image: {}", err);
                self.transition(GenerationState::Idle);
                Err(err)
            }
        }
    }

    async fn build_and_probe(&self, config: &Configuration) -> Result<Url> {
        let url = build_request_url(&self.settings, config)?;
        self.fetcher.probe(&url).await?;
        Ok(url)
    }

    fn transition(&mut self, next: GenerationState) {
        debug!("Generation state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Renders the JSON export of `config` and keeps it as the preview.
    pub fn preview(&mut self, config: &Configuration) -> Result<&Value> {
        let value = config.to_json_value()?;
        Ok(self.preview_json.insert(value))
    }

    /// Saves the currently displayed image into `out_dir`.
    pub async fn download_current(&self, out_dir: &Path) -> Result<PathBuf> {
        let url = self
            .current_image
            .as_ref()
            .ok_or(PromptpixError::NothingToDownload)?;
        download_image(&self.fetcher, &self.settings, url, out_dir).await
    }

    /// Clears the history, in memory and on disk.
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }

    /// Current workflow state.
    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// URL of the image being displayed, if any.
    pub fn current_image(&self) -> Option<&Url> {
        self.current_image.as_ref()
    }

    /// The last JSON preview, if any.
    pub fn preview_json(&self) -> Option<&Value> {
        self.preview_json.as_ref()
    }

    /// Recorded generations, newest first.
    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Settings this generator was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
