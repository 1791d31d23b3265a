//! Capped, newest-first history of successful generations.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::Settings;
use crate::constants::HISTORY_TIME_FORMAT;
use crate::error::{PromptpixError, Result};
use crate::store::KeyValueStore;

/// One past generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Prompt that was submitted
    pub prompt: String,
    /// URL the image was served from
    pub image_url: String,
    /// Local time of the generation, already formatted for display
    pub time: String,
}

impl HistoryEntry {
    /// Entry stamped with the current local time.
    pub fn now(prompt: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image_url: image_url.into(),
            time: Local::now().format(HISTORY_TIME_FORMAT).to_string(),
        }
    }
}

/// History persisted as a JSON array under a single store key.
#[derive(Debug)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
    limit: usize,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Empty history over `store`; call [`HistoryStore::load`] to read what
    /// was persisted.
    pub fn new(store: S, settings: &Settings) -> Self {
        Self {
            store,
            key: settings.history_key.clone(),
            limit: settings.history_limit,
            entries: Vec::new(),
        }
    }

    /// Creates the store and loads it in one go.
    pub fn open(store: S, settings: &Settings) -> Self {
        let mut history = Self::new(store, settings);
        history.load();
        history
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// A missing key, an unreadable store or malformed JSON all leave the
    /// history empty; none of them are reported to the caller.
    pub fn load(&mut self) -> &[HistoryEntry] {
        self.entries = match self.store.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(self.limit);
                    entries
                }
                Err(err) => {
                    warn!("Discarding malformed history under {}: {}", self.key, err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Couldn't read history under {}: {}", self.key, err);
                Vec::new()
            }
        };
        debug!("Loaded {} history entries", self.entries.len());
        &self.entries
    }

    /// Prepends `entry`, drops whatever falls past the cap and persists.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<()> {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        self.persist()
    }

    /// Empties the history and removes the persisted key.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.remove(&self.key)
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// URL of the most recent image, for downloads that don't name one.
    pub fn latest_image_url(&self) -> Result<Url> {
        let latest = self.latest().ok_or(PromptpixError::NothingToDownload)?;
        Url::parse(&latest.image_url).map_err(|err| {
            PromptpixError::Storage(format!(
                "history holds an invalid URL {}: {err}",
                latest.image_url
            ))
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there is no history.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hands back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(&self.key, &raw)
    }
}
