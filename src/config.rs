//! Config handling

use std::path::PathBuf;

use tracing::log::LevelFilter;
use url::Url;

use crate::constants::{DEFAULT_APP_NAME, DEFAULT_DATA_DIR, DEFAULT_ENDPOINT, HISTORY_KEY, HISTORY_LIMIT};
use crate::error::{PromptpixError, Result};
use crate::variant::Variant;

/// Crates that are only worth hearing from when debugging.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Warn),
    ("hyper_util", LevelFilter::Warn),
    ("rustls", LevelFilter::Warn),
    ("h2", LevelFilter::Warn),
];

/// Installs the logger; `debug` lifts every crate to debug level.
pub fn setup_logging(debug: bool) -> Result<()> {
    let logger = simple_logger::SimpleLogger::new();
    let logger = if debug {
        logger.with_level(LevelFilter::Debug)
    } else {
        QUIET_MODULES
            .iter()
            .fold(logger.with_level(LevelFilter::Info), |logger, (module, level)| {
                logger.with_module_level(module, *level)
            })
    };
    logger
        .init()
        .map_err(|err| PromptpixError::Logging(err.to_string()))
}

/// Runtime settings handed to every component that needs them.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Base URL of the image endpoint
    pub endpoint: Url,
    /// Used in downloaded file names and the user agent
    pub app_name: String,
    /// Store key the history lives under
    pub history_key: String,
    /// Maximum number of history entries
    pub history_limit: usize,
    /// Directory backing the key-value store
    pub data_dir: PathBuf,
    /// Which option groups are offered
    pub variant: Variant,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            app_name: DEFAULT_APP_NAME.to_string(),
            history_key: HISTORY_KEY.to_string(),
            history_limit: HISTORY_LIMIT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            variant: Variant::default(),
        }
    }
}

#[allow(clippy::expect_used)]
fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
}

impl Settings {
    /// Default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Points requests at another endpoint; it must be able to carry a path.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if endpoint.cannot_be_a_base() {
            return Err(PromptpixError::InvalidEndpoint(format!(
                "{endpoint} can't carry a path"
            )));
        }
        self.endpoint = endpoint;
        Ok(self)
    }

    /// Sets the application name.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Sets the store directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Sets the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Overrides the history key and cap.
    pub fn with_history(mut self, key: impl Into<String>, limit: usize) -> Self {
        self.history_key = key.into();
        self.history_limit = limit;
        self
    }
}
