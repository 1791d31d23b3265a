//! HTTP access to the image endpoint.

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::Settings;
use crate::error::{PromptpixError, Result};

/// What the workflow and the downloader need from the network.
pub trait ImageFetcher {
    /// GETs `url` and succeeds only on an OK status.
    fn probe(&self, url: &Url) -> impl Future<Output = Result<()>> + Send;

    /// GETs `url` and returns the body of an OK response.
    fn fetch_bytes(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// [`ImageFetcher`] backed by a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Client identifying itself as `<app_name>/<version>`.
    ///
    /// No timeout is set; the client's defaults apply.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!(
                "{}/{}",
                settings.app_name,
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }

    async fn get_ok(&self, url: &Url) -> Result<reqwest::Response> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(PromptpixError::Upstream {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

impl ImageFetcher for HttpFetcher {
    async fn probe(&self, url: &Url) -> Result<()> {
        info!("Probing {}", url);
        self.get_ok(url).await?;
        Ok(())
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let bytes = self.get_ok(url).await?.bytes().await?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
