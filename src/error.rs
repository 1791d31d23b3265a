//! Error handling

use reqwest::StatusCode;

/// Errors raised by the promptpix library.
#[derive(Debug)]
pub enum PromptpixError {
    /// The prompt was empty or only whitespace
    EmptyPrompt,
    /// The prompt can't be carried as a URL path segment, eg `..`
    InvalidPrompt(String),
    /// A value did not match any known option, eg an unknown aspect ratio
    InvalidOption(String),
    /// A generation is already in flight
    Busy,
    /// There is no generated image to download yet
    NothingToDownload,
    /// The endpoint answered with a non-OK status
    Upstream {
        /// Status returned by the endpoint
        status: StatusCode,
        /// URL that was requested
        url: String,
    },
    /// Transport-level failure talking to the endpoint
    Http(String),
    /// The configured endpoint can't be used to build request URLs
    InvalidEndpoint(String),
    /// Reading or writing the local store failed
    Storage(String),
    /// JSON encoding or decoding failed
    Serialization(String),
    /// Image bytes couldn't be decoded or re-encoded
    Image(String),
    /// The logger couldn't be installed
    Logging(String),
}

impl std::fmt::Display for PromptpixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPrompt => write!(f, "A prompt is required"),
            Self::InvalidPrompt(prompt) => {
                write!(f, "The prompt `{prompt}` can't be used in a request URL")
            }
            Self::InvalidOption(msg) => write!(f, "Invalid option: {msg}"),
            Self::Busy => write!(f, "A generation is already in progress"),
            Self::NothingToDownload => write!(f, "No image has been generated yet"),
            Self::Upstream { status, url } => {
                write!(f, "Image API error {status} for {url}")
            }
            Self::Http(msg) => write!(f, "HTTP error: {msg}"),
            Self::InvalidEndpoint(msg) => write!(f, "Invalid endpoint: {msg}"),
            Self::Storage(msg) => write!(f, "Storage error: {msg}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            Self::Image(msg) => write!(f, "Image error: {msg}"),
            Self::Logging(msg) => write!(f, "Failed to initialize logger: {msg}"),
        }
    }
}

impl std::error::Error for PromptpixError {}

impl From<reqwest::Error> for PromptpixError {
    fn from(err: reqwest::Error) -> Self {
        PromptpixError::Http(err.to_string())
    }
}

impl From<url::ParseError> for PromptpixError {
    fn from(err: url::ParseError) -> Self {
        PromptpixError::InvalidEndpoint(err.to_string())
    }
}

impl From<std::io::Error> for PromptpixError {
    fn from(err: std::io::Error) -> Self {
        PromptpixError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PromptpixError {
    fn from(err: serde_json::Error) -> Self {
        PromptpixError::Serialization(err.to_string())
    }
}

impl From<image::ImageError> for PromptpixError {
    fn from(err: image::ImageError) -> Self {
        PromptpixError::Image(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PromptpixError>;
