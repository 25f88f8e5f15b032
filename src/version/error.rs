use thiserror::Error;

/// Failure talking to the lookup service
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Lookup service timed out")]
    Timeout,

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    #[error("App not found: {0}")]
    NotFound(String),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LookupError {
    /// Classifies a reqwest transport error, keeping timeouts distinct
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Network(error)
        }
    }
}

/// Failure resolving the version status of an app
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Unsupported platform: {0:?} (expected android or ios)")]
    UnsupportedPlatform(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Failure comparing two normalized versions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Local version ran out of components before the store version did
    #[error("Local version {local} has fewer components than store version {remote}")]
    LocalTooShort { local: String, remote: String },

    #[error("Invalid version component: {0:?}")]
    InvalidComponent(String),
}

/// Failure opening the store page on the host
#[derive(Debug, Error)]
pub enum StoreLaunchError {
    #[error("Store URL is unknown")]
    UnknownUrl,

    #[error("Failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
