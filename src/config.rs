use serde::Deserialize;

use crate::store::platform::PlatformIdentity;

// =============================================================================
// Lookup service constants
// =============================================================================

/// Timeout for a single lookup request in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// User-Agent sent with every lookup request
pub const USER_AGENT: &str = concat!("store-version/", env!("CARGO_PKG_VERSION"));

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Resolver configuration structure
///
/// `baseUrl` is required; there is no built-in lookup service host.
/// The remaining fields are optional and take their defaults when missing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Base URL of the lookup service
    pub base_url: String,
    /// Play Store identifier; falls back to the local package identifier
    #[serde(default)]
    pub android_id: Option<String>,
    /// App Store identifier; falls back to the local package identifier
    #[serde(default)]
    pub ios_id: Option<String>,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ResolverConfig {
    /// Configuration for the lookup service at `base_url` with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            android_id: None,
            ios_id: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_android_id(mut self, id: impl Into<String>) -> Self {
        self.android_id = Some(id.into());
        self
    }

    pub fn with_ios_id(mut self, id: impl Into<String>) -> Self {
        self.ios_id = Some(id.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The configured per-platform identifiers
    pub fn identity(&self) -> PlatformIdentity {
        PlatformIdentity::new(self.android_id.clone(), self.ios_id.clone())
    }
}
