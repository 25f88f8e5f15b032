//! Lookup trait for fetching the published version of an app

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;

use crate::store::platform::Platform;
use crate::version::error::LookupError;

/// Body returned by the lookup service
///
/// Both store versions may be present regardless of which platform was
/// requested; callers pick the one they need via [`Platform::select_version`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LookupResponse {
    /// Version published on the App Store
    pub appstore: Option<String>,
    /// Version published on Google Play
    pub playstore: Option<String>,
    pub meta: LookupMeta,
}

/// Store page links
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupMeta {
    pub appstore_url: Option<String>,
    pub playstore_url: Option<String>,
}

/// Trait for fetching published version metadata from a lookup service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StoreLookup: Send + Sync {
    /// Fetches the store metadata of `app_id` on `platform`
    ///
    /// # Returns
    /// * `Ok(LookupResponse)` - Parsed service response
    /// * `Err(LookupError)` - Transport, status or parse failure. Exactly one
    ///   attempt is made.
    async fn lookup(&self, platform: Platform, app_id: &str)
    -> Result<LookupResponse, LookupError>;
}
