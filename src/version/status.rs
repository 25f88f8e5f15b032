//! Result of a version resolution

use serde::Serialize;

use crate::store::platform::Platform;
use crate::version::comparator::is_update_required;
use crate::version::error::CompareError;

/// Store URL used when the lookup service did not provide one
pub const UNKNOWN_STORE_URL: &str = "unknown";

/// Local and published versions of an app, plus where to get the update
///
/// Immutable once built. Whether an update is needed is computed from the
/// two versions on every call to [`VersionStatus::needs_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionStatus {
    platform: Platform,
    local_version: String,
    app_store_version: String,
    app_store_url: String,
}

impl VersionStatus {
    /// Builds a status from already normalized versions.
    ///
    /// A missing or blank `app_store_url` becomes [`UNKNOWN_STORE_URL`].
    pub fn new(
        platform: Platform,
        local_version: impl Into<String>,
        app_store_version: impl Into<String>,
        app_store_url: Option<&str>,
    ) -> Self {
        let app_store_url = app_store_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(UNKNOWN_STORE_URL)
            .to_string();

        Self {
            platform,
            local_version: local_version.into(),
            app_store_version: app_store_version.into(),
            app_store_url,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Normalized version of the running app
    pub fn local_version(&self) -> &str {
        &self.local_version
    }

    /// Normalized version published on the store
    pub fn app_store_version(&self) -> &str {
        &self.app_store_version
    }

    /// Store page, or `"unknown"`; never empty
    pub fn app_store_url(&self) -> &str {
        &self.app_store_url
    }

    pub fn has_store_url(&self) -> bool {
        self.app_store_url != UNKNOWN_STORE_URL
    }

    /// Whether the store version is ahead of the local one
    ///
    /// Fails when the local version has fewer components than the comparison
    /// needs; see [`is_update_required`].
    pub fn needs_update(&self) -> Result<bool, CompareError> {
        is_update_required(&self.local_version, &self.app_store_version)
    }
}
