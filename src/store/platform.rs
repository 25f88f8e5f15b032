//! Supported store platforms
//!
//! All Android/iOS branching lives here: which response field carries the
//! version, which carries the store URL, and which configured identifier
//! applies.

use std::fmt;

use serde::Serialize;

use crate::store::lookup::LookupResponse;
use crate::version::error::ResolveError;

/// Platform with a supported app store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Google Play
    Android,
    /// Apple App Store
    Ios,
}

impl Platform {
    /// Maps an operating system name (e.g. `std::env::consts::OS`) to a platform.
    ///
    /// Anything other than `android` or `ios` is rejected with
    /// [`ResolveError::UnsupportedPlatform`].
    pub fn from_os(os: &str) -> Result<Self, ResolveError> {
        os.parse()
            .map_err(|()| ResolveError::UnsupportedPlatform(os.to_string()))
    }

    /// Value sent as the `platform` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    /// Human readable store name
    pub fn store_name(&self) -> &'static str {
        match self {
            Platform::Android => "Google Play",
            Platform::Ios => "App Store",
        }
    }

    /// Raw published version for this platform from a lookup response
    pub fn select_version<'a>(&self, response: &'a LookupResponse) -> Option<&'a str> {
        match self {
            Platform::Android => response.playstore.as_deref(),
            Platform::Ios => response.appstore.as_deref(),
        }
    }

    /// Store URL for this platform, ignoring blank values
    pub fn select_url<'a>(&self, response: &'a LookupResponse) -> Option<&'a str> {
        let url = match self {
            Platform::Android => response.meta.playstore_url.as_deref(),
            Platform::Ios => response.meta.appstore_url.as_deref(),
        };
        url.map(str::trim).filter(|u| !u.is_empty())
    }
}

impl std::str::FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional store identifiers, one per platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformIdentity {
    android_id: Option<String>,
    ios_id: Option<String>,
}

impl PlatformIdentity {
    pub fn new(android_id: Option<String>, ios_id: Option<String>) -> Self {
        Self { android_id, ios_id }
    }

    /// Explicitly configured identifier for `platform`
    pub fn configured(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Android => self.android_id.as_deref(),
            Platform::Ios => self.ios_id.as_deref(),
        }
    }

    /// Identifier to look up on `platform`.
    ///
    /// The configured identifier wins; otherwise the local package identifier
    /// is used, since most apps publish under their own bundle/package name.
    pub fn effective_id<'a>(&'a self, platform: Platform, package_id: &'a str) -> &'a str {
        self.configured(platform).unwrap_or(package_id)
    }
}
