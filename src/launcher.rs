//! Opening the store page for an update
//!
//! Presentation layers render their own prompt; when the user accepts they
//! hand the [`VersionStatus`] back here and the store page is opened through
//! a [`StoreLauncher`].

#[cfg(test)]
use mockall::automock;
use tracing::info;

use crate::version::error::StoreLaunchError;
use crate::version::status::VersionStatus;

/// Something that can open a URL on the host
#[cfg_attr(test, automock)]
pub trait StoreLauncher: Send + Sync {
    fn launch(&self, url: &str) -> Result<(), StoreLaunchError>;
}

/// Opens URLs with the host's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl StoreLauncher for SystemLauncher {
    fn launch(&self, url: &str) -> Result<(), StoreLaunchError> {
        open::that(url).map_err(|source| StoreLaunchError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Opens the store page of `status`
///
/// The `"unknown"` placeholder is refused with
/// [`StoreLaunchError::UnknownUrl`] without calling the launcher.
pub fn launch_store(
    status: &VersionStatus,
    launcher: &dyn StoreLauncher,
) -> Result<(), StoreLaunchError> {
    if !status.has_store_url() {
        return Err(StoreLaunchError::UnknownUrl);
    }

    info!(
        "Opening {} page: {}",
        status.platform().store_name(),
        status.app_store_url()
    );
    launcher.launch(status.app_store_url())
}
