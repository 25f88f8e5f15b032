//! Resolves the version status of an installed app
//!
//! One call, one lookup: the resolver picks the platform and identifier,
//! fetches the store metadata once, normalizes both versions and returns a
//! [`VersionStatus`]. Nothing is cached and no retries are made.

use std::sync::Arc;

use tracing::debug;

use crate::config::ResolverConfig;
use crate::diagnostics::Diagnostics;
use crate::store::client::LookupServiceClient;
use crate::store::lookup::StoreLookup;
use crate::store::platform::{Platform, PlatformIdentity};
use crate::version::error::{LookupError, ResolveError};
use crate::version::normalizer::VersionNormalizer;
use crate::version::status::VersionStatus;

/// Produces [`VersionStatus`] values from local version data and a store lookup
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent `resolve` calls.
#[derive(Clone)]
pub struct VersionStatusResolver {
    identity: PlatformIdentity,
    lookup: Arc<dyn StoreLookup>,
    normalizer: VersionNormalizer,
}

impl VersionStatusResolver {
    /// Creates a resolver with a custom lookup and the default tracing diagnostics
    pub fn new(identity: PlatformIdentity, lookup: Arc<dyn StoreLookup>) -> Self {
        Self {
            identity,
            lookup,
            normalizer: VersionNormalizer::default(),
        }
    }

    /// Creates a resolver talking to the lookup service described by `config`
    pub fn from_config(config: ResolverConfig) -> Result<Self, LookupError> {
        let client = LookupServiceClient::from_config(&config)?;
        Ok(Self::new(config.identity(), Arc::new(client)))
    }

    /// Replaces the sink that receives normalization warnings
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.normalizer = VersionNormalizer::new(diagnostics);
        self
    }

    pub fn identity(&self) -> &PlatformIdentity {
        &self.identity
    }

    /// Resolves the status of `package_id` running on `os`.
    ///
    /// # Arguments
    /// * `os` - Operating system name; only `android` and `ios` are supported
    /// * `local_version` - Raw version of the running app, possibly absent
    /// * `package_id` - Identifier of the running app, used when no store
    ///   identifier is configured for the platform
    ///
    /// # Errors
    /// * [`ResolveError::UnsupportedPlatform`] before any network traffic
    /// * [`ResolveError::Lookup`] with the lookup failure, unchanged
    pub async fn resolve(
        &self,
        os: &str,
        local_version: Option<&str>,
        package_id: &str,
    ) -> Result<VersionStatus, ResolveError> {
        let platform = Platform::from_os(os)?;
        self.resolve_platform(platform, local_version, package_id).await
    }

    /// Resolves for the operating system this binary was built for
    pub async fn resolve_for_host(
        &self,
        local_version: Option<&str>,
        package_id: &str,
    ) -> Result<VersionStatus, ResolveError> {
        self.resolve(std::env::consts::OS, local_version, package_id).await
    }

    /// Resolves for an already selected platform
    pub async fn resolve_platform(
        &self,
        platform: Platform,
        local_version: Option<&str>,
        package_id: &str,
    ) -> Result<VersionStatus, ResolveError> {
        let app_id = self.identity.effective_id(platform, package_id);
        debug!("Resolving {} version status for {}", platform, app_id);

        let response = self.lookup.lookup(platform, app_id).await?;

        let local = self.normalizer.normalize(local_version);
        let remote = self.normalizer.normalize(platform.select_version(&response));

        let status = VersionStatus::new(platform, local, remote, platform.select_url(&response));
        debug!(
            "{}: local {} / store {}",
            app_id,
            status.local_version(),
            status.app_store_version()
        );

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MockDiagnostics;
    use crate::store::lookup::{LookupMeta, LookupResponse, MockStoreLookup};
    use crate::version::status::UNKNOWN_STORE_URL;
    use mockall::predicate::eq;

    fn response(appstore: Option<&str>, playstore: Option<&str>) -> LookupResponse {
        LookupResponse {
            appstore: appstore.map(str::to_string),
            playstore: playstore.map(str::to_string),
            meta: LookupMeta {
                appstore_url: Some("https://apps.apple.com/app/id1234567890".to_string()),
                playstore_url: None,
            },
        }
    }

    #[tokio::test]
    async fn resolve_uses_package_id_when_no_identifier_configured() {
        let mut lookup = MockStoreLookup::new();
        lookup
            .expect_lookup()
            .with(eq(Platform::Android), eq("com.example.app"))
            .times(1)
            .returning(|_, _| Ok(response(None, Some("1.5.0"))));

        let resolver = VersionStatusResolver::new(PlatformIdentity::default(), Arc::new(lookup));
        let status = resolver
            .resolve("android", Some("v1.4.2-beta+3"), "com.example.app")
            .await
            .unwrap();

        assert_eq!(status.platform(), Platform::Android);
        assert_eq!(status.local_version(), "1.4.2");
        assert_eq!(status.app_store_version(), "1.5.0");
        assert_eq!(status.app_store_url(), UNKNOWN_STORE_URL);
        assert_eq!(status.needs_update(), Ok(true));
    }

    #[tokio::test]
    async fn resolve_uses_configured_identifier_for_platform() {
        let mut lookup = MockStoreLookup::new();
        lookup
            .expect_lookup()
            .with(eq(Platform::Ios), eq("1234567890"))
            .times(1)
            .returning(|_, _| Ok(response(Some("1.9.9"), Some("3.0.0"))));

        let identity = PlatformIdentity::new(None, Some("1234567890".to_string()));
        let resolver = VersionStatusResolver::new(identity, Arc::new(lookup));
        let status = resolver
            .resolve("ios", Some("2.0.0"), "com.example.app")
            .await
            .unwrap();

        assert_eq!(status.app_store_version(), "1.9.9");
        assert_eq!(
            status.app_store_url(),
            "https://apps.apple.com/app/id1234567890"
        );
        assert_eq!(status.needs_update(), Ok(false));
    }

    #[tokio::test]
    async fn resolve_rejects_unsupported_platform_without_lookup() {
        let mut lookup = MockStoreLookup::new();
        lookup.expect_lookup().never();

        let resolver = VersionStatusResolver::new(PlatformIdentity::default(), Arc::new(lookup));
        let result = resolver
            .resolve("linux", Some("1.0.0"), "com.example.app")
            .await;

        assert!(matches!(
            result,
            Err(ResolveError::UnsupportedPlatform(os)) if os == "linux"
        ));
    }

    #[tokio::test]
    async fn resolve_propagates_lookup_failure_after_one_attempt() {
        let mut lookup = MockStoreLookup::new();
        lookup
            .expect_lookup()
            .times(1)
            .returning(|_, _| Err(LookupError::Timeout));

        let resolver = VersionStatusResolver::new(PlatformIdentity::default(), Arc::new(lookup));
        let result = resolver
            .resolve("android", Some("1.0.0"), "com.example.app")
            .await;

        assert!(matches!(
            result,
            Err(ResolveError::Lookup(LookupError::Timeout))
        ));
    }

    #[tokio::test]
    async fn resolve_reports_missing_versions_to_diagnostics() {
        let mut lookup = MockStoreLookup::new();
        lookup
            .expect_lookup()
            .returning(|_, _| Ok(response(Some("1.0.0"), None)));

        let mut diagnostics = MockDiagnostics::new();
        // Local version absent and Play Store version absent.
        diagnostics
            .expect_normalization_warning()
            .withf(|warning| warning.raw.is_none())
            .times(2)
            .return_const(());

        let resolver = VersionStatusResolver::new(PlatformIdentity::default(), Arc::new(lookup))
            .with_diagnostics(Arc::new(diagnostics));
        let status = resolver
            .resolve("android", None, "com.example.app")
            .await
            .unwrap();

        assert_eq!(status.local_version(), "0.0.0");
        assert_eq!(status.app_store_version(), "0.0.0");
        assert_eq!(status.needs_update(), Ok(false));
    }

    #[tokio::test]
    async fn resolve_performs_a_fresh_lookup_every_call() {
        let mut lookup = MockStoreLookup::new();
        let mut seq = mockall::Sequence::new();
        lookup
            .expect_lookup()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(response(None, Some("1.0.0"))));
        lookup
            .expect_lookup()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(response(None, Some("1.1.0"))));

        let resolver = VersionStatusResolver::new(PlatformIdentity::default(), Arc::new(lookup));

        let first = resolver
            .resolve_platform(Platform::Android, Some("1.0.0"), "com.example.app")
            .await
            .unwrap();
        let second = resolver
            .resolve_platform(Platform::Android, Some("1.0.0"), "com.example.app")
            .await
            .unwrap();

        assert_eq!(first.needs_update(), Ok(false));
        assert_eq!(second.needs_update(), Ok(true));
    }
}
