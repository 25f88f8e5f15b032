//! Store version checking for installed mobile applications
//!
//! Given the version string of the running app and the platform it runs on,
//! this crate asks a remote lookup service for the version currently published
//! on the matching store (Google Play or the App Store) and decides whether the
//! installed build is out of date.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────┐
//! │ VersionStatusResolver│────▶│   StoreLookup    │──▶ lookup service (HTTP)
//! │      (resolve)       │     │ (fetch per store)│
//! └──────────────────────┘     └──────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐     ┌──────────────────┐
//! │  VersionNormalizer   │────▶│  VersionStatus   │──▶ needs_update()
//! │ (canonical N.N.N)    │     │ (result entity)  │     (comparator)
//! └──────────────────────┘     └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Resolver configuration and defaults
//! - [`diagnostics`]: Injected sink for non-fatal warnings
//! - [`launcher`]: Opening the store page on the host
//! - [`resolver`]: Orchestrates lookup, normalization and result assembly
//! - [`store`]: Platform selection and the lookup service client
//! - [`version`]: Normalization, comparison, result entity and error types
//!
//! # Example
//!
//! ```no_run
//! use store_version::config::ResolverConfig;
//! use store_version::resolver::VersionStatusResolver;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ResolverConfig::new("https://lookup.example.com").with_ios_id("1234567890");
//! let resolver = VersionStatusResolver::from_config(config)?;
//!
//! let status = resolver
//!     .resolve("android", Some("1.4.2+17"), "com.example.app")
//!     .await?;
//!
//! if status.needs_update()? {
//!     println!("{} is available at {}", status.app_store_version(), status.app_store_url());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod launcher;
pub mod resolver;
pub mod store;
pub mod version;
