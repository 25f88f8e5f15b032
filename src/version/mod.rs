//! Version layer: normalization, comparison and the resolution result
//!
//! - [`normalizer`]: Extracts `N(.N)*` from raw version strings
//! - [`comparator`]: Decides whether a local version is behind the store
//! - [`status`]: `VersionStatus`, the value handed to callers
//! - [`error`]: Error types for lookup, resolution, comparison and launch

pub mod comparator;
pub mod error;
pub mod normalizer;
pub mod status;

pub use comparator::is_update_required;
pub use error::{CompareError, LookupError, ResolveError, StoreLaunchError};
pub use normalizer::{FALLBACK_VERSION, VersionNormalizer};
pub use status::{UNKNOWN_STORE_URL, VersionStatus};
