//! Reduces arbitrary version strings to `N(.N)*`

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::diagnostics::{Diagnostics, NormalizationWarning, TracingDiagnostics};

/// Returned when no dotted-numeric version can be found
pub const FALLBACK_VERSION: &str = "0.0.0";

/// An ASCII digit run, optionally followed by `.digits` groups.
/// `\d` would also match non-ASCII digits, which are not valid components.
static DOTTED_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)*").unwrap());

/// First maximal dotted-numeric substring of `raw`
///
/// Examples:
/// - "v1.4.2-beta" -> Some("1.4.2")
/// - "2.0.0+45" -> Some("2.0.0")
/// - "1." -> Some("1")
/// - "beta" -> None
pub fn extract_version(raw: &str) -> Option<&str> {
    DOTTED_NUMERIC_RE.find(raw).map(|m| m.as_str())
}

/// Normalizes raw version strings, reporting fallbacks to a [`Diagnostics`] sink
#[derive(Clone)]
pub struct VersionNormalizer {
    diagnostics: Arc<dyn Diagnostics>,
}

impl VersionNormalizer {
    pub fn new(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Canonical form of `raw`; never fails.
    ///
    /// Absent input or input without any digits yields [`FALLBACK_VERSION`]
    /// and a [`NormalizationWarning`].
    pub fn normalize(&self, raw: Option<&str>) -> String {
        match raw.and_then(extract_version) {
            Some(version) => version.to_string(),
            None => {
                self.diagnostics
                    .normalization_warning(&NormalizationWarning::new(raw));
                FALLBACK_VERSION.to_string()
            }
        }
    }
}

impl Default for VersionNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(TracingDiagnostics))
    }
}
