//! Injected sink for non-fatal irregularities
//!
//! Normalization never fails; when it has to fall back it reports through a
//! [`Diagnostics`] implementation handed to it, instead of a global logger.

use std::fmt;

#[cfg(test)]
use mockall::automock;
use tracing::warn;

use crate::version::normalizer::FALLBACK_VERSION;

/// A raw version string had no dotted-numeric part and was replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationWarning {
    /// The offending input, `None` when no version was supplied at all
    pub raw: Option<String>,
}

impl NormalizationWarning {
    pub fn new(raw: Option<&str>) -> Self {
        Self {
            raw: raw.map(str::to_string),
        }
    }
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(
                f,
                "No version found in {:?}, falling back to {}",
                raw, FALLBACK_VERSION
            ),
            None => write!(f, "Version missing, falling back to {}", FALLBACK_VERSION),
        }
    }
}

/// Receiver of normalization warnings
#[cfg_attr(test, automock)]
pub trait Diagnostics: Send + Sync {
    fn normalization_warning(&self, warning: &NormalizationWarning);
}

/// Forwards warnings to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn normalization_warning(&self, warning: &NormalizationWarning) {
        warn!("{}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_message_quotes_raw_input() {
        let warning = NormalizationWarning::new(Some("beta"));
        assert_eq!(
            warning.to_string(),
            "No version found in \"beta\", falling back to 0.0.0"
        );
    }

    #[test]
    fn warning_message_for_missing_input() {
        let warning = NormalizationWarning::new(None);
        assert_eq!(
            warning.to_string(),
            "Version missing, falling back to 0.0.0"
        );
    }
}
