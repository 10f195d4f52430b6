use serde::Serialize;

use crate::audio::tone::ToneSpec;
use crate::catalog;

/// Run-wide settings, built from CLI defaults and passed down explicitly.
///
/// There is no config file; the generator is meant to produce the same
/// asset set on every invocation.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorConfig {
    /// Language code for the speech backend.
    pub language: String,
    /// Top-level domain of the translate host ("com" unless region-pinned).
    pub tld: String,
    /// Ask the backend for the slower speech rate.
    pub slow: bool,
    pub tone: ToneSpec,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: catalog::LANGUAGE.to_string(),
            tld: "com".to_string(),
            slow: false,
            tone: ToneSpec::default(),
        }
    }
}
