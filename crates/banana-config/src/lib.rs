#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod provider;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

pub use provider::ProviderConfig;

/// Top-level banana configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Image provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, ProviderConfig>,
    /// Output and diagnostics settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Look up a provider by name
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.get(name)
    }
}

/// Output and diagnostics settings
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory generated images are written to
    ///
    /// When absent, the caller resolves a platform-appropriate
    /// application data directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Echo and persist outgoing request payloads
    #[serde(default)]
    pub debug_mode: bool,
}
