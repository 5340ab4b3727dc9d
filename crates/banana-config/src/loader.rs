use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment
    /// variable expansion fails, TOML parsing fails, or validation
    /// fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Empty API keys and base URLs are tolerated here so the request
    /// path can report them in its own terms; only values that can
    /// never work are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if a provider has an empty model identifier or
    /// a base URL that is not a valid URL
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, provider) in &self.providers {
            if provider.model.trim().is_empty() {
                anyhow::bail!("provider '{name}' must set a model identifier");
            }

            if let Some(base_url) = &provider.base_url
                && !base_url.is_empty()
            {
                url::Url::parse(base_url)
                    .map_err(|e| anyhow::anyhow!("provider '{name}' has an invalid base_url: {e}"))?;
            }
        }

        Ok(())
    }
}
