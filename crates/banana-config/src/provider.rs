use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for a single image generation provider
///
/// The provider's name is the key of the `[providers]` table entry.
/// Which API dialect a provider speaks is inferred from its name and
/// base URL at request time, never stored here.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key sent as a bearer token or URL query credential
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Endpoint base URL
    ///
    /// For chat-completion style providers this is the full endpoint;
    /// for Gemini-style providers the `models/{model}:generateContent`
    /// path is appended at request time.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model identifier requested from the provider
    pub model: String,
}
