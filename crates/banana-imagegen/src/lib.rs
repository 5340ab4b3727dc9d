#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Image generation backend for painting-app panels
//!
//! A [`Generator`] turns one [`GenerationRequest`] into a saved image
//! file: classify the provider's API dialect, build the
//! dialect-specific HTTP request, send it, decode the response, and
//! materialize the result under the output directory. Each call is an
//! independent linear pipeline with no state shared between requests
//! beyond the output directory itself.

mod debug;
mod dialect;
mod error;
mod provider;
mod request;
mod save;
mod types;

use std::path::PathBuf;
use std::time::Duration;

use secrecy::ExposeSecret as _;

pub use dialect::ProviderDialect;
pub use error::{ImageGenError, Result};
pub use types::{GenerationRequest, Resolution, SUPPORTED_ASPECT_RATIOS, nearest_aspect_ratio};

use request::{BuildContext, EncodedImage};
use save::Materializer;

/// Timeout for the generation call itself; image downloads use a
/// shorter one (see `save`)
const GENERATE_TIMEOUT: Duration = Duration::from_secs(300);

/// Image generator routing requests to configured providers
pub struct Generator {
    config: banana_config::Config,
    client: reqwest::Client,
    materializer: Materializer,
}

impl Generator {
    /// Create a generator writing into `output_dir`
    ///
    /// The directory is created if absent. Output-directory resolution
    /// (platform data dirs, config overrides) is the caller's concern.
    pub fn new(config: banana_config::Config, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(GENERATE_TIMEOUT)
            .build()
            .map_err(|e| ImageGenError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            client,
            materializer: Materializer::new(output_dir.into())?,
        })
    }

    /// Generate one image, returning the path of the saved file
    ///
    /// The call blocks until the provider responds or times out; no
    /// retry happens on any failure, and dispatched requests cannot be
    /// cancelled.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<PathBuf> {
        let provider = self
            .config
            .provider(&request.provider)
            .ok_or_else(|| ImageGenError::ProviderNotFound(request.provider.clone()))?;

        let api_key = provider
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_owned())
            .unwrap_or_default();
        let base_url = provider.base_url.clone().unwrap_or_default();

        if api_key.is_empty() || base_url.is_empty() {
            return Err(ImageGenError::MissingCredentials);
        }

        let image = request
            .input_image
            .as_deref()
            .map(EncodedImage::from_path)
            .transpose()?;

        let dialect = ProviderDialect::classify(&request.provider, &base_url);
        let adapter = dialect.adapter();

        let ctx = BuildContext::new(request, &provider.model, &api_key, &base_url, image.as_ref());
        let wire = adapter.build_request(&ctx);

        if request.debug_mode {
            debug::log_request(self.materializer.output_dir(), request, dialect, &wire);
        }

        tracing::debug!(
            provider = %request.provider,
            dialect = ?dialect,
            model = %provider.model,
            "sending image generation request"
        );

        let mut http = self.client.post(&wire.url).json(&wire.body);
        if let Some(token) = &wire.bearer {
            http = http.bearer_auth(token);
        }

        let response = http.send().await.map_err(|e| {
            tracing::error!(provider = %request.provider, error = %e, "image generation request failed");
            ImageGenError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(provider = %request.provider, status = %status, "provider returned error status");
            return Err(ImageGenError::HttpStatus(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ImageGenError::InvalidResponse(e.to_string()))?;

        if request.debug_mode {
            tracing::debug!(response = %body, "provider response");
        }

        let payload = adapter
            .extract_image(&body)
            .ok_or(ImageGenError::NoImageInResponse)?;

        let path = self.materializer.save(payload).await?;

        tracing::debug!(provider = %request.provider, path = %path.display(), "image generation complete");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(config_toml: &str) -> Generator {
        let dir = tempfile::tempdir().unwrap();
        let config: banana_config::Config = toml::from_str(config_toml).unwrap();
        Generator::new(config, dir.path().join("out")).unwrap()
    }

    #[tokio::test]
    async fn unknown_provider_fails_without_network() {
        let generator = generator("");
        let request = GenerationRequest::new("nope", "p");
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, ImageGenError::ProviderNotFound(_)));
    }

    #[tokio::test]
    async fn empty_api_key_short_circuits() {
        let generator = generator(
            r#"
            [providers.p]
            api_key = ""
            base_url = "https://example.com/v1"
            model = "m"
            "#,
        );
        let request = GenerationRequest::new("p", "prompt");
        let err = generator.generate(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing API Key or Base URL.");
    }

    #[tokio::test]
    async fn missing_base_url_short_circuits() {
        let generator = generator(
            r#"
            [providers.p]
            api_key = "sk"
            model = "m"
            "#,
        );
        let request = GenerationRequest::new("p", "prompt");
        let err = generator.generate(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing API Key or Base URL.");
    }

    #[tokio::test]
    async fn unreadable_input_image_fails_before_send() {
        let generator = generator(
            r#"
            [providers.p]
            api_key = "sk"
            base_url = "https://example.com/v1"
            model = "m"
            "#,
        );
        let mut request = GenerationRequest::new("p", "prompt");
        request.input_image = Some("/nonexistent/ref.png".into());
        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, ImageGenError::InputImage(_)));
    }
}
