//! Image materialization
//!
//! Writes inline base64 payloads straight to disk and downloads remote
//! URLs. Filenames carry a second-granularity timestamp, so two
//! generations completing within the same second collide on the same
//! path; callers wanting stronger guarantees pass distinct output
//! directories.

use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::{ImageGenError, Result};
use crate::provider::ImagePayload;

/// Download timeout; the generation call itself allows 300 seconds
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Some CDNs refuse requests without a browser-looking user agent
const DOWNLOAD_USER_AGENT: &str = "Mozilla/5.0";

const FILE_PREFIX: &str = "banana";

pub(crate) struct Materializer {
    output_dir: PathBuf,
    client: reqwest::Client,
}

impl Materializer {
    /// Create a materializer, creating the output directory if absent
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            ImageGenError::Config(format!(
                "failed to create output directory {}: {e}",
                output_dir.display()
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| ImageGenError::Config(format!("failed to build download client: {e}")))?;

        Ok(Self { output_dir, client })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Persist a decoded payload, returning the saved file's path
    pub async fn save(&self, payload: ImagePayload) -> Result<PathBuf> {
        let timestamp = timestamp();

        match payload {
            ImagePayload::Inline(data) => self.save_inline(&timestamp, &data),
            ImagePayload::Remote(url) => self.download(&timestamp, &url).await,
        }
    }

    fn save_inline(&self, timestamp: &str, data: &str) -> Result<PathBuf> {
        let bytes = BASE64
            .decode(data)
            .map_err(|e| ImageGenError::SaveImage(e.to_string()))?;

        let path = self.output_dir.join(format!("{FILE_PREFIX}_{timestamp}.png"));
        std::fs::write(&path, bytes).map_err(|e| ImageGenError::SaveImage(e.to_string()))?;

        tracing::debug!(path = %path.display(), "saved inline image");
        Ok(path)
    }

    async fn download(&self, timestamp: &str, url: &str) -> Result<PathBuf> {
        // Extension keyed off the URL alone; bytes are written verbatim
        // without content-type sniffing, so a JPEG behind a bare URL
        // still lands in a .png file
        let extension = if url.to_lowercase().contains(".webp") {
            "webp"
        } else {
            "png"
        };
        let path = self
            .output_dir
            .join(format!("{FILE_PREFIX}_{timestamp}.{extension}"));

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, DOWNLOAD_USER_AGENT)
            .send()
            .await
            .map_err(|e| ImageGenError::DownloadImage(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageGenError::DownloadImage(format!("HTTP Error: {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageGenError::DownloadImage(e.to_string()))?;

        std::fs::write(&path, &bytes).map_err(|e| ImageGenError::DownloadImage(e.to_string()))?;

        tracing::debug!(path = %path.display(), url, "downloaded remote image");
        Ok(path)
    }
}

/// Second-granularity local timestamp used in output filenames
pub(crate) fn timestamp() -> String {
    jiff::Zoned::now().strftime("%Y%m%d%H%M%S").to_string()
}
