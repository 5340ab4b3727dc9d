//! Request-side plumbing shared by every dialect builder

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::{ImageGenError, Result};
use crate::types::{GenerationRequest, Resolution};

/// An input image read from disk and prepared for embedding
#[derive(Debug, Clone)]
pub(crate) struct EncodedImage {
    /// MIME type inferred from the file extension
    pub mime_type: &'static str,
    /// Base64-encoded raw file bytes
    pub data: String,
}

impl EncodedImage {
    /// Read and base64-encode an image file
    ///
    /// The MIME type is inferred from the extension alone; unknown
    /// extensions default to `image/png`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).map_err(|_| ImageGenError::InputImage(path.to_path_buf()))?;

        Ok(Self {
            mime_type: mime_for_path(path),
            data: BASE64.encode(bytes),
        })
    }

    /// Render as a `data:` URI for chat-completion style dialects
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    let lower = path.to_string_lossy().to_lowercase();
    if lower.ends_with(".webp") {
        "image/webp"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "image/png"
    }
}

/// Everything a dialect builder needs to produce a wire request
pub(crate) struct BuildContext<'a> {
    pub prompt: &'a str,
    pub model: &'a str,
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub resolution: Resolution,
    pub aspect_ratio: &'a str,
    pub search_web: bool,
    pub image: Option<&'a EncodedImage>,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        request: &'a GenerationRequest,
        model: &'a str,
        api_key: &'a str,
        base_url: &'a str,
        image: Option<&'a EncodedImage>,
    ) -> Self {
        Self {
            prompt: &request.prompt,
            model,
            api_key,
            base_url,
            resolution: request.resolution,
            aspect_ratio: &request.aspect_ratio,
            search_web: request.search_web,
            image,
        }
    }
}

/// A fully built outgoing HTTP request
pub(crate) struct WireRequest {
    /// Target URL, credentials included where the dialect puts them
    /// in the query string
    pub url: String,
    /// Bearer token for dialects that authenticate via header
    pub bearer: Option<String>,
    /// JSON body exactly as it goes on the wire
    pub body: serde_json::Value,
}

/// Serialize a wire struct to its JSON body
///
/// Wire types contain only strings, bools, and sequences, so
/// serialization cannot fail.
pub(crate) fn to_body<T: serde::Serialize>(wire: &T) -> serde_json::Value {
    serde_json::to_value(wire).expect("wire request types must serialize")
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn mime_inference_by_extension() {
        assert_eq!(mime_for_path(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("a.tiff")), "image/png");
    }

    #[test]
    fn encode_roundtrips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.png");
        let bytes: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01];
        std::fs::File::create(&path).unwrap().write_all(bytes).unwrap();

        let encoded = EncodedImage::from_path(&path).unwrap();
        assert_eq!(encoded.mime_type, "image/png");
        assert_eq!(BASE64.decode(&encoded.data).unwrap(), bytes);
    }

    #[test]
    fn unreadable_image_is_an_error() {
        let err = EncodedImage::from_path(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(err.to_string().contains("Failed to process input image"));
    }

    #[test]
    fn data_uri_shape() {
        let encoded = EncodedImage {
            mime_type: "image/webp",
            data: "AAAA".to_owned(),
        };
        assert_eq!(encoded.data_uri(), "data:image/webp;base64,AAAA");
    }
}
