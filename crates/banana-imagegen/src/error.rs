use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Image generation errors
///
/// Every error is terminal for its request; no retry happens anywhere
/// in the pipeline. Messages are written for direct display to the
/// artist by the host panel.
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// No provider with the requested name is configured
    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),

    /// Provider entry is missing its API key or base URL
    #[error("Missing API Key or Base URL.")]
    MissingCredentials,

    /// Input image could not be read
    #[error("Failed to process input image: {}", .0.display())]
    InputImage(PathBuf),

    /// Provider returned a non-success HTTP status
    #[error("HTTP Error: {0}")]
    HttpStatus(u16),

    /// Network-level failure (DNS, TLS, reset, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body was not valid JSON
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Response JSON carried no recognizable image for its dialect
    #[error("No image found in response.")]
    NoImageInResponse,

    /// Decoded image bytes could not be written to disk
    #[error("Failed to save base64 image: {0}")]
    SaveImage(String),

    /// Remote image could not be downloaded or written to disk
    #[error("Failed to download image from URL: {0}")]
    DownloadImage(String),

    /// Generator setup failure (output directory, HTTP client)
    #[error("Configuration error: {0}")]
    Config(String),
}
