//! Debug-mode request logging
//!
//! Echoes the outgoing request through tracing with any embedded input
//! image redacted, and persists the exact unredacted payload as a
//! timestamped JSON file next to the generated images. Diagnostic
//! only; failures here never affect the request.

use std::path::Path;

use serde_json::Value;

use crate::dialect::ProviderDialect;
use crate::request::WireRequest;
use crate::save;
use crate::types::GenerationRequest;

const REDACTED: &str = "<BASE64_IMAGE_DATA>";

pub(crate) fn log_request(
    output_dir: &Path,
    request: &GenerationRequest,
    dialect: ProviderDialect,
    wire: &WireRequest,
) {
    let redacted = redact_payload(wire.body.clone(), dialect);

    tracing::info!(
        provider = %request.provider,
        dialect = ?dialect,
        resolution = %request.resolution,
        aspect_ratio = %request.aspect_ratio,
        url = %wire.url,
        payload = %redacted,
        "debug mode: outgoing request"
    );

    persist_payload(output_dir, &wire.body);
}

/// Replace the base64 input image with a placeholder in the console
/// echo; the persisted file keeps the payload exactly as sent
pub(crate) fn redact_payload(mut body: Value, dialect: ProviderDialect) -> Value {
    let slot = match dialect {
        ProviderDialect::OpenRouter | ProviderDialect::GptGod => {
            body.pointer_mut("/messages/0/content/1/image_url/url")
        }
        ProviderDialect::GoogleOfficial | ProviderDialect::GeminiProxy => {
            body.pointer_mut("/contents/0/parts/1/inline_data/data")
        }
    };

    if let Some(value) = slot {
        *value = Value::String(REDACTED.to_owned());
    }

    body
}

fn persist_payload(output_dir: &Path, body: &Value) {
    let path = output_dir.join(format!("debug_payload_{}.json", save::timestamp()));

    let pretty = match serde_json::to_string_pretty(body) {
        Ok(pretty) => pretty,
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize debug payload");
            return;
        }
    };

    match std::fs::write(&path, pretty) {
        Ok(()) => tracing::info!(path = %path.display(), "debug payload saved"),
        Err(e) => tracing::warn!(error = %e, "failed to save debug payload"),
    }
}
