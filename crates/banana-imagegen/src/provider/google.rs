//! Official Google Generative Language dialect
//!
//! `generateContent` endpoint with the API key in the query string.
//! The request's `generationConfig` uses snake_case inner keys; the
//! compatible-proxy dialect differs only in that casing (see
//! `gemini_proxy`). Responses embed the image as base64 under
//! `candidates[0].content.parts[].inlineData.data`.

use serde::Serialize;
use serde_json::{Value, json};

use super::{DialectAdapter, ImagePayload};
use crate::request::{BuildContext, WireRequest, to_body};

pub(crate) struct GoogleOfficialDialect;

#[derive(Serialize)]
struct GoogleRequest<'a> {
    contents: [GeminiContent<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Value>>,
}

#[derive(Serialize)]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    image_config: ImageConfig<'a>,
}

#[derive(Serialize)]
struct ImageConfig<'a> {
    aspect_ratio: &'a str,
    image_size: &'static str,
}

/// Content wrapper shared with the proxy dialect
#[derive(Serialize)]
pub(super) struct GeminiContent<'a> {
    pub parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub(super) enum GeminiPart<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Serialize)]
pub(super) struct InlineData<'a> {
    pub mime_type: &'a str,
    pub data: &'a str,
}

/// `{base}/models/{model}:generateContent?key={key}` with a single
/// trailing slash stripped from the base URL
pub(super) fn generate_content_url(base_url: &str, model: &str, api_key: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base}/models/{model}:generateContent?key={api_key}")
}

/// Text part plus optional inline input image
pub(super) fn content_parts<'a>(ctx: &BuildContext<'a>) -> [GeminiContent<'a>; 1] {
    let mut parts = vec![GeminiPart::Text { text: ctx.prompt }];

    if let Some(image) = ctx.image {
        parts.push(GeminiPart::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type,
                data: &image.data,
            },
        });
    }

    [GeminiContent { parts }]
}

/// `google_search` tool injection, shared with the proxy dialect
pub(super) fn search_tools(search_web: bool) -> Option<Vec<Value>> {
    search_web.then(|| vec![json!({"google_search": {}})])
}

/// First part carrying `inlineData.data`, ignoring any preceding text
/// parts; shared with the proxy dialect
pub(super) fn extract_inline_data(body: &Value) -> Option<ImagePayload> {
    let parts = body.pointer("/candidates/0/content/parts")?.as_array()?;

    parts.iter().find_map(|part| {
        part.pointer("/inlineData/data")
            .and_then(Value::as_str)
            .map(|data| ImagePayload::Inline(data.to_owned()))
    })
}

impl DialectAdapter for GoogleOfficialDialect {
    fn build_request(&self, ctx: &BuildContext<'_>) -> WireRequest {
        let wire = GoogleRequest {
            contents: content_parts(ctx),
            generation_config: GenerationConfig {
                response_modalities: ["IMAGE"],
                image_config: ImageConfig {
                    aspect_ratio: ctx.aspect_ratio,
                    image_size: ctx.resolution.as_str(),
                },
            },
            tools: search_tools(ctx.search_web),
        };

        WireRequest {
            url: generate_content_url(ctx.base_url, ctx.model, ctx.api_key),
            bearer: None,
            body: to_body(&wire),
        }
    }

    fn extract_image(&self, body: &Value) -> Option<ImagePayload> {
        extract_inline_data(body)
    }
}
