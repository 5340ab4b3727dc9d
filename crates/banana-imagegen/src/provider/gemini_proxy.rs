//! Gemini-compatible relay dialect (fallback)
//!
//! Third-party proxies that mirror the Google API but expect camelCase
//! keys inside `generationConfig` and a lowercase `"image"` modality.
//! URL construction, input-image handling, search tooling, and
//! response decoding are shared with the official dialect.

use serde::Serialize;
use serde_json::Value;

use super::google::{GeminiContent, content_parts, extract_inline_data, generate_content_url, search_tools};
use super::{DialectAdapter, ImagePayload};
use crate::request::{BuildContext, WireRequest, to_body};

pub(crate) struct GeminiProxyDialect;

#[derive(Serialize)]
struct ProxyRequest<'a> {
    contents: [GeminiContent<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: ProxyGenerationConfig<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyGenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    image_config: ProxyImageConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyImageConfig<'a> {
    aspect_ratio: &'a str,
    image_size: &'static str,
}

impl DialectAdapter for GeminiProxyDialect {
    fn build_request(&self, ctx: &BuildContext<'_>) -> WireRequest {
        let wire = ProxyRequest {
            contents: content_parts(ctx),
            generation_config: ProxyGenerationConfig {
                response_modalities: ["image"],
                image_config: ProxyImageConfig {
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
