//! GptGod chat-completion dialect
//!
//! No structured image fields at all: the aspect ratio rides on the
//! prompt text, resolution picks a suffixed model variant, and the
//! response may put the image URL in half a dozen places. Extraction
//! is an ordered list of strategies tried in sequence.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::{DialectAdapter, ImagePayload};
use crate::request::{BuildContext, WireRequest, to_body};
use crate::types::Resolution;

pub(crate) struct GptGodDialect;

/// The one model known to expose resolution-suffixed variants
const SUFFIXED_MODEL: &str = "gemini-3-pro-image-preview";

#[derive(Serialize)]
struct GptGodRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    stream: bool,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: Cow<'a, str> },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// Resolution-suffixed model name, applied only to the known model on
/// the gptgod.online host
fn effective_model<'a>(base_url: &str, model: &'a str, resolution: Resolution) -> Cow<'a, str> {
    if base_url.contains("gptgod.online") && model == SUFFIXED_MODEL {
        match resolution {
            Resolution::OneK => Cow::Borrowed(model),
            Resolution::TwoK => Cow::Owned(format!("{model}-2k")),
            Resolution::FourK => Cow::Owned(format!("{model}-4k")),
        }
    } else {
        Cow::Borrowed(model)
    }
}

/// Append the ratio to the prompt text; this dialect has no
/// structured aspect-ratio field
fn prompt_with_ratio<'a>(prompt: &'a str, aspect_ratio: &str) -> Cow<'a, str> {
    if aspect_ratio == "1:1" {
        Cow::Borrowed(prompt)
    } else {
        Cow::Owned(format!("{prompt} --aspect-ratio {aspect_ratio}"))
    }
}

impl DialectAdapter for GptGodDialect {
    fn build_request(&self, ctx: &BuildContext<'_>) -> WireRequest {
        let model = effective_model(ctx.base_url, ctx.model, ctx.resolution);

        let mut content = vec![ContentPart::Text {
            text: prompt_with_ratio(ctx.prompt, ctx.aspect_ratio),
        }];

        if let Some(image) = ctx.image {
            content.push(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.data_uri(),
                },
            });
        }

        let wire = GptGodRequest {
            model: &model,
            messages: [Message {
                role: "user",
                content,
            }],
            stream: false,
        };

        WireRequest {
            url: ctx.base_url.to_owned(),
            bearer: Some(ctx.api_key.to_owned()),
            body: to_body(&wire),
        }
    }

    fn extract_image(&self, body: &Value) -> Option<ImagePayload> {
        const STRATEGIES: [fn(&Value) -> Option<String>; 4] =
            [top_level_image, images_array, data_entry_url, chat_content_scan];

        STRATEGIES
            .iter()
            .find_map(|strategy| strategy(body))
            .filter(|url| !url.is_empty())
            .map(ImagePayload::Remote)
    }
}

// -- Extraction strategies, in priority order --

fn top_level_image(body: &Value) -> Option<String> {
    body.get("image").and_then(Value::as_str).map(str::to_owned)
}

fn images_array(body: &Value) -> Option<String> {
    body.pointer("/images/0").and_then(Value::as_str).map(str::to_owned)
}

fn data_entry_url(body: &Value) -> Option<String> {
    body.pointer("/data/0/url").and_then(Value::as_str).map(str::to_owned)
}

/// Scan assistant text for a markdown image link, then a bare URL with
/// a known image extension
fn chat_content_scan(body: &Value) -> Option<String> {
    static MARKDOWN: OnceLock<Regex> = OnceLock::new();
    static BARE_URL: OnceLock<Regex> = OnceLock::new();

    let content = body.pointer("/choices/0/message/content")?.as_str()?;

    let markdown = MARKDOWN.get_or_init(|| {
        Regex::new(r"!\[.*?\]\((https?://[^)]+)\)").expect("must be valid regex")
    });
    if let Some(caps) = markdown.captures(content) {
        return Some(caps[1].to_owned());
    }

    let bare = BARE_URL.get_or_init(|| {
        Regex::new(r"(?i)(https?://\S+\.(?:png|jpg|jpeg|webp|gif))").expect("must be valid regex")
    });
    bare.captures(content).map(|caps| caps[1].to_owned())
}
