//! OpenRouter chat-completion dialect
//!
//! Single user message, image+text modalities, structured
//! `image_config`. Responses carry the image under
//! `choices[0].message.images[0].image_url.url`, either as a base64
//! data URI or a plain remote URL.

use serde::Serialize;
use serde_json::Value;

use super::{DialectAdapter, ImagePayload};
use crate::request::{BuildContext, WireRequest, to_body};

pub(crate) struct OpenRouterDialect;

#[derive(Serialize)]
struct OpenRouterRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    modalities: [&'static str; 2],
    image_config: ImageConfig<'a>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Content<'a>,
}

/// Plain text when there is no input image, a two-part array otherwise
#[derive(Serialize)]
#[serde(untagged)]
enum Content<'a> {
    Text(&'a str),
    Parts([ContentPart<'a>; 2]),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Serialize)]
struct ImageConfig<'a> {
    aspect_ratio: &'a str,
    image_size: &'static str,
}

impl DialectAdapter for OpenRouterDialect {
    fn build_request(&self, ctx: &BuildContext<'_>) -> WireRequest {
        let content = match ctx.image {
            Some(image) => Content::Parts([
                ContentPart::Text { text: ctx.prompt },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_uri(),
                    },
                },
            ]),
            None => Content::Text(ctx.prompt),
        };

        let wire = OpenRouterRequest {
            model: ctx.model,
            messages: [Message {
                role: "user",
                content,
            }],
            modalities: ["image", "text"],
            image_config: ImageConfig {
                aspect_ratio: ctx.aspect_ratio,
                image_size: ctx.resolution.as_str(),
            },
        };

        WireRequest {
            url: ctx.base_url.to_owned(),
            bearer: Some(ctx.api_key.to_owned()),
            body: to_body(&wire),
        }
    }

    fn extract_image(&self, body: &Value) -> Option<ImagePayload> {
        let url = body
            .pointer("/choices/0/message/images/0/image_url/url")?
            .as_str()?;

        if url.is_empty() {
            return None;
        }

        if url.starts_with("data:image") {
            if let Some((_, data)) = url.split_once(";base64,") {
                return Some(ImagePayload::Inline(data.to_owned()));
            }
        }

        Some(ImagePayload::Remote(url.to_owned()))
    }
}
