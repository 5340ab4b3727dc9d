pub(crate) mod gemini_proxy;
pub(crate) mod google;
pub(crate) mod gptgod;
pub(crate) mod openrouter;

use serde_json::Value;

use crate::dialect::ProviderDialect;
use crate::request::{BuildContext, WireRequest};

/// One image extracted from a provider response
///
/// Each dialect yields exactly one of these forms; a response with
/// neither is "no image found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImagePayload {
    /// Base64 image bytes embedded in the response JSON
    Inline(String),
    /// URL pointing at bytes that must be downloaded separately
    Remote(String),
}

/// Request builder and response decoder for one API dialect
pub(crate) trait DialectAdapter: Send + Sync {
    /// Produce the outgoing URL, credentials, and JSON body
    fn build_request(&self, ctx: &BuildContext<'_>) -> WireRequest;

    /// Pull the image out of a parsed response body
    fn extract_image(&self, body: &Value) -> Option<ImagePayload>;
}

impl ProviderDialect {
    /// The stateless adapter implementing this dialect
    pub(crate) fn adapter(self) -> &'static dyn DialectAdapter {
        match self {
            Self::OpenRouter => &openrouter::OpenRouterDialect,
            Self::GoogleOfficial => &google::GoogleOfficialDialect,
            Self::GptGod => &gptgod::GptGodDialect,
            Self::GeminiProxy => &gemini_proxy::GeminiProxyDialect,
        }
    }
}
