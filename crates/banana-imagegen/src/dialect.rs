//! Provider API dialect classification
//!
//! Which JSON shape a provider speaks is inferred from its name and
//! base URL by substring matching. The heuristic is best-effort and
//! never fails: anything not recognized falls back to the
//! Gemini-compatible proxy dialect.

/// A provider-specific request/response JSON shape and endpoint
/// convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderDialect {
    /// OpenRouter chat-completion API with image modality
    OpenRouter,
    /// Official Google Generative Language API
    GoogleOfficial,
    /// GptGod chat-completion API with URL-bearing responses
    GptGod,
    /// Third-party Gemini-compatible relay (fallback)
    GeminiProxy,
}

impl ProviderDialect {
    /// Classify a provider by name and base URL
    ///
    /// First match in priority order wins; the comparison is
    /// case-insensitive. The fallback captures anything not otherwise
    /// matched, including third-party Gemini-compatible proxies.
    pub fn classify(name: &str, base_url: &str) -> Self {
        let name = name.to_lowercase();
        let base_url = base_url.to_lowercase();

        if name.contains("openrouter") || base_url.contains("openrouter.ai") {
            Self::OpenRouter
        } else if base_url.contains("generativelanguage.googleapis.com")
            || (name.contains("google") && name.contains("gemini") && !name.contains("yunwu"))
        {
            Self::GoogleOfficial
        } else if name.contains("gptgod") || base_url.contains("gptgod") {
            Self::GptGod
        } else {
            Self::GeminiProxy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProviderDialect::{self, GeminiProxy, GoogleOfficial, GptGod, OpenRouter};

    fn classify(name: &str, base_url: &str) -> ProviderDialect {
        ProviderDialect::classify(name, base_url)
    }

    #[test]
    fn openrouter_by_name() {
        assert_eq!(classify("OpenRouter", "https://example.com"), OpenRouter);
    }

    #[test]
    fn openrouter_by_url() {
        assert_eq!(
            classify("my relay", "https://openrouter.ai/api/v1/chat/completions"),
            OpenRouter
        );
    }

    #[test]
    fn openrouter_wins_over_other_substrings() {
        // Name also matches the Google rule, but OpenRouter has priority
        assert_eq!(
            classify("openrouter google gemini", "https://example.com"),
            OpenRouter
        );
    }

    #[test]
    fn google_official_by_host() {
        assert_eq!(
            classify("anything", "https://generativelanguage.googleapis.com/v1beta"),
            GoogleOfficial
        );
    }

    #[test]
    fn google_official_by_name_pair() {
        assert_eq!(
            classify("Google Gemini", "https://my-proxy.example.com"),
            GoogleOfficial
        );
    }

    #[test]
    fn yunwu_in_name_demotes_to_proxy() {
        assert_eq!(
            classify("Google Gemini Yunwu Relay", "https://yunwu.example.com/v1beta"),
            GeminiProxy
        );
    }

    #[test]
    fn google_name_without_gemini_is_proxy() {
        assert_eq!(classify("Google Relay", "https://relay.example.com"), GeminiProxy);
    }

    #[test]
    fn gptgod_by_name() {
        assert_eq!(classify("GPTGod", "https://example.com"), GptGod);
    }

    #[test]
    fn gptgod_by_url() {
        assert_eq!(
            classify("cheap relay", "https://gptgod.online/v1/chat/completions"),
            GptGod
        );
    }

    #[test]
    fn official_host_wins_over_gptgod_name() {
        assert_eq!(
            classify("gptgod mirror", "https://generativelanguage.googleapis.com/v1beta"),
            GoogleOfficial
        );
    }

    #[test]
    fn unknown_falls_back_to_proxy() {
        assert_eq!(
            classify("Nano Banana CN", "https://api.nano-banana.example.cn/v1beta"),
            GeminiProxy
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("OPENROUTER", ""), OpenRouter);
        assert_eq!(classify("", "HTTPS://GPTGOD.ONLINE"), GptGod);
    }
}
