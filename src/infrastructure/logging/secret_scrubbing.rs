use regex::Regex;
use std::sync::LazyLock;

/// Shared scrubber used by [`scrub_secrets`].
static SCRUBBER: LazyLock<SecretScrubber> = LazyLock::new(SecretScrubber::new);

/// Redact credentials from a message before it is logged or returned.
pub fn scrub_secrets(message: &str) -> String {
    SCRUBBER.scrub_message(message)
}

/// Scrubs credentials out of free-form text.
///
/// Covers the `appid` query parameter the upstream API takes, generic
/// `api_key`/`token`/`secret` fields, and bearer tokens.
#[derive(Debug, Clone)]
pub struct SecretScrubber {
    query_param_pattern: Regex,
    field_pattern: Regex,
    bearer_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Self {
        Self {
            // Match credential query parameters: ?appid=...&
            query_param_pattern: Regex::new(r"(?i)\b(appid|api_key|apikey)=[^&\s]+")
                .expect("query parameter pattern is valid"),
            // Match credential fields in JSON or key: value text
            field_pattern: Regex::new(
                r#"(?i)["']?(api_key|apikey|token|secret)["']?\s*:\s*["']?[a-zA-Z0-9\-_\.]{8,}["']?"#,
            )
            .expect("field pattern is valid"),
            // Match Bearer tokens in Authorization headers
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+")
                .expect("bearer pattern is valid"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = self
            .query_param_pattern
            .replace_all(message, "$1=[REDACTED]");
        let scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        self.field_pattern
            .replace_all(&scrubbed, "\"$1\": \"[REDACTED]\"")
            .into_owned()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}
