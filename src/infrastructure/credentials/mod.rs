//! Credentials management infrastructure
//!
//! The upstream API key is resolved by the config loader (YAML, `.env`,
//! or `OPENWEATHER_API_KEY`) and served from here on every cache miss.

use crate::domain::models::UpstreamConfig;
use crate::domain::ports::CredentialSource;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV_VAR: &str = "OPENWEATHER_API_KEY";

/// Credential taken from loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigCredentials {
    api_key: Option<String>,
}

impl ConfigCredentials {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(config.api_key.clone())
    }
}

impl CredentialSource for ConfigCredentials {
    fn api_key(&self) -> Option<String> {
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// Mask a credential for display, keeping the last four characters.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_credentials() {
        assert_eq!(
            ConfigCredentials::new(Some("abc".to_string())).api_key(),
            Some("abc".to_string())
        );
        assert_eq!(ConfigCredentials::new(Some(String::new())).api_key(), None);
        assert_eq!(ConfigCredentials::default().api_key(), None);
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("0123456789abcdef"), "****cdef");
        assert_eq!(mask_api_key("abc"), "****");
    }
}
