use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_REGION: &str = "Australia";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct NutrihelpConfig {
    pub llm: LLMConfig,
    pub storage: StorageConfig,
    /// Region whose supermarkets the meal plan should draw from.
    pub region: String,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub api_url: String,
    pub gemini_api_key: String,
    pub text_model: String,
    pub vision_model: String,
    pub request_timeout: Option<Duration>,
}

impl LLMConfig {
    pub fn new(gemini_api_key: String) -> Self {
        Self {
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            gemini_api_key,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("api_url", &self.api_url)
            .field("gemini_api_key", &"<redacted>")
            .field("text_model", &self.text_model)
            .field("vision_model", &self.vision_model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let nanos = now.timestamp_subsec_nanos();
    let timestamp = Timestamp::from_unix(NoContext, seconds, nanos);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_config_debug_redacts_the_key() {
        let config = LLMConfig::new("super-secret".to_string());
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn llm_config_defaults() {
        let config = LLMConfig::new("key".to_string());
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.vision_model, DEFAULT_VISION_MODEL);
        assert_eq!(config.api_url, DEFAULT_GEMINI_API_URL);
    }
}
