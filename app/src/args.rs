use std::{path::PathBuf, time::Duration};

use clap::Parser;
use nutrihelp_core::domain::common::{
    DEFAULT_GEMINI_API_URL, DEFAULT_REGION, DEFAULT_TEXT_MODEL, DEFAULT_VISION_MODEL, LLMConfig,
    NutrihelpConfig, StorageConfig,
};

#[derive(Clone, Parser)]
#[command(name = "nutrihelp", version, about = "Personal nutrition assistant for seniors")]
pub struct Args {
    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value = DEFAULT_GEMINI_API_URL)]
    pub api_url: String,

    /// Model used for meal plans and the assistant.
    #[arg(long, default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,

    /// Model used for label and meal photos.
    #[arg(long, default_value = DEFAULT_VISION_MODEL)]
    pub vision_model: String,

    /// Region whose supermarkets and ingredients the advice targets.
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Where the profile is kept. Defaults to the platform data directory.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Per-request timeout in seconds, 0 disables it.
    #[arg(long, default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("nutrihelp")
        })
    }
}

impl From<Args> for NutrihelpConfig {
    fn from(args: Args) -> Self {
        let data_dir = args.resolved_data_dir();
        let request_timeout =
            (args.request_timeout_secs > 0).then(|| Duration::from_secs(args.request_timeout_secs));

        NutrihelpConfig {
            llm: LLMConfig {
                api_url: args.api_url,
                gemini_api_key: args.api_key,
                text_model: args.text_model,
                vision_model: args.vision_model,
                request_timeout,
            },
            storage: StorageConfig { data_dir },
            region: args.region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_the_config() {
        let args = Args::try_parse_from(["nutrihelp", "--api-key", "k"]).unwrap();
        let config = NutrihelpConfig::from(args);

        assert_eq!(config.llm.gemini_api_key, "k");
        assert_eq!(config.llm.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.llm.vision_model, DEFAULT_VISION_MODEL);
        assert_eq!(config.llm.request_timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.region, "Australia");
        assert!(config.storage.data_dir.ends_with("nutrihelp"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "nutrihelp",
            "--api-key",
            "k",
            "--region",
            "New Zealand",
            "--data-dir",
            "/tmp/nh",
            "--request-timeout-secs",
            "0",
        ])
        .unwrap();
        let config = NutrihelpConfig::from(args);

        assert_eq!(config.region, "New Zealand");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/nh"));
        assert_eq!(config.llm.request_timeout, None);
    }
}
