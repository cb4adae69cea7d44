use tracing::info;

use crate::{
    domain::common::{NutrihelpConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::GeminiLLMClient, profile::FileProfileRepository},
};

pub type NutrihelpService = Service<FileProfileRepository, GeminiLLMClient>;

pub fn create_service(config: NutrihelpConfig) -> Result<NutrihelpService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::InvalidConfig(
            "a Gemini API key is required".to_string(),
        ));
    }
    if config.region.trim().is_empty() {
        return Err(CoreError::InvalidConfig("region must not be empty".to_string()));
    }

    let profile_repository = FileProfileRepository::new(&config.storage.data_dir);
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    info!(
        data_dir = %config.storage.data_dir.display(),
        text_model = %config.llm.text_model,
        vision_model = %config.llm.vision_model,
        "NutriHelp service ready"
    );

    Ok(Service::new(profile_repository, llm_client, config.region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{LLMConfig, StorageConfig},
        profile::ports::ProfileService,
    };

    fn config(key: &str, data_dir: &std::path::Path) -> NutrihelpConfig {
        NutrihelpConfig {
            llm: LLMConfig::new(key.to_string()),
            storage: StorageConfig {
                data_dir: data_dir.to_path_buf(),
            },
            region: "Australia".to_string(),
        }
    }

    #[test]
    fn missing_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = create_service(config("  ", dir.path())).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn fresh_data_dir_has_no_profile() {
        let dir = tempfile::tempdir().unwrap();
        let service = create_service(config("key", dir.path())).unwrap();
        assert_eq!(service.region(), "Australia");
        assert!(service.load_profile().await.is_none());
    }
}
