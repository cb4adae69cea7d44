use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::{ports::LLMClient, value_objects::InlineImage},
    profile::{entities::UserProfile, ports::ProfileRepository},
    scan::{
        entities::ScanResult, helpers::build_scan_prompt, ports::ScanService,
        schema::get_scan_result_schema,
    },
};

impl<PR, LLM> ScanService for Service<PR, LLM>
where
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(mime_type = %image.mime_type, bytes = image.data.len()))]
    async fn analyze_image(
        &self,
        image: InlineImage,
        profile: &UserProfile,
    ) -> Result<ScanResult, CoreError> {
        let prompt = build_scan_prompt(profile);
        let response_schema = get_scan_result_schema();

        let raw_response = self
            .llm_client
            .generate_with_image(prompt, image, response_schema.clone())
            .await
            .inspect_err(|e| error!("Error analyzing image: {}", e))?;

        response_schema
            .parse::<ScanResult>(&raw_response)
            .map(ScanResult::normalized)
    }
}
