use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{schema::ResponseSchema, value_objects::InlineImage},
};

/// LLM Client trait for calling the generative-AI service.
///
/// Every method returns the raw response text, which is empty when the
/// service produced no content. Interpreting that text is left to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Image plus prompt, reply constrained to `response_schema`.
    fn generate_with_image(
        &self,
        prompt: String,
        image: InlineImage,
        response_schema: ResponseSchema,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Prompt only, reply constrained to `response_schema`.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: ResponseSchema,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Free-text reply steered by a persona instruction.
    fn generate_free_text(
        &self,
        message: String,
        system_instruction: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
