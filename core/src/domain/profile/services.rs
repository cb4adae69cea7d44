use tracing::{info, instrument};
use validator::{Validate, ValidationErrors};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::ports::LLMClient,
    profile::{
        entities::UserProfile,
        ports::{ProfileRepository, ProfileService},
        value_objects::{CreateProfileInput, parse_tag_list},
    },
};

impl<PR, LLM> ProfileService for Service<PR, LLM>
where
    PR: ProfileRepository,
    LLM: LLMClient,
{
    async fn load_profile(&self) -> Option<UserProfile> {
        self.profile_repository.load().await
    }

    #[instrument(skip_all)]
    async fn create_profile(&self, input: CreateProfileInput) -> Result<UserProfile, CoreError> {
        input.validate().map_err(validation_error)?;

        let profile = UserProfile {
            name: input.name.trim().to_string(),
            age: input.age,
            gender: input.gender,
            health_conditions: parse_tag_list(&input.health_conditions),
            allergies: parse_tag_list(&input.allergies),
            dietary_preferences: parse_tag_list(&input.dietary_preferences),
        };

        self.profile_repository.save(profile.clone()).await?;
        info!("Profile created");

        Ok(profile)
    }

    async fn reset_profile(&self) -> Result<(), CoreError> {
        self.profile_repository.clear().await?;
        info!("Profile cleared");
        Ok(())
    }
}

fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();

    CoreError::Validation(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::ready,
        llm::ports::MockLLMClient,
        profile::{entities::Gender, ports::MockProfileRepository},
    };

    fn input(name: &str, age: u32) -> CreateProfileInput {
        CreateProfileInput {
            name: name.to_string(),
            age,
            gender: Gender::Female,
            health_conditions: "Diabetes, ".to_string(),
            allergies: " Peanuts ,Shellfish".to_string(),
            dietary_preferences: String::new(),
        }
    }

    fn service(repository: MockProfileRepository) -> Service<MockProfileRepository, MockLLMClient> {
        Service::new(repository, MockLLMClient::new(), "Australia".to_string())
    }

    #[tokio::test]
    async fn create_profile_splits_lists_and_saves() {
        let mut repository = MockProfileRepository::new();
        repository
            .expect_save()
            .withf(|profile| profile.name == "Mary" && profile.allergies.len() == 2)
            .times(1)
            .returning(|_| ready(Ok(())));

        let profile = service(repository)
            .create_profile(input("  Mary ", 68))
            .await
            .unwrap();

        assert_eq!(profile.name, "Mary");
        assert_eq!(profile.health_conditions, vec!["Diabetes".to_string()]);
        assert_eq!(
            profile.allergies,
            vec!["Peanuts".to_string(), "Shellfish".to_string()]
        );
        assert!(profile.dietary_preferences.is_empty());
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_storage() {
        let mut repository = MockProfileRepository::new();
        repository.expect_save().never();
        let service = service(repository);

        let err = service.create_profile(input("", 68)).await.unwrap_err();
        assert_eq!(err, CoreError::Validation("name must not be empty".to_string()));

        let err = service.create_profile(input("Mary", 49)).await.unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation("age must be between 50 and 120".to_string())
        );
    }

    #[tokio::test]
    async fn storage_failure_is_propagated() {
        let mut repository = MockProfileRepository::new();
        repository
            .expect_save()
            .returning(|_| ready(Err(CoreError::StorageError("disk full".to_string()))));

        let err = service(repository)
            .create_profile(input("Mary", 70))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::StorageError("disk full".to_string()));
    }

    #[tokio::test]
    async fn reset_clears_the_repository() {
        let mut repository = MockProfileRepository::new();
        repository
            .expect_clear()
            .times(1)
            .returning(|| ready(Ok(())));

        service(repository).reset_profile().await.unwrap();
    }
}
