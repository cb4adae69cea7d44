use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::fs;
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, ports::ProfileRepository},
};

pub const PROFILE_KEY: &str = "nutrihelp_profile";

/// Keeps the profile as one JSON document under the data directory.
#[derive(Debug, Clone)]
pub struct FileProfileRepository {
    path: PathBuf,
}

impl FileProfileRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", PROFILE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileRepository for FileProfileRepository {
    async fn load(&self) -> Option<UserProfile> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read stored profile: {}", e);
                return None;
            }
        };

        serde_json::from_str(&raw)
            .inspect_err(|e| warn!("Stored profile is unreadable, ignoring it: {}", e))
            .ok()
    }

    async fn save(&self, profile: UserProfile) -> Result<(), CoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                error!("Failed to create data directory: {}", e);
                CoreError::StorageError(format!("cannot create {}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(&profile).map_err(|e| {
            error!("Failed to serialize profile: {}", e);
            CoreError::StorageError(e.to_string())
        })?;

        // staged then renamed; readers never see a partial document
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json).await.map_err(|e| {
            error!("Failed to write profile: {}", e);
            CoreError::StorageError(format!("cannot write {}: {}", staging.display(), e))
        })?;
        fs::rename(&staging, &self.path).await.map_err(|e| {
            error!("Failed to store profile: {}", e);
            CoreError::StorageError(format!("cannot write {}: {}", self.path.display(), e))
        })
    }

    async fn clear(&self) -> Result<(), CoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Failed to remove profile: {}", e);
                Err(CoreError::StorageError(format!(
                    "cannot remove {}: {}",
                    self.path.display(),
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::Gender;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Mary".to_string(),
            age: 68,
            gender: Gender::Female,
            health_conditions: vec!["Diabetes".to_string()],
            allergies: vec!["Peanuts".to_string()],
            dietary_preferences: vec![],
        }
    }

    #[tokio::test]
    async fn missing_file_means_no_profile() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileProfileRepository::new(dir.path());
        assert_eq!(repository.load().await, None);
    }

    #[tokio::test]
    async fn saved_profile_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileProfileRepository::new(dir.path().join("nested"));

        repository.save(profile()).await.unwrap();
        assert_eq!(repository.load().await, Some(profile()));
        assert!(repository.path().ends_with("nutrihelp_profile.json"));
    }

    #[tokio::test]
    async fn save_overwrites_the_previous_profile() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileProfileRepository::new(dir.path());

        repository.save(profile()).await.unwrap();
        let mut updated = profile();
        updated.name = "Joan".to_string();
        repository.save(updated.clone()).await.unwrap();

        assert_eq!(repository.load().await, Some(updated));
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileProfileRepository::new(dir.path());
        std::fs::write(repository.path(), "{ not json").unwrap();

        assert_eq!(repository.load().await, None);
    }

    #[tokio::test]
    async fn clear_removes_the_profile_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileProfileRepository::new(dir.path());

        repository.save(profile()).await.unwrap();
        repository.clear().await.unwrap();
        assert_eq!(repository.load().await, None);
        repository.clear().await.unwrap();
    }
}
