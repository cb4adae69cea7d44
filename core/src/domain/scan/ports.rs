use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, llm::value_objects::InlineImage,
    profile::entities::UserProfile, scan::entities::ScanResult,
};

/// Service trait for product image analysis
pub trait ScanService: Send + Sync {
    /// Judges the pictured product against the profile's conditions and allergies.
    ///
    /// Same failure contract as meal plan generation.
    fn analyze_image(
        &self,
        image: InlineImage,
        profile: &UserProfile,
    ) -> impl Future<Output = Result<ScanResult, CoreError>> + Send;
}
