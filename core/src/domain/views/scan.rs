use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::entities::ScanResult,
    views::request_state::{RequestFailure, RequestState},
};

pub const SCAN_FAILURE_MESSAGE: &str =
    "Could not analyze the image. Please try again with a clearer photo.";

/// State behind the Scan tab.
#[derive(Debug, Clone, Default)]
pub struct ScanView {
    state: RequestState<ScanResult>,
}

impl ScanView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts analysis of a newly chosen photo, clearing any prior result or error.
    pub fn begin_scan(&mut self) -> Result<(), CoreError> {
        // picking another photo is the retry affordance
        self.state.retry();
        self.state.begin()
    }

    pub fn finish(&mut self, outcome: Result<ScanResult, CoreError>) -> bool {
        self.state.complete(outcome, SCAN_FAILURE_MESSAGE)
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.state.value()
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        self.state.failure()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
