use crate::domain::common::entities::app_errors::CoreError;

/// What a plan or scan view shows after a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    /// Fixed text for the user.
    pub message: String,
    pub detail: CoreError,
}

/// Lifecycle of one user-triggered gateway request.
///
/// `Idle -> Loading -> Success | Failed`. At most one request is outstanding,
/// and leaving `Failed` takes an explicit [`RequestState::retry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failed(RequestFailure),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    /// Enters `Loading`. A previous success is discarded.
    pub fn begin(&mut self) -> Result<(), CoreError> {
        match self {
            RequestState::Loading => Err(CoreError::RequestInFlight),
            RequestState::Failed(_) => Err(CoreError::RetryRequired),
            RequestState::Idle | RequestState::Success(_) => {
                *self = RequestState::Loading;
                Ok(())
            }
        }
    }

    /// Applies the outcome of the outstanding request.
    ///
    /// Returns `false` and leaves the state alone when nothing was in flight.
    pub fn complete(&mut self, outcome: Result<T, CoreError>, failure_message: &str) -> bool {
        if !self.is_loading() {
            return false;
        }

        *self = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(detail) => RequestState::Failed(RequestFailure {
                message: failure_message.to_string(),
                detail,
            }),
        };
        true
    }

    /// `Failed -> Idle`. Any other state is kept.
    pub fn retry(&mut self) -> bool {
        if matches!(self, RequestState::Failed(_)) {
            *self = RequestState::Idle;
            true
        } else {
            false
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            RequestState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
