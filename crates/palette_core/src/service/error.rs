//! Service-level error type.

use crate::model::validation::ValidationError;
use crate::repo::store::RepoError;
use crate::view::coordinator::ViewError;
use log::warn;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error returned by session commands. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Input rejected before mutation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Missing or duplicate id.
    #[error(transparent)]
    Repo(#[from] RepoError),
    /// View transition precondition failed.
    #[error(transparent)]
    View(#[from] ViewError),
}

impl ServiceError {
    /// Returns whether the command referenced a missing id and was a no-op.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(err) if err.is_not_found())
    }

    fn status(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid",
            Self::Repo(RepoError::NotFound { .. }) => "not_found",
            Self::Repo(RepoError::DuplicateId { .. }) => "duplicate",
            Self::View(_) => "rejected",
        }
    }
}

/// Logs a failed command outcome. Validation messages may echo user input,
/// so only the status is recorded.
pub(crate) fn log_failure(event: &str, err: &ServiceError) {
    match err {
        ServiceError::Validation(_) => {
            warn!("event={} module=service status={}", event, err.status());
        }
        ServiceError::Repo(_) | ServiceError::View(_) => {
            warn!(
                "event={} module=service status={} detail={:?}",
                event,
                err.status(),
                err.to_string()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;
    use crate::model::validation::ValidationError;
    use crate::repo::store::{EntityKind, RepoError};

    #[test]
    fn is_not_found_only_matches_missing_ids() {
        let missing: ServiceError = RepoError::not_found(EntityKind::Note, 4).into();
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "note not found: 4");

        let invalid: ServiceError = ValidationError::EmptyField { field: "title" }.into();
        assert!(!invalid.is_not_found());
    }
}
