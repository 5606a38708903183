use thiserror::Error;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("not ready: {0}")]
    NotReady(String),
    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("hand landmark source unavailable: {0}")]
    LandmarkSourceUnavailable(#[source] CollaboratorError),
    #[error("person mask source unavailable: {0}")]
    MaskSourceUnavailable(#[source] CollaboratorError),
    #[error("session is not running")]
    NotRunning,
}

pub type Result<T> = std::result::Result<T, SessionError>;
