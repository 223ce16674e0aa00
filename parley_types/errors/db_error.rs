use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("User with username '{0}' not found")]
    UserByUsernameNotFound(String),

    #[error("User with ID {0} not found")]
    UserByIdNotFound(Uuid),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Interview config with ID {0} not found")]
    InterviewConfigNotFound(Uuid),

    #[error("Voice record with ID {0} not found")]
    VoiceRecordNotFound(Uuid),

    #[error("Transcript with ID {0} not found")]
    TranscriptNotFound(Uuid),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),
}
