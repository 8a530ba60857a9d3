use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Already authenticated")]
    AlreadyAuthenticated,

    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid semester: {0}")]
    InvalidSemester(String),

    #[error("Invalid skill category: {0}")]
    InvalidSkillCategory(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Skill not found")]
    SkillNotFound,

    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("A reply is still pending")]
    ReplyPending,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
