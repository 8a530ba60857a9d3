use tracing::error;

use crate::application::app_error::AppError;
use crate::domain::entities::semester::{FIRST_SEMESTER, LAST_SEMESTER};
use crate::domain::entities::skill::SkillCategory;

impl AppError {
    /// Text shown to the student for a failed action.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => "Invalid username or password.".to_string(),
            AppError::NotAuthenticated => "Please log in first.".to_string(),
            AppError::AlreadyAuthenticated => "You are already logged in. Log out first.".to_string(),
            AppError::PasswordMismatch => "Passwords don't match!".to_string(),
            AppError::ValidationError(errors) => {
                let mut messages: Vec<String> = errors
                    .field_errors()
                    .values()
                    .flat_map(|errs| errs.iter())
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                messages.sort();
                messages.join("; ")
            }
            AppError::InvalidSemester(value) => format!(
                "Semester must be between {} and {} (got `{}`).",
                FIRST_SEMESTER, LAST_SEMESTER, value
            ),
            AppError::InvalidSkillCategory(value) => {
                let choices: Vec<&str> = SkillCategory::ALL.iter().map(|c| c.as_str()).collect();
                format!("Unknown category `{}`. Choose one of: {}.", value, choices.join(", "))
            }
            AppError::InvalidDate(value) => {
                format!("Date of birth must look like YYYY-MM-DD (got `{}`).", value)
            }
            AppError::SkillNotFound => "No skill with that id.".to_string(),
            AppError::SubjectNotFound => "No subject with that id.".to_string(),
            AppError::EmptyMessage => "Type a question first.".to_string(),
            AppError::ReplyPending => "The assistant is still thinking.".to_string(),
            AppError::InvalidId(_) | AppError::StorageError(_) | AppError::SerializationError(_) => {
                error!("Unexpected failure: {}", self);
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}
