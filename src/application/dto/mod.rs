pub mod auth;
pub mod chat;
pub mod profile;
pub mod recommendation;
pub mod skill;
pub mod subject;
pub mod user;

use validator::ValidationError;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
