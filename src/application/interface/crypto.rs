use crate::application::app_error::AppResult;
use crate::domain::entities::user::User;
use async_trait::async_trait;

/// Checks a username/password pair and yields the identity it belongs to.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> AppResult<Option<User>>;
}
