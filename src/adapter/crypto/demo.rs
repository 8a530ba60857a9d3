use crate::application::{app_error::AppResult, interface::crypto::CredentialVerifier};
use crate::domain::entities::{id::Id, user::User};
use crate::infra::config::AuthConfig;
use async_trait::async_trait;

/// Accepts exactly one configured username/password pair and always maps it
/// to the same fixed identity.
#[derive(Debug, Clone)]
pub struct DemoCredentialVerifier {
    username: String,
    password: String,
    identity: User,
}

impl DemoCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>, identity: User) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            identity,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        let identity = User {
            id: Id::new(config.demo_identity.id.clone()),
            username: config.demo_identity.username.clone(),
            email: config.demo_identity.email.clone(),
            college_id: config.demo_identity.college_id.clone(),
        };
        Self::new(
            config.demo_username.clone(),
            config.demo_password.clone(),
            identity,
        )
    }
}

#[async_trait]
impl CredentialVerifier for DemoCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        if username == self.username && password == self.password {
            return Ok(Some(self.identity.clone()));
        }
        Ok(None)
    }
}
