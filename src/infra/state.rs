use std::sync::Arc;
use std::time::Duration;

use crate::adapter::catalog::starter::{starter_skills, starter_subjects};
use crate::adapter::notify::toast::ToastQueue;
use crate::application::interactors::chat::ChatInteractor;
use crate::application::interactors::recommendations::GetRecommendationsInteractor;
use crate::application::interactors::session::SessionManager;
use crate::application::interactors::skills::SkillManager;
use crate::application::interactors::subjects::SubjectManager;
use crate::application::interface::assistant::Responder;
use crate::application::interface::crypto::CredentialVerifier;
use crate::application::interface::gateway::recommendation::RecommendationReader;
use crate::application::interface::storage::KeyValueStore;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn KeyValueStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub toasts: ToastQueue,
    pub responder: Arc<dyn Responder>,
    pub catalog: Arc<dyn RecommendationReader>,
}

pub trait FromAppState: Sized {
    fn from_app_state(state: &AppState) -> Self;
}

// SessionManager
impl FromAppState for SessionManager {
    fn from_app_state(state: &AppState) -> Self {
        SessionManager::new(
            state.store.clone(),
            state.verifier.clone(),
            Arc::new(state.toasts.clone()),
        )
    }
}

// SkillManager
impl FromAppState for SkillManager {
    fn from_app_state(state: &AppState) -> Self {
        SkillManager::new(starter_skills(), Arc::new(state.toasts.clone()))
    }
}

// SubjectManager
impl FromAppState for SubjectManager {
    fn from_app_state(state: &AppState) -> Self {
        SubjectManager::new(starter_subjects(), Arc::new(state.toasts.clone()))
    }
}

// ChatInteractor
impl FromAppState for ChatInteractor {
    fn from_app_state(state: &AppState) -> Self {
        ChatInteractor::new(
            state.responder.clone(),
            state.config.chat.greeting.clone(),
            Duration::from_millis(state.config.chat.reply_delay_ms),
        )
    }
}

// GetRecommendationsInteractor
impl FromAppState for GetRecommendationsInteractor {
    fn from_app_state(state: &AppState) -> Self {
        GetRecommendationsInteractor::new(state.catalog.clone())
    }
}
