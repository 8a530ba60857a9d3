use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};
use validator::Validate;

use crate::application::{
    app_error::{AppError, AppResult},
    dto::{
        auth::{LoginDTO, RegisterDTO},
        profile::UpdateProfileDTO,
        user::UserDTO,
    },
    interface::{
        crypto::CredentialVerifier,
        notify::{Notification, Notifier},
        storage::KeyValueStore,
    },
};
use crate::domain::entities::{
    profile::Profile,
    semester::Semester,
    session::{SESSION_TOKEN, Session},
    user::User,
};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const PROFILE_KEY: &str = "profile";

/// Owns "who is logged in" and "what is their profile". Every mutation goes
/// through `login`, `register`, `logout` or `update_profile`.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    notifier: Arc<dyn Notifier>,
    session: Session,
}

impl SessionManager {
    /// Builds the manager and restores any session left in `store`.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        verifier: Arc<dyn CredentialVerifier>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let session = Self::restore(store.as_ref());
        Self {
            store,
            verifier,
            notifier,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.session.profile()
    }

    fn restore(store: &dyn KeyValueStore) -> Session {
        let stored = store
            .get(TOKEN_KEY)
            .and_then(|token| Ok((token, store.get(USER_KEY)?)));
        let raw_user = match stored {
            Ok((Some(_), Some(raw_user))) => raw_user,
            Ok(_) => return Session::LoggedOut,
            Err(e) => {
                error!("Failed to read stored session: {}", e);
                return Session::LoggedOut;
            }
        };
        let user: User = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                warn!("Stored identity is malformed, starting logged out: {}", e);
                Self::purge(store);
                return Session::LoggedOut;
            }
        };
        let profile = Self::load_profile(store);
        info!("Restored session for user {}", user.username);
        Session::LoggedIn { user, profile }
    }

    fn load_profile(store: &dyn KeyValueStore) -> Option<Profile> {
        match store.get(PROFILE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Stored profile is malformed, ignoring it: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Failed to read stored profile: {}", e);
                None
            }
        }
    }

    fn purge(store: &dyn KeyValueStore) {
        for key in [TOKEN_KEY, USER_KEY, PROFILE_KEY] {
            if let Err(e) = store.remove(key) {
                error!("Failed to remove `{}` from storage: {}", key, e);
            }
        }
    }

    fn persist_identity(&self, user: &User) -> AppResult<()> {
        let raw_user = serde_json::to_string(user)?;
        let written = self
            .store
            .set(TOKEN_KEY, SESSION_TOKEN)
            .and_then(|_| self.store.set(USER_KEY, &raw_user));
        if let Err(e) = written {
            error!("Failed to persist identity for {}: {}", user.username, e);
            Self::purge(self.store.as_ref());
            return Err(e);
        }
        Ok(())
    }

    pub async fn login(&mut self, dto: LoginDTO) -> AppResult<UserDTO> {
        if self.session.is_authenticated() {
            return Err(AppError::AlreadyAuthenticated);
        }
        let user = match self.verifier.verify(&dto.username, &dto.password).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("Login attempt with invalid credentials for: {}", dto.username);
                self.notifier.notify(Notification::destructive(
                    "Login Failed",
                    "Invalid credentials. Check your username and password.",
                ));
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => {
                error!("Credential verification failed: {}", e);
                self.notifier.notify(Notification::destructive(
                    "Login Error",
                    "An error occurred during login.",
                ));
                return Err(e);
            }
        };
        if let Err(e) = self.persist_identity(&user) {
            self.notifier.notify(Notification::destructive(
                "Login Error",
                "An error occurred during login.",
            ));
            return Err(e);
        }
        let profile = Self::load_profile(self.store.as_ref());
        let result = UserDTO::from(&user);
        info!("User {} logged in successfully", user.username);
        self.session = Session::LoggedIn { user, profile };
        self.notifier.notify(Notification::info(
            "Login Successful",
            "Welcome back to your dashboard!",
        ));
        Ok(result)
    }

    pub fn register(&mut self, dto: RegisterDTO) -> AppResult<UserDTO> {
        if self.session.is_authenticated() {
            return Err(AppError::AlreadyAuthenticated);
        }
        if let Err(e) = dto.validate() {
            self.notifier.notify(Notification::destructive(
                "Registration Error",
                "Please fill in all fields",
            ));
            return Err(e.into());
        }
        let user = User::new(dto.username, dto.email, dto.college_id);
        if let Err(e) = self.persist_identity(&user) {
            self.notifier.notify(Notification::destructive(
                "Registration Error",
                "An error occurred during registration.",
            ));
            return Err(e);
        }
        let result = UserDTO::from(&user);
        info!("User {} registered with id {}", user.username, user.id);
        self.session = Session::LoggedIn {
            user,
            profile: None,
        };
        self.notifier.notify(Notification::info(
            "Registration Successful",
            "Your account has been created successfully!",
        ));
        Ok(result)
    }

    pub fn logout(&mut self) {
        let Session::LoggedIn { user, .. } = &self.session else {
            return;
        };
        info!("User {} logged out", user.username);
        Self::purge(self.store.as_ref());
        self.session = Session::LoggedOut;
        self.notifier.notify(Notification::info(
            "Logged Out",
            "You have been successfully logged out.",
        ));
    }

    pub fn update_profile(&mut self, dto: UpdateProfileDTO) -> AppResult<Profile> {
        let Session::LoggedIn { user, .. } = &self.session else {
            return Err(AppError::NotAuthenticated);
        };
        if let Err(e) = dto.validate() {
            self.notifier.notify(Notification::destructive(
                "Error",
                "Please fill in all fields",
            ));
            return Err(e.into());
        }
        let date_of_birth = NaiveDate::parse_from_str(dto.date_of_birth.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(dto.date_of_birth.clone()))?;
        let semester: Semester = dto.semester.parse()?;
        let profile = Profile {
            name: dto.name.trim().to_string(),
            date_of_birth,
            semester,
            college: dto.college.trim().to_string(),
            branch: dto.branch.trim().to_string(),
            skills: dto.skills,
            subjects: dto.subjects,
        };
        let raw_profile = serde_json::to_string(&profile)?;
        if let Err(e) = self.store.set(PROFILE_KEY, &raw_profile) {
            error!("Failed to persist profile for {}: {}", user.username, e);
            self.notifier.notify(Notification::destructive(
                "Error",
                "Your profile could not be saved.",
            ));
            return Err(e);
        }
        info!("Profile updated for user {}", user.username);
        let user = user.clone();
        self.session = Session::LoggedIn {
            user,
            profile: Some(profile.clone()),
        };
        self.notifier.notify(Notification::info(
            "Profile Updated",
            "Your profile has been successfully updated!",
        ));
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::adapter::crypto::demo::DemoCredentialVerifier;
    use crate::adapter::notify::toast::ToastQueue;
    use crate::adapter::storage::memory::MemoryStore;
    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::auth::{LoginDTO, RegisterDTO};
    use crate::application::dto::profile::UpdateProfileDTO;
    use crate::application::interactors::session::{
        PROFILE_KEY, SessionManager, TOKEN_KEY, USER_KEY,
    };
    use crate::application::interface::crypto::CredentialVerifier;
    use crate::application::interface::notify::Severity;
    use crate::application::interface::storage::KeyValueStore;
    use crate::domain::entities::session::Session;
    use crate::domain::entities::skill::{Skill, SkillCategory};
    use crate::domain::entities::user::User;
    use crate::infra::config::AuthConfig;

    // Mocks
    mock! {
        pub VerifierMock {}

        #[async_trait]
        impl CredentialVerifier for VerifierMock {
            async fn verify(&self, username: &str, password: &str) -> AppResult<Option<User>>;
        }
    }

    mock! {
        pub StoreMock {}

        impl KeyValueStore for StoreMock {
            fn get(&self, key: &str) -> AppResult<Option<String>>;
            fn set(&self, key: &str, value: &str) -> AppResult<()>;
            fn remove(&self, key: &str) -> AppResult<()>;
        }
    }

    // Fixtures
    #[fixture]
    fn store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    #[fixture]
    fn toasts() -> ToastQueue {
        ToastQueue::new()
    }

    fn manager(store: &Arc<MemoryStore>, toasts: &ToastQueue) -> SessionManager {
        SessionManager::new(
            store.clone(),
            Arc::new(DemoCredentialVerifier::from_config(&AuthConfig::default())),
            Arc::new(toasts.clone()),
        )
    }

    fn demo_login() -> LoginDTO {
        LoginDTO {
            username: "demo".to_string(),
            password: "password".to_string(),
        }
    }

    fn registration() -> RegisterDTO {
        RegisterDTO {
            username: "alice".to_string(),
            email: "alice@university.edu".to_string(),
            college_id: "STU987654".to_string(),
            password: "hunter22".to_string(),
        }
    }

    fn profile_dto() -> UpdateProfileDTO {
        UpdateProfileDTO {
            name: "John Doe".to_string(),
            date_of_birth: "2001-05-15".to_string(),
            semester: "5".to_string(),
            college: "MIT".to_string(),
            branch: "Computer Science".to_string(),
            skills: vec![Skill::new("Go".to_string(), SkillCategory::Programming)],
            subjects: vec![],
        }
    }

    // Login
    #[rstest]
    #[tokio::test]
    async fn test_login_with_demo_credentials(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);

        let user = manager.login(demo_login()).await.unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.username, "demo");
        assert_eq!(user.email, "demo@university.edu");
        assert_eq!(user.college_id, "STU123456");
        assert!(manager.is_authenticated());
        assert!(store.get(TOKEN_KEY).unwrap().is_some());
        assert!(store.get(USER_KEY).unwrap().is_some());
        assert_eq!(toasts.drain()[0].title, "Login Successful");
    }

    #[rstest]
    #[case("demo", "wrong")]
    #[case("someone", "password")]
    #[case("", "")]
    #[tokio::test]
    async fn test_login_with_bad_credentials_changes_nothing(
        store: Arc<MemoryStore>,
        toasts: ToastQueue,
        #[case] username: &str,
        #[case] password: &str,
    ) {
        let mut manager = manager(&store, &toasts);
        let dto = LoginDTO {
            username: username.to_string(),
            password: password.to_string(),
        };

        let result = manager.login(dto).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
        assert_eq!(manager.session(), &Session::LoggedOut);
        assert!(store.get(TOKEN_KEY).unwrap().is_none());
        let notes = toasts.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Destructive);
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_uses_pluggable_verifier(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut verifier = MockVerifierMock::new();
        verifier.expect_verify().returning(|username, _| {
            Ok(Some(User {
                id: "u-42".try_into().unwrap(),
                username: username.to_string(),
                email: "x@y.z".to_string(),
                college_id: "C-1".to_string(),
            }))
        });
        let mut manager =
            SessionManager::new(store.clone(), Arc::new(verifier), Arc::new(toasts.clone()));

        let user = manager
            .login(LoginDTO {
                username: "bob".to_string(),
                password: "anything".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, "u-42");
        assert_eq!(manager.current_user().unwrap().username, "bob");
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_verifier_error_is_reported(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut verifier = MockVerifierMock::new();
        verifier
            .expect_verify()
            .returning(|_, _| Err(AppError::StorageError("down".to_string())));
        let mut manager =
            SessionManager::new(store.clone(), Arc::new(verifier), Arc::new(toasts.clone()));

        let result = manager.login(demo_login()).await;

        assert!(matches!(result, Err(AppError::StorageError(_))));
        assert!(!manager.is_authenticated());
        assert_eq!(toasts.drain()[0].title, "Login Error");
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_rejected_while_logged_in(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);
        manager.register(registration()).unwrap();

        let result = manager.login(demo_login()).await;

        assert!(matches!(result, Err(AppError::AlreadyAuthenticated)));
        assert_eq!(manager.current_user().unwrap().username, "alice");
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_storage_failure_leaves_logged_out(toasts: ToastQueue) {
        let mut store = MockStoreMock::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .returning(|_, _| Err(AppError::StorageError("disk full".to_string())));
        store.expect_remove().returning(|_| Ok(()));
        let mut manager = SessionManager::new(
            Arc::new(store),
            Arc::new(DemoCredentialVerifier::from_config(&AuthConfig::default())),
            Arc::new(toasts.clone()),
        );

        let result = manager.login(demo_login()).await;

        assert!(matches!(result, Err(AppError::StorageError(_))));
        assert!(!manager.is_authenticated());
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_restores_stored_profile(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let stored = r#"{"name":"Demo Student","dateOfBirth":"2002-01-01","semester":3,"college":"MIT","branch":"Electronics"}"#;
        store.set(PROFILE_KEY, stored).unwrap();
        let mut manager = manager(&store, &toasts);

        manager.login(demo_login()).await.unwrap();

        let profile = manager.profile().expect("profile restored");
        assert_eq!(profile.name, "Demo Student");
        assert_eq!(profile.semester.value(), 3);
    }

    // Register
    #[rstest]
    fn test_register_echoes_submitted_fields(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);

        let user = manager.register(registration()).unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@university.edu");
        assert_eq!(user.college_id, "STU987654");
        assert!(!user.id.is_empty());
        assert!(manager.is_authenticated());
        assert!(manager.profile().is_none());
        assert_eq!(toasts.drain()[0].title, "Registration Successful");
    }

    #[rstest]
    fn test_register_allows_duplicate_usernames(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);
        let first = manager.register(registration()).unwrap();
        manager.logout();

        let second = manager.register(registration()).unwrap();

        assert_eq!(first.username, second.username);
        assert_ne!(first.id, second.id);
    }

    #[rstest]
    fn test_register_rejects_blank_fields(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);
        let mut dto = registration();
        dto.college_id = "   ".to_string();

        let result = manager.register(dto);

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(!manager.is_authenticated());
        assert!(store.get(USER_KEY).unwrap().is_none());
    }

    // Logout
    #[rstest]
    #[tokio::test]
    async fn test_logout_then_restart_is_logged_out(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);
        manager.login(demo_login()).await.unwrap();
        manager.update_profile(profile_dto()).unwrap();

        manager.logout();

        assert_eq!(manager.session(), &Session::LoggedOut);
        let restarted = self::manager(&store, &toasts);
        assert_eq!(restarted.session(), &Session::LoggedOut);
        for key in [TOKEN_KEY, USER_KEY, PROFILE_KEY] {
            assert!(store.get(key).unwrap().is_none());
        }
    }

    #[rstest]
    fn test_logout_when_logged_out_is_noop(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);

        manager.logout();
        manager.logout();

        assert_eq!(manager.session(), &Session::LoggedOut);
        assert!(toasts.drain().is_empty());
    }

    // Profile
    #[rstest]
    #[tokio::test]
    async fn test_update_profile_survives_restart(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);
        manager.login(demo_login()).await.unwrap();

        let saved = manager.update_profile(profile_dto()).unwrap();

        let restarted = self::manager(&store, &toasts);
        assert_eq!(restarted.profile(), Some(&saved));
        assert_eq!(restarted.current_user().unwrap().username, "demo");
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_profile_replaces_wholesale(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);
        manager.login(demo_login()).await.unwrap();
        manager.update_profile(profile_dto()).unwrap();

        let mut dto = profile_dto();
        dto.skills.clear();
        dto.branch = "Electronics".to_string();
        let saved = manager.update_profile(dto).unwrap();

        assert!(saved.skills.is_empty());
        assert_eq!(manager.profile().unwrap().branch, "Electronics");
    }

    #[rstest]
    fn test_update_profile_when_logged_out(store: Arc<MemoryStore>, toasts: ToastQueue) {
        let mut manager = manager(&store, &toasts);

        let result = manager.update_profile(profile_dto());

        assert!(matches!(result, Err(AppError::NotAuthenticated)));
        assert!(store.get(PROFILE_KEY).unwrap().is_none());
        assert!(toasts.drain().is_empty());
    }

    #[rstest]
    #[case("name", AppError::ValidationError(validator::ValidationErrors::new()))]
    #[case("date", AppError::InvalidDate(String::new()))]
    #[case("semester", AppError::InvalidSemester(String::new()))]
    #[tokio::test]
    async fn test_update_profile_rejects_bad_input(
        store: Arc<MemoryStore>,
        toasts: ToastQueue,
        #[case] field: &str,
        #[case] expected: AppError,
    ) {
        let mut manager = manager(&store, &toasts);
        manager.login(demo_login()).await.unwrap();
        let mut dto = profile_dto();
        match field {
            "name" => dto.name = " ".to_string(),
            "date" => dto.date_of_birth = "15/05/2001".to_string(),
            _ => dto.semester = "11".to_string(),
        }

        let err = manager.update_profile(dto).unwrap_err();

        assert_eq!(
            std::mem::discriminant(&err),
            std::mem::discriminant(&expected)
        );
        assert!(manager.profile().is_none());
        assert!(store.get(PROFILE_KEY).unwrap().is_none());
    }

    // Restore
    #[rstest]
    fn test_restore_malformed_identity_is_logged_out(store: Arc<MemoryStore>, toasts: ToastQueue) {
        store.set(TOKEN_KEY, "t").unwrap();
        store.set(USER_KEY, "{not json").unwrap();

        let manager = manager(&store, &toasts);

        assert_eq!(manager.session(), &Session::LoggedOut);
        assert!(store.get(USER_KEY).unwrap().is_none());
    }

    #[rstest]
    fn test_restore_blank_identity_id_is_logged_out(store: Arc<MemoryStore>, toasts: ToastQueue) {
        store.set(TOKEN_KEY, "t").unwrap();
        store
            .set(USER_KEY, r#"{"id":"","username":"x","email":"x@u.edu","collegeId":"S1"}"#)
            .unwrap();
        store.set(PROFILE_KEY, "{}").unwrap();

        let manager = manager(&store, &toasts);

        assert_eq!(manager.session(), &Session::LoggedOut);
        assert!(store.get(TOKEN_KEY).unwrap().is_none());
        assert!(store.get(USER_KEY).unwrap().is_none());
        assert!(store.get(PROFILE_KEY).unwrap().is_none());
    }

    #[rstest]
    fn test_restore_requires_token(store: Arc<MemoryStore>, toasts: ToastQueue) {
        store
            .set(USER_KEY, r#"{"id":"1","username":"demo","email":"d@u.edu","collegeId":"S1"}"#)
            .unwrap();

        let manager = manager(&store, &toasts);

        assert!(!manager.is_authenticated());
    }

    #[rstest]
    fn test_restore_with_malformed_profile_keeps_identity(store: Arc<MemoryStore>, toasts: ToastQueue) {
        store.set(TOKEN_KEY, "t").unwrap();
        store
            .set(USER_KEY, r#"{"id":"1","username":"demo","email":"d@u.edu","collegeId":"S1"}"#)
            .unwrap();
        store.set(PROFILE_KEY, "[]").unwrap();

        let manager = manager(&store, &toasts);

        assert_eq!(manager.current_user().unwrap().college_id, "S1");
        assert!(manager.profile().is_none());
    }
}
