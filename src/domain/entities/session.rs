use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

/// Value stored under the token key. Only its presence matters.
pub const SESSION_TOKEN: &str = "mock-session-token";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        user: User,
        profile: Option<Profile>,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::LoggedIn { user, .. } => Some(user),
            Session::LoggedOut => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Session::LoggedIn { profile, .. } => profile.as_ref(),
            Session::LoggedOut => None,
        }
    }
}
