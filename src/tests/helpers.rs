#![cfg(test)]

use uuid::Uuid;

use crate::application::interactors::session::{PROFILE_KEY, TOKEN_KEY, USER_KEY};
use crate::domain::entities::session::SESSION_TOKEN;
use crate::infra::state::AppState;

pub fn unique_credentials() -> (String, String) {
    let id = Uuid::now_v7().as_simple().to_string();
    let username = format!("t_{}", &id[..16]);
    let email = format!("{}@test.example", &id[..16]);

    (username, email)
}

/// Writes a stored session the way a previous run would have left it.
pub fn seed_session(state: &AppState, raw_user: &str, raw_profile: Option<&str>) {
    state.store.set(TOKEN_KEY, SESSION_TOKEN).expect("seed token");
    state.store.set(USER_KEY, raw_user).expect("seed user");
    if let Some(raw_profile) = raw_profile {
        state.store.set(PROFILE_KEY, raw_profile).expect("seed profile");
    }
}

pub fn stored_keys(state: &AppState) -> Vec<&'static str> {
    [TOKEN_KEY, USER_KEY, PROFILE_KEY]
        .into_iter()
        .filter(|key| matches!(state.store.get(key), Ok(Some(_))))
        .collect()
}
