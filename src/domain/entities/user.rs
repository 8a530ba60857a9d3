use serde::{Deserialize, Serialize};

use crate::domain::entities::id::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id<User>,
    pub username: String,
    pub email: String,
    pub college_id: String,
}

impl User {
    pub fn new(username: String, email: String, college_id: String) -> Self {
        Self {
            id: Id::generate(),
            username,
            email,
            college_id,
        }
    }
}
