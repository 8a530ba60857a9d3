use crate::domain::entities::user::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDTO {
    pub id: String,
    pub username: String,
    pub email: String,
    pub college_id: String,
}

impl From<&User> for UserDTO {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            college_id: user.college_id.clone(),
        }
    }
}
