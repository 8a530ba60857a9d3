use validator::Validate;

use crate::application::dto::not_blank;

#[derive(Debug, Clone)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Validate)]
pub struct RegisterDTO {
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "College ID is required"))]
    pub college_id: String,
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
}
