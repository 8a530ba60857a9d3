use validator::Validate;

use crate::application::dto::not_blank;

#[derive(Debug, Clone, Validate)]
pub struct CreateSubjectDTO {
    #[validate(custom(function = "not_blank", message = "Subject name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Semester is required"))]
    pub semester: String,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateSubjectDTO {
    pub id: String,
    #[validate(custom(function = "not_blank", message = "Subject name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Semester is required"))]
    pub semester: String,
}
