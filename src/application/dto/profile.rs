use validator::Validate;

use crate::application::dto::not_blank;
use crate::domain::entities::skill::Skill;
use crate::domain::entities::subject::Subject;

#[derive(Debug, Clone, Validate)]
pub struct UpdateProfileDTO {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Date of birth is required"))]
    pub date_of_birth: String,
    #[validate(custom(function = "not_blank", message = "Semester is required"))]
    pub semester: String,
    #[validate(custom(function = "not_blank", message = "College is required"))]
    pub college: String,
    #[validate(custom(function = "not_blank", message = "Branch is required"))]
    pub branch: String,
    pub skills: Vec<Skill>,
    pub subjects: Vec<Subject>,
}
