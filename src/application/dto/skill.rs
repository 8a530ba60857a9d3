use validator::Validate;

use crate::application::dto::not_blank;
use crate::domain::entities::skill::{Skill, SkillCategory};

#[derive(Debug, Clone, Validate)]
pub struct CreateSkillDTO {
    #[validate(custom(function = "not_blank", message = "Skill name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Category is required"))]
    pub category: String,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateSkillDTO {
    pub id: String,
    #[validate(custom(function = "not_blank", message = "Skill name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Category is required"))]
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct SkillGroupDTO {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}
