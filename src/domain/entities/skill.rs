use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::application::app_error::AppError;
use crate::domain::entities::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Database,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Design,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Programming,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::ComputerScience,
        SkillCategory::Design,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::ComputerScience => "Computer Science",
            SkillCategory::Design => "Design",
            SkillCategory::Other => "Other",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "programming" => Ok(SkillCategory::Programming),
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "database" => Ok(SkillCategory::Database),
            "computer science" => Ok(SkillCategory::ComputerScience),
            "design" => Ok(SkillCategory::Design),
            "other" => Ok(SkillCategory::Other),
            _ => Err(AppError::InvalidSkillCategory(s.to_string())),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Id<Skill>,
    pub name: String,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: String, category: SkillCategory) -> Self {
        Self {
            id: Id::generate(),
            name,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::application::app_error::AppError;
    use crate::domain::entities::skill::SkillCategory;

    #[rstest]
    #[case("Programming", SkillCategory::Programming)]
    #[case("computer-science", SkillCategory::ComputerScience)]
    #[case("Computer Science", SkillCategory::ComputerScience)]
    #[case(" DATABASE ", SkillCategory::Database)]
    fn test_parse_category(#[case] input: &str, #[case] expected: SkillCategory) {
        assert_eq!(input.parse::<SkillCategory>().unwrap(), expected);
    }

    #[rstest]
    fn test_parse_unknown_category() {
        let result = "Cooking".parse::<SkillCategory>();
        assert!(matches!(result, Err(AppError::InvalidSkillCategory(c)) if c == "Cooking"));
    }

    #[rstest]
    fn test_category_display_matches_serialized_form() {
        for category in SkillCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
