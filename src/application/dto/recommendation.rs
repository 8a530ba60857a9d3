use std::str::FromStr;

use crate::domain::entities::recommendation::{CompanyOpening, PracticeProblem, ProjectIdea};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationSection {
    #[default]
    All,
    Projects,
    Companies,
    Problems,
}

impl FromStr for RecommendationSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(RecommendationSection::All),
            "projects" => Ok(RecommendationSection::Projects),
            "companies" => Ok(RecommendationSection::Companies),
            "problems" | "leetcode" => Ok(RecommendationSection::Problems),
            other => Err(format!("unknown section `{other}`")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetRecommendationsDTO {
    pub skills: Vec<String>,
    pub section: RecommendationSection,
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationsDTO {
    pub projects: Vec<ProjectIdea>,
    pub companies: Vec<CompanyOpening>,
    pub problems: Vec<PracticeProblem>,
}
