use std::collections::HashSet;
use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::recommendation::{
    GetRecommendationsDTO, RecommendationSection, RecommendationsDTO,
};
use crate::application::interface::gateway::recommendation::RecommendationReader;

#[derive(Clone)]
pub struct GetRecommendationsInteractor {
    reader: Arc<dyn RecommendationReader>,
}

fn overlap(wanted: &[String], owned: &HashSet<String>) -> usize {
    wanted
        .iter()
        .filter(|skill| owned.contains(&skill.to_lowercase()))
        .count()
}

impl GetRecommendationsInteractor {
    pub fn new(reader: Arc<dyn RecommendationReader>) -> Self {
        Self { reader }
    }

    /// Projects and companies matching more of the student's skills come
    /// first; ties keep catalog order.
    pub async fn execute(&self, dto: GetRecommendationsDTO) -> AppResult<RecommendationsDTO> {
        let owned: HashSet<String> = dto.skills.iter().map(|s| s.to_lowercase()).collect();
        let section = dto.section;
        let wants = |s: RecommendationSection| {
            section == RecommendationSection::All || section == s
        };
        let mut result = RecommendationsDTO::default();

        if wants(RecommendationSection::Projects) {
            let mut projects = self.reader.projects().await?;
            projects.sort_by_key(|p| std::cmp::Reverse(overlap(&p.skills, &owned)));
            result.projects = projects;
        }
        if wants(RecommendationSection::Companies) {
            let mut companies = self.reader.companies().await?;
            companies.sort_by_key(|c| std::cmp::Reverse(overlap(&c.skills, &owned)));
            result.companies = companies;
        }
        if wants(RecommendationSection::Problems) {
            result.problems = self.reader.problems().await?;
        }
        Ok(result)
    }
}
