use crate::{
    application::app_error::AppResult,
    domain::entities::recommendation::{CompanyOpening, PracticeProblem, ProjectIdea},
};
use async_trait::async_trait;

#[async_trait]
pub trait RecommendationReader: Send + Sync {
    async fn projects(&self) -> AppResult<Vec<ProjectIdea>>;
    async fn companies(&self) -> AppResult<Vec<CompanyOpening>>;
    async fn problems(&self) -> AppResult<Vec<PracticeProblem>>;
}
