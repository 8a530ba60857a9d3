use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::application::interface::gateway::recommendation::RecommendationReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::recommendation::{
    CompanyOpening, PracticeProblem, ProblemDifficulty, ProjectDifficulty, ProjectIdea, WorkMode,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Hard-coded recommendation cards.
#[derive(Debug, Clone)]
pub struct StaticRecommendationCatalog {
    projects: Vec<ProjectIdea>,
    companies: Vec<CompanyOpening>,
    problems: Vec<PracticeProblem>,
}

impl StaticRecommendationCatalog {
    pub fn new(
        projects: Vec<ProjectIdea>,
        companies: Vec<CompanyOpening>,
        problems: Vec<PracticeProblem>,
    ) -> Self {
        Self {
            projects,
            companies,
            problems,
        }
    }
}

impl Default for StaticRecommendationCatalog {
    fn default() -> Self {
        let projects = vec![
            ProjectIdea {
                id: Id::new("1"),
                title: "E-Commerce React App".to_string(),
                description: "Build a full-featured e-commerce application with user authentication, \
                    product catalog, and payment integration."
                    .to_string(),
                skills: strings(&["React", "JavaScript", "Node.js"]),
                difficulty: ProjectDifficulty::Intermediate,
                duration: "3-4 weeks".to_string(),
            },
            ProjectIdea {
                id: Id::new("2"),
                title: "Task Management Dashboard".to_string(),
                description: "Create a responsive task management system with drag-and-drop \
                    functionality and real-time updates."
                    .to_string(),
                skills: strings(&["React", "JavaScript", "MongoDB"]),
                difficulty: ProjectDifficulty::Beginner,
                duration: "2-3 weeks".to_string(),
            },
            ProjectIdea {
                id: Id::new("3"),
                title: "Social Media Analytics Tool".to_string(),
                description: "Develop a tool to analyze social media metrics and generate insights \
                    using data visualization."
                    .to_string(),
                skills: strings(&["React", "Data Structures", "JavaScript"]),
                difficulty: ProjectDifficulty::Advanced,
                duration: "4-6 weeks".to_string(),
            },
        ];

        let company = |id: &str, name: &str, logo: &str, role: &str, skills: &[&str], location: &str, work_mode| {
            CompanyOpening {
                id: Id::new(id),
                name: name.to_string(),
                logo: logo.to_string(),
                role: role.to_string(),
                skills: strings(skills),
                location: location.to_string(),
                work_mode,
            }
        };
        let companies = vec![
            company("1", "Google", "🔍", "Software Engineer", &["JavaScript", "React", "Data Structures"], "Mountain View, CA", WorkMode::Hybrid),
            company("2", "Meta", "👥", "Frontend Developer", &["React", "JavaScript"], "Menlo Park, CA", WorkMode::Remote),
            company("3", "Microsoft", "🪟", "Full Stack Developer", &["JavaScript", "Node.js", "React"], "Redmond, WA", WorkMode::OnSite),
            company("4", "Netflix", "🎬", "Software Engineer", &["React", "JavaScript", "Node.js"], "Los Gatos, CA", WorkMode::Hybrid),
        ];

        let problem = |id: &str, title: &str, difficulty, tags: &[&str], slug: &str| PracticeProblem {
            id: Id::new(id),
            title: title.to_string(),
            difficulty,
            tags: strings(tags),
            url: format!("https://leetcode.com/problems/{slug}/"),
        };
        let problems = vec![
            problem("1", "Two Sum", ProblemDifficulty::Easy, &["Array", "Hash Table"], "two-sum"),
            problem("2", "Valid Parentheses", ProblemDifficulty::Easy, &["String", "Stack"], "valid-parentheses"),
            problem("3", "Binary Tree Inorder Traversal", ProblemDifficulty::Medium, &["Tree", "Binary Tree"], "binary-tree-inorder-traversal"),
            problem("4", "Merge Two Sorted Lists", ProblemDifficulty::Easy, &["Linked List", "Recursion"], "merge-two-sorted-lists"),
            problem("5", "Maximum Subarray", ProblemDifficulty::Medium, &["Array", "Dynamic Programming"], "maximum-subarray"),
        ];

        Self::new(projects, companies, problems)
    }
}

#[async_trait]
impl RecommendationReader for StaticRecommendationCatalog {
    async fn projects(&self) -> AppResult<Vec<ProjectIdea>> {
        Ok(self.projects.clone())
    }

    async fn companies(&self) -> AppResult<Vec<CompanyOpening>> {
        Ok(self.companies.clone())
    }

    async fn problems(&self) -> AppResult<Vec<PracticeProblem>> {
        Ok(self.problems.clone())
    }
}
