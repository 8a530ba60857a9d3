use std::fmt;

use crate::domain::entities::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkMode {
    Remote,
    OnSite,
    Hybrid,
}

impl fmt::Display for ProjectDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectDifficulty::Beginner => "Beginner",
            ProjectDifficulty::Intermediate => "Intermediate",
            ProjectDifficulty::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ProblemDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProblemDifficulty::Easy => "Easy",
            ProblemDifficulty::Medium => "Medium",
            ProblemDifficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkMode::Remote => "Remote",
            WorkMode::OnSite => "On-site",
            WorkMode::Hybrid => "Hybrid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectIdea {
    pub id: Id<ProjectIdea>,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub difficulty: ProjectDifficulty,
    pub duration: String,
}

#[derive(Debug, Clone)]
pub struct CompanyOpening {
    pub id: Id<CompanyOpening>,
    pub name: String,
    pub logo: String,
    pub role: String,
    pub skills: Vec<String>,
    pub location: String,
    pub work_mode: WorkMode,
}

#[derive(Debug, Clone)]
pub struct PracticeProblem {
    pub id: Id<PracticeProblem>,
    pub title: String,
    pub difficulty: ProblemDifficulty,
    pub tags: Vec<String>,
    pub url: String,
}
