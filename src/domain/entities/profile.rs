use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::semester::Semester;
use crate::domain::entities::skill::Skill;
use crate::domain::entities::subject::Subject;

pub const BRANCHES: [&str; 6] = [
    "Computer Science",
    "Information Technology",
    "Electronics",
    "Mechanical Engineering",
    "Civil Engineering",
    "Electrical Engineering",
];

/// Academic details of the logged-in student. Replaced wholesale on every
/// update, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub semester: Semester,
    pub college: String,
    pub branch: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}
