use serde::{Deserialize, Serialize};

use crate::domain::entities::id::Id;
use crate::domain::entities::semester::Semester;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Id<Subject>,
    pub name: String,
    pub semester: Semester,
}

impl Subject {
    pub fn new(name: String, semester: Semester) -> Self {
        Self {
            id: Id::generate(),
            name,
            semester,
        }
    }
}
