use crate::domain::entities::semester::Semester;
use crate::domain::entities::skill::{Skill, SkillCategory};
use crate::domain::entities::subject::Subject;
use crate::domain::entities::id::Id;

fn skill(id: &str, name: &str, category: SkillCategory) -> Skill {
    Skill {
        id: Id::new(id),
        name: name.to_string(),
        category,
    }
}

fn subject(id: &str, name: &str, semester: u8) -> Option<Subject> {
    Some(Subject {
        id: Id::new(id),
        name: name.to_string(),
        semester: Semester::new(semester).ok()?,
    })
}

/// Sample skills shown before the student has saved any of their own.
pub fn starter_skills() -> Vec<Skill> {
    vec![
        skill("1", "JavaScript", SkillCategory::Programming),
        skill("2", "React", SkillCategory::Frontend),
        skill("3", "Node.js", SkillCategory::Backend),
        skill("4", "Data Structures", SkillCategory::ComputerScience),
        skill("5", "MongoDB", SkillCategory::Database),
        skill("6", "Python", SkillCategory::Programming),
    ]
}

pub fn starter_subjects() -> Vec<Subject> {
    [
        subject("1", "Computer Science Fundamentals", 1),
        subject("2", "Data Structures and Algorithms", 2),
        subject("3", "Web Development", 3),
        subject("4", "Database Management", 4),
        subject("5", "Software Engineering", 5),
        subject("6", "Machine Learning", 6),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::adapter::catalog::starter::{starter_skills, starter_subjects};

    #[test]
    fn test_starter_lists_have_unique_ids() {
        let skills = starter_skills();
        let ids: HashSet<_> = skills.iter().map(|s| s.id.value.clone()).collect();
        assert_eq!(ids.len(), skills.len());

        let subjects = starter_subjects();
        assert_eq!(subjects.len(), 6);
        let ids: HashSet<_> = subjects.iter().map(|s| s.id.value.clone()).collect();
        assert_eq!(ids.len(), subjects.len());
    }
}
