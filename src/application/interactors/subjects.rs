use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::subject::{CreateSubjectDTO, UpdateSubjectDTO};
use crate::application::interface::notify::{Notification, Notifier};
use crate::domain::entities::id::Id;
use crate::domain::entities::semester::Semester;
use crate::domain::entities::subject::Subject;

pub type SubjectsBySemester = BTreeMap<Semester, Vec<Subject>>;

pub struct SubjectManager {
    subjects: Vec<Subject>,
    notifier: Arc<dyn Notifier>,
}

impl SubjectManager {
    pub fn new(subjects: Vec<Subject>, notifier: Arc<dyn Notifier>) -> Self {
        Self { subjects, notifier }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn find(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id.value == id)
    }

    pub fn replace_all(&mut self, subjects: Vec<Subject>) {
        let mut seen = HashSet::new();
        self.subjects = subjects
            .into_iter()
            .filter(|subject| {
                let fresh = seen.insert(subject.id.clone());
                if !fresh {
                    warn!("Dropping subject {} with duplicate id {}", subject.name, subject.id);
                }
                fresh
            })
            .collect();
    }

    fn reject_blank(&self, dto: &impl Validate) -> AppResult<()> {
        if let Err(e) = dto.validate() {
            self.notifier
                .notify(Notification::destructive("Error", "Please fill in all fields"));
            return Err(e.into());
        }
        Ok(())
    }

    pub fn add(&mut self, dto: CreateSubjectDTO) -> AppResult<Id<Subject>> {
        self.reject_blank(&dto)?;
        let semester: Semester = dto.semester.parse()?;
        let mut subject = Subject::new(dto.name.trim().to_string(), semester);
        while self.subjects.iter().any(|s| s.id == subject.id) {
            subject.id = Id::generate();
        }
        let id = subject.id.clone();
        info!("Subject {} added to semester {}", subject.name, subject.semester);
        self.subjects.push(subject);
        self.notifier
            .notify(Notification::info("Success", "Subject added successfully!"));
        Ok(id)
    }

    pub fn update(&mut self, dto: UpdateSubjectDTO) -> AppResult<()> {
        self.reject_blank(&dto)?;
        let semester: Semester = dto.semester.parse()?;
        let subject = self
            .subjects
            .iter_mut()
            .find(|subject| subject.id.value == dto.id)
            .ok_or(AppError::SubjectNotFound)?;
        subject.name = dto.name.trim().to_string();
        subject.semester = semester;
        info!("Subject {} updated", subject.id);
        self.notifier
            .notify(Notification::info("Success", "Subject updated successfully!"));
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> AppResult<Subject> {
        let position = self
            .subjects
            .iter()
            .position(|subject| subject.id.value == id)
            .ok_or(AppError::SubjectNotFound)?;
        let removed = self.subjects.remove(position);
        info!("Subject {} deleted", removed.id);
        self.notifier
            .notify(Notification::info("Success", "Subject deleted successfully!"));
        Ok(removed)
    }

    /// Semesters ascending; subjects within a semester keep insertion order.
    pub fn grouped_by_semester(&self) -> SubjectsBySemester {
        let mut groups = SubjectsBySemester::new();
        for subject in &self.subjects {
            groups
                .entry(subject.semester)
                .or_default()
                .push(subject.clone());
        }
        groups
    }
}

pub fn flatten(groups: SubjectsBySemester) -> Vec<Subject> {
    groups.into_values().flatten().collect()
}
