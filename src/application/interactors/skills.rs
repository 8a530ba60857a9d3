use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::skill::{CreateSkillDTO, SkillGroupDTO, UpdateSkillDTO};
use crate::application::interface::notify::{Notification, Notifier};
use crate::domain::entities::id::Id;
use crate::domain::entities::skill::{Skill, SkillCategory};

/// In-memory skill list kept in insertion order.
pub struct SkillManager {
    skills: Vec<Skill>,
    notifier: Arc<dyn Notifier>,
}

impl SkillManager {
    pub fn new(skills: Vec<Skill>, notifier: Arc<dyn Notifier>) -> Self {
        Self { skills, notifier }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn find(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id.value == id)
    }

    /// Later entries sharing an id with an earlier one are dropped.
    pub fn replace_all(&mut self, skills: Vec<Skill>) {
        let mut seen = HashSet::new();
        self.skills = skills
            .into_iter()
            .filter(|skill| {
                let fresh = seen.insert(skill.id.clone());
                if !fresh {
                    warn!("Dropping skill {} with duplicate id {}", skill.name, skill.id);
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

    pub fn add(&mut self, dto: CreateSkillDTO) -> AppResult<Id<Skill>> {
        self.reject_blank(&dto)?;
        let category: SkillCategory = dto.category.parse()?;
        let mut skill = Skill::new(dto.name.trim().to_string(), category);
        while self.skills.iter().any(|s| s.id == skill.id) {
            skill.id = Id::generate();
        }
        let id = skill.id.clone();
        info!("Skill {} added in {}", skill.name, skill.category);
        self.skills.push(skill);
        self.notifier
            .notify(Notification::info("Success", "Skill added successfully!"));
        Ok(id)
    }

    pub fn update(&mut self, dto: UpdateSkillDTO) -> AppResult<()> {
        self.reject_blank(&dto)?;
        let category: SkillCategory = dto.category.parse()?;
        let skill = self
            .skills
            .iter_mut()
            .find(|skill| skill.id.value == dto.id)
            .ok_or(AppError::SkillNotFound)?;
        skill.name = dto.name.trim().to_string();
        skill.category = category;
        info!("Skill {} updated", skill.id);
        self.notifier
            .notify(Notification::info("Success", "Skill updated successfully!"));
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> AppResult<Skill> {
        let position = self
            .skills
            .iter()
            .position(|skill| skill.id.value == id)
            .ok_or(AppError::SkillNotFound)?;
        let removed = self.skills.remove(position);
        info!("Skill {} deleted", removed.id);
        self.notifier
            .notify(Notification::info("Success", "Skill deleted successfully!"));
        Ok(removed)
    }

    /// Groups skills by category, categories in order of first appearance.
    pub fn grouped_by_category(&self) -> Vec<SkillGroupDTO> {
        let mut groups: Vec<SkillGroupDTO> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill.clone()),
                None => groups.push(SkillGroupDTO {
                    category: skill.category,
                    skills: vec![skill.clone()],
                }),
            }
        }
        groups
    }
}
