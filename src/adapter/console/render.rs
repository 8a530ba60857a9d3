use crate::application::dto::chat::ChatMessageDTO;
use crate::application::dto::recommendation::RecommendationsDTO;
use crate::application::dto::skill::SkillGroupDTO;
use crate::application::interactors::subjects::SubjectsBySemester;
use crate::application::interface::notify::{Notification, Severity};
use crate::domain::entities::profile::{BRANCHES, Profile};
use crate::domain::entities::user::User;

pub fn toast(notification: Notification) -> String {
    let marker = match notification.severity {
        Severity::Info => '*',
        Severity::Destructive => '!',
    };
    format!("{} {}: {}", marker, notification.title, notification.description)
}

pub fn welcome(user: &User, profile: Option<&Profile>) -> String {
    let name = profile.map_or(user.username.as_str(), |p| p.name.as_str());
    format!("Welcome back, {}!", name)
}

pub fn account(user: &User, profile: Option<&Profile>) -> Vec<String> {
    let mut lines = vec![
        welcome(user, profile),
        format!("  username:   {}", user.username),
        format!("  email:      {}", user.email),
        format!("  college id: {}", user.college_id),
    ];
    match profile {
        Some(p) => lines.push(format!("  semester {} of {} at {}", p.semester, p.branch, p.college)),
        None => lines.push("  Complete your profile with `profile set`.".to_string()),
    }
    lines
}

pub fn profile(profile: Option<&Profile>) -> Vec<String> {
    let Some(p) = profile else {
        return vec![
            "No profile saved yet.".to_string(),
            format!("Branches: {}", BRANCHES.join(", ")),
        ];
    };
    vec![
        format!("Name:          {}", p.name),
        format!("Date of birth: {}", p.date_of_birth.format("%Y-%m-%d")),
        format!("Semester:      {}", p.semester),
        format!("College:       {}", p.college),
        format!("Branch:        {}", p.branch),
        format!("Skills:        {}", p.skills.len()),
        format!("Subjects:      {}", p.subjects.len()),
    ]
}

pub fn skill_groups(groups: &[SkillGroupDTO]) -> Vec<String> {
    if groups.is_empty() {
        return vec!["No skills yet. Add one with `skill add`.".to_string()];
    }
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("{}:", group.category));
        for skill in &group.skills {
            lines.push(format!("  [{}] {}", skill.id, skill.name));
        }
    }
    lines
}

pub fn subject_groups(groups: &SubjectsBySemester) -> Vec<String> {
    if groups.is_empty() {
        return vec!["No subjects yet. Add one with `subject add`.".to_string()];
    }
    let mut lines = Vec::new();
    for (semester, subjects) in groups {
        lines.push(format!("Semester {}:", semester));
        for subject in subjects {
            lines.push(format!("  [{}] {}", subject.id, subject.name));
        }
    }
    lines
}

pub fn recommendations(result: &RecommendationsDTO) -> Vec<String> {
    let mut lines = Vec::new();
    if !result.projects.is_empty() {
        lines.push("Project ideas:".to_string());
        for p in &result.projects {
            lines.push(format!("  {} ({}, {})", p.title, p.difficulty, p.duration));
            lines.push(format!("    {}", p.description));
            lines.push(format!("    skills: {}", p.skills.join(", ")));
        }
    }
    if !result.companies.is_empty() {
        lines.push("Companies hiring:".to_string());
        for c in &result.companies {
            lines.push(format!("  {} {}: {}", c.logo, c.name, c.role));
            lines.push(format!("    {} ({})", c.location, c.work_mode));
            lines.push(format!("    skills: {}", c.skills.join(", ")));
        }
    }
    if !result.problems.is_empty() {
        lines.push("LeetCode practice:".to_string());
        for p in &result.problems {
            lines.push(format!("  {} [{}] {}", p.title, p.difficulty, p.tags.join(", ")));
            lines.push(format!("    {}", p.url));
        }
    }
    lines
}

pub fn chat_message(message: &ChatMessageDTO) -> String {
    let who = if message.from_bot { "assistant" } else { "you" };
    format!("[{}] {}: {}", message.timestamp.format("%H:%M"), who, message.text)
}
