use clap::Parser;
use tracing::{debug, error};

use crate::adapter::catalog::starter::{starter_skills, starter_subjects};
use crate::adapter::console::command::{Command, ConsoleLine, ProfileCommand, SkillCommand, SubjectCommand};
use crate::adapter::console::render;
use crate::adapter::notify::toast::ToastQueue;
use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::{LoginDTO, RegisterDTO};
use crate::application::dto::profile::UpdateProfileDTO;
use crate::application::dto::recommendation::{GetRecommendationsDTO, RecommendationSection};
use crate::application::dto::skill::{CreateSkillDTO, UpdateSkillDTO};
use crate::application::dto::subject::{CreateSubjectDTO, UpdateSubjectDTO};
use crate::application::interactors::chat::ChatInteractor;
use crate::application::interactors::recommendations::GetRecommendationsInteractor;
use crate::application::interactors::session::SessionManager;
use crate::application::interactors::skills::SkillManager;
use crate::application::interactors::subjects::{SubjectManager, flatten};
use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

#[derive(Debug, Default)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Routes console lines to the interactors and renders their results.
pub struct Dashboard {
    session: SessionManager,
    skills: SkillManager,
    subjects: SubjectManager,
    chat: ChatInteractor,
    recommendations: GetRecommendationsInteractor,
    toasts: ToastQueue,
}

impl Dashboard {
    pub fn new(
        session: SessionManager,
        skills: SkillManager,
        subjects: SubjectManager,
        chat: ChatInteractor,
        recommendations: GetRecommendationsInteractor,
        toasts: ToastQueue,
    ) -> Self {
        let mut dashboard = Self {
            session,
            skills,
            subjects,
            chat,
            recommendations,
            toasts,
        };
        dashboard.load_saved_lists();
        dashboard
    }

    pub fn greeting(&self) -> Vec<String> {
        match self.session.session() {
            Session::LoggedIn { user, profile } => vec![render::welcome(user, profile.as_ref())],
            Session::LoggedOut => vec![
                "Welcome to SkillRecommend.".to_string(),
                "Sign in with `login <username> <password>` or type `help`.".to_string(),
            ],
        }
    }

    pub async fn handle_line(&mut self, line: &str) -> Reply {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Reply::default();
        }
        let mut reply = match ConsoleLine::try_parse_from(words) {
            Ok(parsed) => match self.dispatch(parsed.command).await {
                Ok(reply) => reply,
                Err(e) => {
                    debug!("Command failed: {}", e);
                    // Failures that already raised a toast are shown once.
                    if self.toasts.is_empty() {
                        Reply::lines(vec![format!("error: {}", e.user_message())])
                    } else {
                        Reply::default()
                    }
                }
            },
            Err(e) => Reply::lines(vec![e.to_string().trim_end().to_string()]),
        };
        reply
            .lines
            .extend(self.toasts.drain().into_iter().map(render::toast));
        reply
    }

    async fn dispatch(&mut self, command: Command) -> AppResult<Reply> {
        let lines = match command {
            Command::Quit => {
                return Ok(Reply {
                    lines: vec!["Goodbye!".to_string()],
                    quit: true,
                });
            }
            Command::Login { username, password } => self.login(username, password).await?,
            Command::Register {
                username,
                email,
                college_id,
                password,
                confirm_password,
            } => {
                let password = password.unwrap_or_default();
                if password != confirm_password.unwrap_or_default() {
                    return Err(AppError::PasswordMismatch);
                }
                let dto = RegisterDTO {
                    username: username.unwrap_or_default(),
                    email: email.unwrap_or_default(),
                    college_id: college_id.unwrap_or_default(),
                    password,
                };
                let user = self.session.register(dto)?;
                self.reset_lists();
                vec![format!("Account created for {}.", user.username)]
            }
            Command::Logout => {
                if self.session.is_authenticated() {
                    self.session.logout();
                    self.reset_lists();
                    self.chat.reset();
                }
                Vec::new()
            }
            Command::Whoami => {
                let user = self.require_user()?;
                render::account(user, self.session.profile())
            }
            Command::Profile(command) => self.profile(command)?,
            Command::Skill(command) => self.skill(command)?,
            Command::Subject(command) => self.subject(command)?,
            Command::Recommend { section } => self.recommend(section).await?,
            Command::Ask { question } => self.ask(question.join(" ")).await?,
            Command::Chat => {
                self.require_user()?;
                self.chat.history().await.iter().map(render::chat_message).collect()
            }
        };
        Ok(Reply::lines(lines))
    }

    fn require_user(&self) -> AppResult<&User> {
        self.session.current_user().ok_or(AppError::NotAuthenticated)
    }

    /// Swaps in the lists saved with the profile, if any were saved.
    fn load_saved_lists(&mut self) {
        let Some(profile) = self.session.profile() else {
            return;
        };
        let skills = profile.skills.clone();
        let subjects = profile.subjects.clone();
        if !skills.is_empty() {
            self.skills.replace_all(skills);
        }
        if !subjects.is_empty() {
            self.subjects.replace_all(subjects);
        }
    }

    fn reset_lists(&mut self) {
        self.skills.replace_all(starter_skills());
        self.subjects.replace_all(starter_subjects());
    }

    async fn login(&mut self, username: String, password: String) -> AppResult<Vec<String>> {
        self.session.login(LoginDTO { username, password }).await?;
        self.load_saved_lists();
        Ok(self.greeting())
    }

    fn profile(&mut self, command: ProfileCommand) -> AppResult<Vec<String>> {
        self.require_user()?;
        match command {
            ProfileCommand::Show => Ok(render::profile(self.session.profile())),
            ProfileCommand::Set {
                name,
                dob,
                semester,
                college,
                branch,
            } => {
                let dto = UpdateProfileDTO {
                    name: name.join(" "),
                    date_of_birth: dob.unwrap_or_default(),
                    semester: semester.unwrap_or_default(),
                    college: college.join(" "),
                    branch: branch.join(" "),
                    skills: self.skills.skills().to_vec(),
                    subjects: flatten(self.subjects.grouped_by_semester()),
                };
                let profile = self.session.update_profile(dto)?;
                Ok(render::profile(Some(&profile)))
            }
        }
    }

    fn skill(&mut self, command: SkillCommand) -> AppResult<Vec<String>> {
        self.require_user()?;
        match command {
            SkillCommand::List => Ok(render::skill_groups(&self.skills.grouped_by_category())),
            SkillCommand::Add { category, name } => {
                let id = self.skills.add(CreateSkillDTO {
                    name: name.join(" "),
                    category: category.unwrap_or_default(),
                })?;
                Ok(vec![format!("Added skill [{}].", id)])
            }
            SkillCommand::Edit { id, name, category } => {
                let current = self.skills.find(&id).ok_or(AppError::SkillNotFound)?;
                let name = if name.is_empty() { current.name.clone() } else { name.join(" ") };
                let category = category.unwrap_or_else(|| current.category.to_string());
                self.skills.update(UpdateSkillDTO { id, name, category })?;
                Ok(Vec::new())
            }
            SkillCommand::Delete { id } => {
                let removed = self.skills.delete(&id)?;
                Ok(vec![format!("Removed {}.", removed.name)])
            }
        }
    }

    fn subject(&mut self, command: SubjectCommand) -> AppResult<Vec<String>> {
        self.require_user()?;
        match command {
            SubjectCommand::List => Ok(render::subject_groups(&self.subjects.grouped_by_semester())),
            SubjectCommand::Add { semester, name } => {
                let id = self.subjects.add(CreateSubjectDTO {
                    name: name.join(" "),
                    semester: semester.unwrap_or_default(),
                })?;
                Ok(vec![format!("Added subject [{}].", id)])
            }
            SubjectCommand::Edit { id, name, semester } => {
                let current = self.subjects.find(&id).ok_or(AppError::SubjectNotFound)?;
                let name = if name.is_empty() { current.name.clone() } else { name.join(" ") };
                let semester = semester.unwrap_or_else(|| current.semester.to_string());
                self.subjects.update(UpdateSubjectDTO { id, name, semester })?;
                Ok(Vec::new())
            }
            SubjectCommand::Delete { id } => {
                let removed = self.subjects.delete(&id)?;
                Ok(vec![format!("Removed {}.", removed.name)])
            }
        }
    }

    async fn recommend(&self, section: RecommendationSection) -> AppResult<Vec<String>> {
        self.require_user()?;
        let skills = self.skills.skills().iter().map(|s| s.name.clone()).collect();
        let result = self
            .recommendations
            .execute(GetRecommendationsDTO { skills, section })
            .await?;
        Ok(render::recommendations(&result))
    }

    async fn ask(&self, question: String) -> AppResult<Vec<String>> {
        self.require_user()?;
        let handle = self.chat.send(&question).await?;
        if let Err(e) = handle.await {
            error!("Assistant reply task failed: {}", e);
            return Ok(vec!["The assistant could not answer right now.".to_string()]);
        }
        let history = self.chat.history().await;
        Ok(history.last().map(render::chat_message).into_iter().collect())
    }
}
