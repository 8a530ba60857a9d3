use clap::{Parser, Subcommand};

use crate::application::dto::recommendation::RecommendationSection;

/// One line typed at the dashboard prompt.
#[derive(Debug, Parser)]
#[command(name = "dashboard", no_binary_name = true, disable_version_flag = true)]
pub struct ConsoleLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with your username and password
    Login { username: String, password: String },
    /// Create a new student account
    Register {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "college-id")]
        college_id: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long = "confirm-password")]
        confirm_password: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// View or edit your academic profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Manage your skills
    #[command(subcommand)]
    Skill(SkillCommand),
    /// Manage your subjects
    #[command(subcommand)]
    Subject(SubjectCommand),
    /// Browse projects, companies and practice problems
    Recommend {
        #[arg(default_value = "all")]
        section: RecommendationSection,
    },
    /// Ask the AI assistant a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Show the assistant conversation
    Chat,
    /// Leave the dashboard
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Set {
        #[arg(long, num_args = 1..)]
        name: Vec<String>,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long, num_args = 1..)]
        college: Vec<String>,
        #[arg(long, num_args = 1..)]
        branch: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SkillCommand {
    List,
    Add {
        #[arg(long)]
        category: Option<String>,
        name: Vec<String>,
    },
    Edit {
        id: String,
        #[arg(long, num_args = 1..)]
        name: Vec<String>,
        #[arg(long)]
        category: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubjectCommand {
    List,
    Add {
        #[arg(long)]
        semester: Option<String>,
        name: Vec<String>,
    },
    Edit {
        id: String,
        #[arg(long, num_args = 1..)]
        name: Vec<String>,
        #[arg(long)]
        semester: Option<String>,
    },
    Delete {
        id: String,
    },
}
